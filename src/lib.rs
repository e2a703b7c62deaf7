//! Hotel management system: rooms, guests, reservations and payments over a
//! SQLite store, exposed through a JSON web API and an interactive CLI.

pub mod availability;
pub mod cli;
pub mod db;
pub mod error;
pub mod handlers;
pub mod manager;
pub mod models;
pub mod seed;
pub mod server;

pub use error::{Error, Result};
pub use manager::HotelManager;
