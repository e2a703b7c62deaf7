pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
