pub mod payment;
pub mod ticket;
