pub mod options;
pub mod payment;
pub mod repository;
pub mod ticket;
