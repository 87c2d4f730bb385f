//! SeaORM entities for the Turnstile database schema.

pub mod prelude;

pub mod coupon;
pub mod event;
pub mod payment;
pub mod payment_line;
pub mod ticket;
pub mod ticket_type;
pub mod user;
