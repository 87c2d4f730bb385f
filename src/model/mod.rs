pub mod api;
pub mod app;
pub mod paging;
pub mod payment;
pub mod ticket;
