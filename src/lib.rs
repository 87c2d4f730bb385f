//! Turnstile: an event ticketing backend.
//!
//! The crate is laid out in layers. `controller` exposes the HTTP surface,
//! `service` holds the workflows (checkout, listings), `data` holds the
//! query engine and repositories, and `model` holds request/response types
//! along with the pagination calculator.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
