//! Test support for Turnstile: in-memory sqlite databases, schema creation
//! from entities, and fixture inserts for the ticketing tables.

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestContext;

pub mod prelude {
    pub use crate::{builder::TestBuilder, error::TestError, setup::TestContext};
}
