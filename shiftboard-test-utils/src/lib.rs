//! Test setup shared by the shiftboard crate's unit and integration tests.
//!
//! Tests configure a [`TestBuilder`], call `build()` to get a [`TestContext`] backed by an
//! in-memory SQLite database and session, then insert rows through the fixture accessors
//! (`test.schedule()`, `test.person()`).

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
