//! Wren Test Utils
//!
//! Shared testing utilities for the Wren server. Provides a builder for test contexts
//! backed by in-memory SQLite databases, lazily created `tower-sessions` sessions and
//! factories for every entity.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_profile() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_profile_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let profile = factory::create_profile(db, "123456789").await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
