//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` function
//! for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let profile = factory::profile::ProfileFactory::new(&db, "123456789")
//!     .nickname("Wren")
//!     .build()
//!     .await?;
//! let social = factory::create_social(&db, &profile.id).await?;
//! ```

pub mod feedback;
pub mod helpers;
pub mod phrase;
pub mod profile;
pub mod social;
pub mod user;

pub use feedback::create_feedback;
pub use phrase::create_phrase;
pub use profile::create_profile;
pub use social::create_social;
pub use user::create_user;
