pub use super::feedback::Entity as Feedback;
pub use super::phrase::Entity as Phrase;
pub use super::profile::Entity as Profile;
pub use super::social::Entity as Social;
pub use super::user::Entity as User;
