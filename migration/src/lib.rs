pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_profile_table;
mod m20260101_000003_create_social_table;
mod m20260102_000004_create_feedback_table;
mod m20260102_000005_create_phrase_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_profile_table::Migration),
            Box::new(m20260101_000003_create_social_table::Migration),
            Box::new(m20260102_000004_create_feedback_table::Migration),
            Box::new(m20260102_000005_create_phrase_table::Migration),
        ]
    }
}
