//! Business logic layer.
//!
//! Services orchestrate repositories and enforce the rules the data layer does not:
//! ID shape checks, field validation, ownership, social link limits and the feedback
//! status lifecycle. Both the REST controllers and the bot's interaction handlers call
//! into this layer, so a rule enforced here holds on every surface.

pub mod admin_code;
pub mod auth;
pub mod feedback;
pub mod phrase;
pub mod profile;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;

/// Number of pages needed for `total` rows at `per_page` rows per page.
pub(crate) fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
