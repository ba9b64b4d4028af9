pub const SITE_NAME: &str = "Wren";

/// Page size the paginated admin tables start with.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
