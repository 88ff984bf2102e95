pub const SITE_NAME: &str = "Kosera";

/// Listings per page on the search and favorites pages.
pub const LISTINGS_PER_PAGE: u64 = 12;
