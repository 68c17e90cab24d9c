// Cache module for local filesystem caching.
// Stores the fetched star list so repeat runs within an hour skip the API.

pub mod paths;
pub mod store;

pub use paths::star_data_path;
pub use store::{FRESHNESS_WINDOW, read_fresh, write_record};
