pub mod search;
pub mod time;
pub mod test_utils;

pub use search::{distinct_values, SearchTerm, Selection, ALL};
pub use time::parse_display_time;
