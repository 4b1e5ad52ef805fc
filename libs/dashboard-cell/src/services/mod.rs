pub mod overview;

pub use overview::{DashboardService, UPCOMING_LIMIT};
