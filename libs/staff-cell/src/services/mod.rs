pub mod staff;
pub mod search;

pub use staff::StaffService;
pub use search::StaffFilter;
