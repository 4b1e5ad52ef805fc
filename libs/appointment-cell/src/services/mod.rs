pub mod booking;
pub mod compatibility;
pub mod consistency;
pub mod lifecycle;
pub mod search;
pub mod stats;

pub use booking::AppointmentBookingService;
pub use compatibility::{eligible_staff, service_options, staff_options, StaffRequirement};
pub use consistency::{find_dangling_references, resolve_display, DanglingReference, ReferenceKind};
pub use lifecycle::{AppointmentLifecycleService, TransitionPolicy};
pub use search::{date_options, AppointmentFilter};
pub use stats::AppointmentStats;
