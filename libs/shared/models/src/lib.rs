pub mod auth;
pub mod error;
pub mod notice;
pub mod display;

pub use auth::User;
pub use error::AppError;
pub use notice::{Notice, NoticeKind, NOTICE_TTL_SECONDS};
pub use display::{BadgeVariant, SelectOption};
