pub mod models;
pub mod services;
pub mod demo;

pub use models::*;
pub use services::*;
