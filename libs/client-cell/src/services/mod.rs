pub mod client;
pub mod search;

pub use client::ClientService;
pub use search::ClientFilter;
