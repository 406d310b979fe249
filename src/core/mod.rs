pub mod greeter;
pub mod server;

pub use crate::utils::error::Result;
