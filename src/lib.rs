pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::ServerArgs;

pub use crate::config::server::ServerConfig;
pub use crate::core::greeter::greet;
pub use crate::core::server::{build_router, serve};
pub use crate::utils::error::{HelloError, Result};
