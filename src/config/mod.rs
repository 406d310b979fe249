#[cfg(feature = "cli")]
pub mod cli;
pub mod server;

#[cfg(feature = "cli")]
pub use cli::ServerArgs;
pub use server::ServerConfig;
