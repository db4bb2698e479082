pub mod cache;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod llm;
pub mod memory;
pub mod pipeline;
pub mod server;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::workflow::launch;
