//! Core utilities and types shared across all Protean crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    load_config, load_reference_spec, save_config, Config, ReferenceFunctionEntry,
    ReferenceTableSpec,
};
pub use error::{ProteanError, ProteanResult};
pub use types::OutputFormat;

/// Version information for the Protean project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
