pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    clock::{FixedClock, SystemClock},
    console::{BufferConsole, StdoutConsole},
};
pub use crate::config::toml_config::DemoConfig;
pub use crate::core::runner::{DemoEngine, DemoReport, OutputFormat};
pub use crate::utils::error::{DemoError, Result};
