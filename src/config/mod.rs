//! JSON configuration for the command-line tool.
pub mod edgels;

pub use edgels::{load_config, EdgelOutputConfig, EdgelToolConfig};
