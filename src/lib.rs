//! Lanai Suggest Library
//!
//! This library contains the core components of Lanai Suggest: a ternary
//! search trie for weighted terms, the loader that fills it from term files,
//! and the configuration and error handling around them. The library is
//! designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - `data_structures::lanai_trie` holds the trie and its collaborators
//!   (case folding, tie breaking, numeric counters)
//! - `loader` parses `term<TAB>weight` files into a trie
//! - `config` layers defaults, a config file and `LANAI__*` environment
//!   variables
//! - `error` wraps the per-area errors into `LanaiError`

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai Suggest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and the global configuration loaded
/// from `config_path` (or defaults plus environment when `None`).
pub fn init(config_path: Option<&std::path::Path>) -> error::LanaiResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    config::init_global_config(loader.load()?);

    Ok(())
}
