//! # relay-cli
//!
//! Binary support for `anon-relay`: argument parsing, component assembly and startup.

pub mod cli;
pub mod components;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_components, build_handler_chain, RelayComponents};
pub use runner::{lookup, run_relay};
