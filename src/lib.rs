//! craftlogic library crate.
//!
//! Estimation lives in [`measure`], text output in [`render`], and the
//! interactive session in [`wizard`]. The binary only wires these to
//! stdin/stdout.

pub mod cli;
pub mod config;
pub mod detect;
pub mod logging;
pub mod measure;
pub mod render;
pub mod wizard;
