//! Terminal front end for Skycast
//!
//! Argument parsing, text rendering of the display model and the
//! interactive session loop. The binary in `main.rs` wires these to the
//! configuration and the weather adapter.

pub mod cli;
pub mod interactive;
pub mod render;
pub mod setup;
