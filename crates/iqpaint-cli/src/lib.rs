//! iqpaint CLI library.
//!
//! This crate provides the core functionality for the iqpaint CLI, including
//! argument definitions, params resolution, and the paint, preview and
//! validate commands.

pub mod cli_args;
pub mod commands;
pub mod input;
