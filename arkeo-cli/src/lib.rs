//! Arkeo query CLI
//!
//! Library half of the `arkeo-query` binary: configuration layering, argument
//! parsing and the command implementations.

pub mod commands;
pub mod config;
pub mod input;
pub mod ui;
