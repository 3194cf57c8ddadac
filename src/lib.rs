//! HueGrid Library
//!
//! This library provides the core of the HueGrid palette explorer: HSL to hex
//! conversion, contrast selection, grid generation, random configurations,
//! a persistent theme library and a prompt-to-theme generator.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod palette;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
