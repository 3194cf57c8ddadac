//! Palette core: conversion, grid generation and random sampling.
//!
//! Everything here is pure and synchronous. The same `GridConfig` always
//! yields the same `Grid`.

pub mod convert;
pub mod generator;
pub mod sampler;
pub mod swatch;

pub use convert::{contrast_color, hsl_to_hex};
pub use generator::{generate_grid_colors, Grid};
pub use sampler::{random_config, random_config_with};
pub use swatch::{RenderedGrid, Swatch};
