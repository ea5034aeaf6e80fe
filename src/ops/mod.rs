//! High-level operations.
//!
//! This module contains the implementation of Drydock commands.

pub mod drydock_configure;

pub use drydock_configure::{
    configure, ConfigureOutcome, GeneratorConfig, LayoutSection, GENERATOR_CONFIG_FILE,
};
