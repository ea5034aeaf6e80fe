//! Drydock - Build-configuration front-end for C/C++ projects
//!
//! This crate provides the core library functionality for Drydock,
//! including platform validation, build-layout resolution, and the
//! dependency table handed to external package-resolution tooling.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

pub use self::core::{
    dependency::{DependencyOptionSet, DependencyPin, OptionValue},
    manifest::Manifest,
    platform::{
        Architecture, BuildVariant, CompilerFamily, CompilerId, OperatingSystem,
        PlatformDescriptor,
    },
};

pub use self::resolver::{
    resolve_layout, validate, LayoutPlan, LayoutStrategy, UnsupportedConfiguration,
    ValidationResult,
};
