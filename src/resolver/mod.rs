//! The build configuration resolver.
//!
//! Three stateless decisions, made once per configuration run:
//! whether the platform is supported, where generated build files and
//! artifacts live on disk, and which dependency build options to hand
//! to the external package-resolution tool.

pub mod layout;
pub mod options;
pub mod validate;

pub use layout::{resolve_layout, LayoutPlan, LayoutStrategy};
pub use options::{default_dependency_options, effective_dependency_options};
pub use validate::{validate, UnsupportedConfiguration, ValidationResult};
