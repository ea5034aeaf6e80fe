//! Dependency pins and build-option overrides.
//!
//! A `DependencyPin` names exactly one version of a third-party
//! library; the pin table is pure data handed verbatim to the external
//! package-resolution tool. A `DependencyOptionSet` carries per-library
//! build-time toggles (e.g., disabling a windowing backend).

use std::collections::BTreeMap;
use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};

/// An exact-version dependency pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPin {
    /// Package name
    name: String,

    /// Pinned version
    version: Version,

    /// Whether this is a development-only dependency
    dev: bool,
}

impl DependencyPin {
    /// Create a new pin.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        DependencyPin {
            name: name.into(),
            version,
            dev: false,
        }
    }

    /// Mark the pin as a development-only dependency.
    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the pinned version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if this is a development-only dependency.
    pub fn is_dev(&self) -> bool {
        self.dev
    }
}

impl fmt::Display for DependencyPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// A single dependency build-option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean toggle
    Bool(bool),
    /// Free-form value
    String(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

/// Per-dependency build-option overrides.
///
/// Keys are ordered so serialized output stays diffable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyOptionSet(BTreeMap<String, BTreeMap<String, OptionValue>>);

impl DependencyOptionSet {
    /// Create an empty option set.
    pub fn new() -> Self {
        DependencyOptionSet::default()
    }

    /// Set an option for a dependency.
    pub fn set(
        &mut self,
        dependency: impl Into<String>,
        option: impl Into<String>,
        value: impl Into<OptionValue>,
    ) {
        self.0
            .entry(dependency.into())
            .or_default()
            .insert(option.into(), value.into());
    }

    /// Get an option value, if set.
    pub fn get(&self, dependency: &str, option: &str) -> Option<&OptionValue> {
        self.0.get(dependency).and_then(|opts| opts.get(option))
    }

    /// Merge another option set over this one.
    ///
    /// The other set wins per option key; untouched keys survive.
    pub fn merge(&mut self, other: &DependencyOptionSet) {
        for (dependency, options) in &other.0 {
            let entry = self.0.entry(dependency.clone()).or_default();
            for (option, value) in options {
                entry.insert(option.clone(), value.clone());
            }
        }
    }

    /// Iterate over dependencies and their option maps.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, OptionValue>)> {
        self.0.iter()
    }

    /// Names of dependencies that have overrides.
    pub fn dependencies(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Check if no overrides are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
