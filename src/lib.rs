//! Canonical module names and `META-INF/INDEX.LIST` manifests for packaged
//! artifacts.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration for coordinates and output location
//! - [`coordinate`] - Coordinate validation and module name derivation
//! - [`index`] - Sorted, de-duplicated index accumulation and emission

pub mod config;
pub mod coordinate;
pub mod index;

pub use config::{BundleConfig, ConfigError};
pub use coordinate::{Coordinate, CoordinateError, ModuleName, create_name};
pub use index::{IndexAccumulator, IndexError};
