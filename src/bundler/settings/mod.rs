//! Configuration structures for bundling operations.
//!
//! [`Settings`] is the single explicit configuration value handed to the
//! installer generator, built with [`SettingsBuilder`].

mod builder;
mod core;
mod package;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use package::PackageSettings;
