//! Platform-specific bundler implementations.
//!
//! Only Windows NSIS installers are produced; makensis runs on any host.

pub mod windows;
