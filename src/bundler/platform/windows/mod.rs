//! Windows platform bundlers.

pub mod nsis;
