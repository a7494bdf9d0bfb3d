//! Static tables shared by the twirl crates.
//!
//! Nothing in here is mutated at runtime: frame catalogs and color codes are
//! plain `const` data that the core copies into its own values on construction.

pub mod app;
pub mod colors;
pub mod frames;
