//! Command implementations for the unit-lister CLI

pub mod completions;
pub mod export;
pub mod helpers;
pub mod issues;
pub mod list;
pub mod show;
pub mod version;
