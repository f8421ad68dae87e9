//! Utility modules: build info and JSON persistence.

pub mod build_info;
pub mod persistence;

pub use build_info::version_string;
