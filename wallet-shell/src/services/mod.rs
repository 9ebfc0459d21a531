//! Browser-facing services: wallet interop and router navigation.

pub mod navigation;
pub mod wallet;
