//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates. Host applications can depend on `catalog-workspace` and
//! enable `wasm` to get the `CatalogApp` JavaScript bindings from
//! `core-service` without wiring each crate individually.

pub use core_service::{CoreDependencies, CoreError, CoreService};
