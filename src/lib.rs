/// SDK Version Reporter — Shared Library
///
/// This crate contains the library metadata registry and the
/// version lookup logic used by the API handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod registry;
pub mod reporter;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
