//! sharpkind version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")`; the CLI and the generated
//!   reference header both read it.

/// The sharpkind version string (for example, `0.1.0-alpha.1`).
pub const SHARPKIND_VERSION: &str = env!("CARGO_PKG_VERSION");
