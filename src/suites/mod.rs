//! Built-in fixtures.
//!
//! Every suite module exposes a `fixture` constructor; [`BUILTIN`] lists them
//! and the global registry instantiates each one on first access.

pub mod harness;
pub mod self_check;

use crate::registry::FixtureCtor;

/// Constructors of the fixtures that ship with the crate.
pub const BUILTIN: &[FixtureCtor] = &[harness::fixture, self_check::fixture];
