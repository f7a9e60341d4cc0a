//! Configuration models for rosters and the registrar.

pub mod roster;

pub use roster::{RegistrarConfig, RosterConfig};
