//! Builders to construct a registrar from configuration.

pub mod registrar_builder;

pub use registrar_builder::RegistrarBuilder;
