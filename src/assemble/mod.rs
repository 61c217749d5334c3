//! Builds the branding bundle: properties files, logos and header strips.
pub mod assembler;
pub mod properties;
