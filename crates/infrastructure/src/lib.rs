//! Ferrous Recon Infrastructure Layer
pub mod system;
pub mod targets;
