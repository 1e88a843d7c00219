//! Core types for pixgallery
//!
//! This crate contains the domain types, session state and configuration
//! shared across all other crates.

mod config;
mod constants;
mod env_config;
mod error;
mod image;
mod session;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use image::*;
pub use session::*;
