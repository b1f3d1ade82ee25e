//! Utility functions used across the application.
//!
//! - [`key_generator`] - Random key generation for public and secret keys
//! - [`target_url`] - Redirect target URL validation

pub mod key_generator;
pub mod target_url;
