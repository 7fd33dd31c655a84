//! Utility functions for identifier generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short identifier generation and alias validation
//! - [`url_validator`] - Target URL validation
//! - [`client_info`] - Client metadata extraction from HTTP headers

pub mod client_info;
pub mod code_generator;
pub mod url_validator;
