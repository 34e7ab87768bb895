//! Utility functions for link extraction and URL processing.
//!
//! This module provides helper functions used across the application:
//!
//! - [`url_extractor`] - Lazy scanning of chat text for URL literals
//! - [`url_normalizer`] - URL validation and hostname normalization
//! - [`flavor`] - Random accompanying phrases for automatic replies

pub mod flavor;
pub mod url_extractor;
pub mod url_normalizer;
