//! Shared utilities: HTML escaping, MIME detection, path normalization.

pub mod html;
pub mod mime;
pub mod path;
