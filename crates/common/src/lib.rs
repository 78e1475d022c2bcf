//! Shared building blocks for the content service crates: logging setup and
//! small wire types that are not owned by any one layer.

pub mod types;
pub mod utils;
