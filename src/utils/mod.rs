//! Utility modules for the blog companion.

pub mod log;
