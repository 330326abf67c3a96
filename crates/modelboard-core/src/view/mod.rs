//! Render-ready view models, independent of the terminal backend.

pub mod common;
pub mod models;
