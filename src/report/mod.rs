//! Unified result model and output rendering

pub mod model;
pub mod render;
