//! Core building blocks: the strip configuration, the per-pixel background
//! stripper, and the single-image pipeline. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
