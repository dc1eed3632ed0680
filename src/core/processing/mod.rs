pub mod pipeline;
pub mod strip;
