//! WebGPU rendering module
//!
//! The scene is tessellated on the CPU into one colored triangle list per
//! frame; the background image gets its own textured fullscreen pass.

pub mod background;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
