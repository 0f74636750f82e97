//! Rendering module
//!
//! `scene` tessellates the game state into a triangle list; `pipeline`
//! draws that list with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
