//! Rendering
//!
//! Scene code records a [`DrawList`]; [`tessellate`] turns it into colored
//! triangles and [`RenderState`] uploads and presents them with wgpu.

pub mod draw;
pub mod mesh;
pub mod pipeline;
pub mod tessellate;
pub mod vertex;

pub use draw::{Color, DrawCommand, DrawList, Font, PointLight, rgb, rgba};
pub use mesh::StaticMesh;
pub use pipeline::RenderState;
pub use tessellate::{Frame, tessellate};
pub use vertex::Vertex;
