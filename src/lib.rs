//! mesh-flow
//!
//! A small model-loading core that converts imported 3D scenes into flat,
//! GPU-uploadable vertex buffers. Each mesh's indexed faces are expanded to
//! one entry per triangle corner, the contiguous corner range of every mesh
//! is recorded for ranged draws, and each mesh's diffuse texture is resolved
//! once at load time through a path-keyed texture cache. Rendering then walks
//! the per-mesh descriptors, binds the cached texture and issues one draw per
//! textured mesh.
//!
//! High-level modules
//! - `context`: headless GPU context (device/queue) and camera resources
//! - `data_structures`: scenes, flat models, mesh ranges and GPU textures
//! - `resources`: the importer boundary, mesh flattener and texture resolver
//! - `render`: per-mesh draw dispatch behind a mockable GPU seam
//! - `pipelines`: the textured-model render pipeline
//!
//! The host application owns windowing, the surface and the frame loop; load
//! a [`data_structures::model::FlatModel`] with [`resources::load_model`],
//! upload it via [`data_structures::model::GpuModel::upload`], and call
//! [`data_structures::model::GpuModel::render`] inside your render pass.

pub mod context;
pub mod data_structures;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu;
pub use data_structures::model::{FlatModel, FlatVertexBuffers, GpuModel, MeshDescriptor, MeshRange};
pub use data_structures::scene::{Face, Material, Mesh, Scene};
pub use render::{DrawApi, draw_meshes};
pub use resources::import::{Importer, ObjImporter, QualityPreset};
pub use resources::load_model;
pub use resources::texture::{TextureCache, TextureHandle, TextureLoader, TextureSlot};
