//! Core data types: imported scenes, flattened models, and GPU textures.
//!
//! - `scene` contains the importer-boundary value types (meshes, faces, materials)
//! - `model` contains the flat vertex buffers, per-mesh ranges and GPU model
//! - `texture` contains the GPU texture wrapper and creation utilities

pub mod model;
pub mod scene;
pub mod texture;
