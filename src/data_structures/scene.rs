//! Importer-boundary value types.
//!
//! A [`Scene`] is the plain-data result of an import: an ordered list of
//! meshes and an ordered material table. It is immutable after import and is
//! consumed (dropped) once flattening and texture resolution are done; only
//! the flat buffers and per-mesh descriptors survive into rendering.

use std::path::PathBuf;

/// An imported scene: meshes plus the material table they index into.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
}

/// One imported mesh with indexed faces and optional attribute channels.
///
/// The attribute channels are independent: a mesh may carry positions but no
/// normals, texcoords but no normals, and so on. Faces index into whichever
/// channels are present; absent channels are substituted with zero vectors by
/// the flattener rather than failing the load.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub name: String,
    pub faces: Vec<Face>,
    pub positions: Option<Vec<[f32; 3]>>,
    pub normals: Option<Vec<[f32; 3]>>,
    /// Texture-coordinate channel 0. Stored 3-component as delivered by
    /// importers; only the first two components survive flattening.
    pub texcoords: Option<Vec<[f32; 3]>>,
    /// Index into [`Scene::materials`], if the mesh references a material.
    pub material: Option<usize>,
}

impl Mesh {
    /// Total corner count across all faces, counting declared indices.
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(|f| f.indices.len()).sum()
    }
}

/// One face of a mesh. Importers are expected to triangulate, so this is
/// normally exactly three indices, but consumers iterate the declared index
/// count instead of assuming it.
#[derive(Debug, Default, Clone)]
pub struct Face {
    pub indices: Vec<u32>,
}

impl Face {
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self {
            indices: vec![a, b, c],
        }
    }
}

/// A material as far as this core cares: an optional diffuse texture path.
///
/// The path is as declared by the source file (usually relative); it gets
/// resolved against the configured texture base directory when the texture
/// cache is consulted.
#[derive(Debug, Default, Clone)]
pub struct Material {
    pub name: String,
    pub diffuse_texture: Option<PathBuf>,
}
