/**
 * This module contains all logic for turning model files into renderable data:
 * the importer boundary, the mesh flattener, and the material/texture resolver.
 */
pub mod import;
pub mod mesh;
pub mod texture;

use std::path::Path;

use crate::data_structures::model::{FlatModel, MeshDescriptor};
use crate::data_structures::scene::Scene;
use crate::resources::{
    import::{Importer, ObjImporter, QualityPreset},
    texture::{TextureCache, TextureLoader},
};

/// Load a model file end to end: import, flatten, resolve textures.
///
/// Import failure is fatal and propagates; missing attribute channels and
/// unresolvable textures are absorbed per-mesh (see [`texture`]). The
/// imported scene is dropped here, only the flat model survives.
pub fn load_model(
    file_name: &str,
    preset: QualityPreset,
    cache: &mut TextureCache,
    loader: &mut dyn TextureLoader,
) -> anyhow::Result<FlatModel> {
    let importer = ObjImporter::new(preset);
    let scene = importer.import(Path::new(file_name))?;
    Ok(flatten_and_resolve(&scene, cache, loader))
}

/// The import-independent half of [`load_model`], usable with any
/// [`Importer`]'s output (and with hand-built scenes in tests).
pub fn flatten_and_resolve(
    scene: &Scene,
    cache: &mut TextureCache,
    loader: &mut dyn TextureLoader,
) -> FlatModel {
    let (buffers, ranges) = mesh::flatten_scene(scene);
    let textures = texture::resolve_materials(scene, cache, loader);

    let meshes = ranges
        .into_iter()
        .zip(textures)
        .map(|(range, texture)| MeshDescriptor { range, texture })
        .collect();

    FlatModel { buffers, meshes }
}
