//! Model import boundary.
//!
//! [`Importer`] is the capability seam behind which a file format lives:
//! given a path it produces a [`Scene`], already triangulated. [`ObjImporter`]
//! is the tobj-backed implementation for Wavefront OBJ/MTL files.
//!
//! Import failures (missing file, unparseable format) are fatal for the whole
//! model load; a missing material library is not, it only costs textures.

use std::{
    fs,
    io::{BufRead, BufReader, Cursor},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::data_structures::scene::{Face, Material, Mesh, Scene};

/// Post-processing preset applied while importing, mirroring the quality
/// presets of full-blown asset importers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QualityPreset {
    /// Minimum processing: triangulate and unify the index streams.
    Fast,
    /// Additionally strip point/line primitives that cannot be rendered as
    /// triangles.
    #[default]
    MaxQuality,
}

impl QualityPreset {
    fn load_options(self) -> tobj::LoadOptions {
        let base = tobj::LoadOptions {
            // Quads/polygons become triangles here, so downstream code can
            // treat every face as three corners.
            triangulate: true,
            // One index stream over unified attribute arrays, which is the
            // shape `Scene` expects.
            single_index: true,
            ..Default::default()
        };
        match self {
            QualityPreset::Fast => base,
            QualityPreset::MaxQuality => tobj::LoadOptions {
                ignore_points: true,
                ignore_lines: true,
                ..base
            },
        }
    }
}

/// A source of scenes. The rest of the crate only sees this seam, never a
/// concrete file format.
pub trait Importer {
    fn import(&self, path: &Path) -> Result<Scene>;
}

/// Wavefront OBJ importer backed by tobj.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjImporter {
    pub preset: QualityPreset,
}

impl ObjImporter {
    pub fn new(preset: QualityPreset) -> Self {
        Self { preset }
    }

    /// Import from an in-memory reader. Material libraries referenced by the
    /// OBJ are loaded relative to `material_base`.
    pub fn import_buf(&self, reader: &mut impl BufRead, material_base: &Path) -> Result<Scene> {
        let (models, materials) =
            tobj::load_obj_buf(reader, &self.preset.load_options(), |p| {
                let path = if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    material_base.join(p)
                };
                tobj::load_mtl(path)
            })?;

        // A broken or absent .mtl only costs textures, not the whole model.
        let materials = match materials {
            Ok(mats) => mats,
            Err(e) => {
                log::warn!("material library could not be loaded: {e}");
                Vec::new()
            }
        };

        Ok(to_scene(models, materials))
    }
}

impl Importer for ObjImporter {
    fn import(&self, path: &Path) -> Result<Scene> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read model file {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let scene = self
            .import_buf(&mut BufReader::new(Cursor::new(text)), base)
            .with_context(|| format!("failed to parse model file {}", path.display()))?;
        log::info!(
            "imported {} with {} meshes and {} materials",
            path.display(),
            scene.meshes.len(),
            scene.materials.len()
        );
        Ok(scene)
    }
}

fn to_scene(models: Vec<tobj::Model>, materials: Vec<tobj::Material>) -> Scene {
    let meshes = models
        .into_iter()
        .map(|m| Mesh {
            name: m.name,
            faces: m
                .mesh
                .indices
                .chunks(3)
                .map(|c| Face {
                    indices: c.to_vec(),
                })
                .collect(),
            positions: channel3(&m.mesh.positions),
            normals: channel3(&m.mesh.normals),
            texcoords: texcoord_channel(&m.mesh.texcoords),
            material: m.mesh.material_id,
        })
        .collect();

    let materials = materials
        .into_iter()
        .map(|m| Material {
            name: m.name,
            diffuse_texture: m.diffuse_texture.map(PathBuf::from),
        })
        .collect();

    Scene { meshes, materials }
}

fn channel3(data: &[f32]) -> Option<Vec<[f32; 3]>> {
    (!data.is_empty()).then(|| data.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

/// OBJ texcoords are two components; `Scene` carries the three-component
/// channel-0 layout, so pad with zero.
fn texcoord_channel(data: &[f32]) -> Option<Vec<[f32; 3]>> {
    (!data.is_empty()).then(|| data.chunks_exact(2).map(|c| [c[0], c[1], 0.0]).collect())
}
