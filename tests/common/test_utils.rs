#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use mesh_flow::{
    DrawApi, Face, Material, Mesh, Scene, TextureHandle, TextureLoader, TextureSlot,
};

/// Texture loader that accepts every path and records what it was asked for.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub loaded: Vec<PathBuf>,
}

impl TextureLoader for RecordingLoader {
    fn load_texture(&mut self, path: &Path) -> anyhow::Result<TextureHandle> {
        self.loaded.push(path.to_path_buf());
        Ok(TextureHandle(self.loaded.len() - 1))
    }
}

/// Texture loader that fails every load, as an unreadable file would.
#[derive(Debug, Default)]
pub struct FailingLoader {
    pub attempts: usize,
}

impl TextureLoader for FailingLoader {
    fn load_texture(&mut self, path: &Path) -> anyhow::Result<TextureHandle> {
        self.attempts += 1;
        Err(anyhow!("no such texture file: {}", path.display()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Bind { handle: usize, unit: u32 },
    Draw { first: u32, count: u32 },
}

/// Recording mock of the GPU draw boundary.
#[derive(Debug, Default)]
pub struct RecordingDraw {
    pub calls: Vec<DrawCall>,
}

impl DrawApi for RecordingDraw {
    fn bind_texture(&mut self, slot: TextureSlot) {
        self.calls.push(DrawCall::Bind {
            handle: slot.handle.index(),
            unit: slot.unit,
        });
    }

    fn draw_triangles(&mut self, first: u32, count: u32) {
        self.calls.push(DrawCall::Draw { first, count });
    }
}

impl RecordingDraw {
    pub fn draws(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Draw { first, count } => Some((*first, *count)),
                _ => None,
            })
            .collect()
    }

    pub fn binds(&self) -> Vec<(usize, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Bind { handle, unit } => Some((*handle, *unit)),
                _ => None,
            })
            .collect()
    }
}

/// A mesh of `face_count` triangles with synthetic positions, normals and
/// texcoords, each face using three fresh vertices.
pub fn full_mesh(name: &str, face_count: usize, material: Option<usize>) -> Mesh {
    let vertex_count = face_count * 3;
    Mesh {
        name: name.to_string(),
        faces: (0..face_count)
            .map(|f| {
                let base = (f * 3) as u32;
                Face::triangle(base, base + 1, base + 2)
            })
            .collect(),
        positions: Some((0..vertex_count).map(|i| [i as f32, 0.0, 1.0]).collect()),
        normals: Some((0..vertex_count).map(|_| [0.0, 1.0, 0.0]).collect()),
        texcoords: Some(
            (0..vertex_count)
                .map(|i| [i as f32 * 0.1, 0.5, 0.0])
                .collect(),
        ),
        material,
    }
}

pub fn textured_material(name: &str, file: &str) -> Material {
    Material {
        name: name.to_string(),
        diffuse_texture: Some(PathBuf::from(file)),
    }
}

pub fn untextured_material(name: &str) -> Material {
    Material {
        name: name.to_string(),
        diffuse_texture: None,
    }
}

/// The end-to-end scenario used by several tests: mesh 0 has one fully
/// attributed face and a textured material, mesh 1 has two faces, no normals
/// and no material.
pub fn two_mesh_scene() -> Scene {
    let mesh0 = full_mesh("crate", 1, Some(0));
    let mut mesh1 = full_mesh("floor", 2, None);
    mesh1.normals = None;
    Scene {
        meshes: vec![mesh0, mesh1],
        materials: vec![textured_material("wood", "wood.png")],
    }
}
