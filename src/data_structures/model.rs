//! Flattened model data, CPU- and GPU-side.
//!
//! [`FlatVertexBuffers`] holds the triangle-expanded attribute arrays produced
//! by the flattener: one entry per face corner, no index-based vertex sharing.
//! [`MeshRange`] marks the contiguous span of corners belonging to one mesh,
//! and [`MeshDescriptor`] pairs that span with the mesh's resolved texture.
//! [`FlatModel`] is the load-time product; [`GpuModel`] is its uploaded
//! counterpart with one vertex buffer per attribute, ready for ranged draws.

use wgpu::util::DeviceExt;

use crate::{
    render::{self, WgpuDraw},
    resources::texture::TextureSlot,
};

/// Parallel per-corner attribute arrays.
///
/// All three sequences have identical length: entry `i` in each describes the
/// same logical vertex. Length equals the total corner count over all meshes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlatVertexBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
}

impl FlatVertexBuffers {
    pub fn with_capacity(corners: usize) -> Self {
        Self {
            positions: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
            tex_coords: Vec::with_capacity(corners),
        }
    }

    /// Append one corner to all three buffers at once, keeping them parallel.
    pub fn push_corner(&mut self, position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) {
        self.positions.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Inclusive span `[start, end]` of corners in the flat buffers that belongs
/// to one mesh.
///
/// Signed on purpose: a mesh with zero faces yields `end == start - 1` (the
/// empty interval), which for the first mesh is `{0, -1}`. Ranges of
/// consecutive meshes are contiguous and never overlap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MeshRange {
    pub start: i32,
    pub end: i32,
}

impl MeshRange {
    /// Number of corners covered, zero for the empty interval.
    pub fn len(&self) -> u32 {
        (self.end - self.start + 1).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Everything the render dispatcher needs to know about one mesh: where its
/// corners live in the flat buffers and which cached texture to bind, if any.
/// Resolved once at load time; meshes without a texture are skipped at draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshDescriptor {
    pub range: MeshRange,
    pub texture: Option<TextureSlot>,
}

/// The CPU-side result of loading a model: flat attribute buffers plus one
/// descriptor per mesh, in mesh-declaration order. The imported scene itself
/// is discarded at this point.
#[derive(Debug, Default, Clone)]
pub struct FlatModel {
    pub buffers: FlatVertexBuffers,
    pub meshes: Vec<MeshDescriptor>,
}

impl FlatModel {
    /// Total corner count, which equals the vertex count of every draw range
    /// summed over all meshes.
    pub fn vertex_count(&self) -> usize {
        self.buffers.len()
    }
}

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];
const NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
const TEX_COORD_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![2 => Float32x2];

/// Vertex buffer layouts for the three attribute buffers, in the slot order
/// [`GpuModel::render`] sets them (0 positions, 1 normals, 2 tex coords).
pub fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 3] {
    [
        wgpu::VertexBufferLayout {
            array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRIBUTES,
        },
        wgpu::VertexBufferLayout {
            array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &NORMAL_ATTRIBUTES,
        },
        wgpu::VertexBufferLayout {
            array_stride: size_of::<[f32; 2]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &TEX_COORD_ATTRIBUTES,
        },
    ]
}

/// A [`FlatModel`] uploaded to the GPU: one device buffer per attribute plus
/// the per-mesh descriptor table carried over unchanged.
#[derive(Debug)]
pub struct GpuModel {
    pub position_buffer: wgpu::Buffer,
    pub normal_buffer: wgpu::Buffer,
    pub tex_coord_buffer: wgpu::Buffer,
    pub meshes: Vec<MeshDescriptor>,
    pub vertex_count: u32,
}

impl GpuModel {
    /// Upload the flat buffers into device-side vertex buffers.
    pub fn upload(device: &wgpu::Device, model: &FlatModel, label: &str) -> Self {
        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Position Buffer")),
            contents: bytemuck::cast_slice(&model.buffers.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let normal_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Normal Buffer")),
            contents: bytemuck::cast_slice(&model.buffers.normals),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let tex_coord_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} TexCoord Buffer")),
            contents: bytemuck::cast_slice(&model.buffers.tex_coords),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            position_buffer,
            normal_buffer,
            tex_coord_buffer,
            meshes: model.meshes.clone(),
            vertex_count: model.buffers.len() as u32,
        }
    }

    /// Issue one ranged draw per textured mesh into an already-configured
    /// render pass. The pass must use a pipeline built from
    /// [`vertex_layouts`]; `bind_groups` is the diffuse bind-group table
    /// indexed by texture handle, as produced by the GPU texture loader.
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        bind_groups: &'a [wgpu::BindGroup],
    ) {
        render_pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.normal_buffer.slice(..));
        render_pass.set_vertex_buffer(2, self.tex_coord_buffer.slice(..));

        let mut api = WgpuDraw {
            render_pass,
            bind_groups,
        };
        render::draw_meshes(&mut api, &self.meshes);
    }
}
