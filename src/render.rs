//! Per-mesh render dispatch.
//!
//! [`DrawApi`] is the GPU boundary the dispatcher depends on: bind a cached
//! texture, issue a ranged triangle-list draw. It is named for its semantics
//! rather than any particular graphics API, which keeps [`draw_meshes`]
//! testable against a recording mock. [`WgpuDraw`] adapts an active
//! `wgpu::RenderPass` to it.

use crate::{data_structures::model::MeshDescriptor, resources::texture::TextureSlot};

/// The draw-side GPU interface.
///
/// `bind_texture` makes the slot's texture current for subsequent draws,
/// including whatever sampler-unit selection the backend needs (in wgpu the
/// sampler travels inside the bind group, so selecting the group selects the
/// unit). `draw_triangles` draws `count` vertices of a triangle list starting
/// at vertex `first` of the currently bound flat buffers.
pub trait DrawApi {
    fn bind_texture(&mut self, slot: TextureSlot);
    fn draw_triangles(&mut self, first: u32, count: u32);
}

/// Draw every textured mesh, one ranged draw each, in mesh-declaration order.
///
/// Texture-less meshes are skipped entirely, the documented resolution policy
/// (see `resources::texture`). No batching or sorting by material happens;
/// redundant texture binds between consecutive meshes are accepted.
pub fn draw_meshes(api: &mut impl DrawApi, meshes: &[MeshDescriptor]) {
    for mesh in meshes {
        let Some(slot) = mesh.texture else {
            continue;
        };
        if mesh.range.is_empty() {
            continue;
        }
        api.bind_texture(slot);
        api.draw_triangles(mesh.range.start as u32, mesh.range.len());
    }
}

/// [`DrawApi`] over an active wgpu render pass.
///
/// Expects the pass to already have the model pipeline and vertex buffers
/// set; `bind_groups` is the diffuse bind-group table built by the GPU
/// texture loader, indexed by texture handle.
pub struct WgpuDraw<'a, 'pass> {
    pub render_pass: &'a mut wgpu::RenderPass<'pass>,
    pub bind_groups: &'pass [wgpu::BindGroup],
}

impl DrawApi for WgpuDraw<'_, '_> {
    fn bind_texture(&mut self, slot: TextureSlot) {
        match self.bind_groups.get(slot.handle.index()) {
            Some(group) => self.render_pass.set_bind_group(0, group, &[]),
            None => log::error!(
                "texture handle {} has no bind group, draw will use the previous binding",
                slot.handle.index()
            ),
        }
    }

    fn draw_triangles(&mut self, first: u32, count: u32) {
        self.render_pass.draw(first..first + count, 0..1);
    }
}
