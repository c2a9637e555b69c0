//! Mesh flattener.
//!
//! Expands an imported scene's indexed faces into flat per-corner attribute
//! arrays, one entry per triangle corner with no shared-index reuse, and
//! records the contiguous corner range each mesh occupies. The ranges are
//! what render-time ranged draws are issued over, so meshes stay individually
//! drawable out of one shared buffer set.

use crate::data_structures::{
    model::{FlatVertexBuffers, MeshRange},
    scene::Scene,
};

/// Flatten a scene into per-corner attribute buffers plus one range per mesh,
/// in mesh-declaration order.
///
/// A single cursor runs across all meshes and never resets, so consecutive
/// ranges are contiguous: `range[k].start == range[k - 1].end + 1`. An absent
/// attribute channel (or an index outside the channel) substitutes the zero
/// vector instead of failing the load. Faces are expected to be triangles but
/// their declared index count is what gets iterated.
pub fn flatten_scene(scene: &Scene) -> (FlatVertexBuffers, Vec<MeshRange>) {
    let total_corners: usize = scene.meshes.iter().map(|m| m.corner_count()).sum();

    let mut buffers = FlatVertexBuffers::with_capacity(total_corners);
    let mut ranges = Vec::with_capacity(scene.meshes.len());

    // Cursor over the flat buffers, shared by every mesh.
    let mut cursor: usize = 0;
    for mesh in &scene.meshes {
        let start = cursor as i32;
        for face in &mesh.faces {
            for &index in &face.indices {
                let index = index as usize;
                let position = mesh
                    .positions
                    .as_ref()
                    .and_then(|p| p.get(index))
                    .copied()
                    .unwrap_or_default();
                let normal = mesh
                    .normals
                    .as_ref()
                    .and_then(|n| n.get(index))
                    .copied()
                    .unwrap_or_default();
                // Only the first two components of the texcoord channel
                // survive; the third is unused for plain UV mapping.
                let tex_coord = mesh
                    .texcoords
                    .as_ref()
                    .and_then(|t| t.get(index))
                    .map(|t| [t[0], t[1]])
                    .unwrap_or_default();

                buffers.push_corner(position, normal, tex_coord);
                cursor += 1;
            }
        }
        // Inclusive end; a mesh with zero faces yields the empty interval
        // end == start - 1 without disturbing the cursor.
        ranges.push(MeshRange {
            start,
            end: cursor as i32 - 1,
        });
    }

    log::debug!(
        "flattened {} meshes into {} corners",
        scene.meshes.len(),
        buffers.len()
    );
    (buffers, ranges)
}
