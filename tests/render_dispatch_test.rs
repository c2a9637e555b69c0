mod common;

use common::test_utils::{DrawCall, RecordingDraw, RecordingLoader, two_mesh_scene};
use mesh_flow::{
    MeshDescriptor, MeshRange, TextureCache, TextureHandle, TextureSlot, draw_meshes,
    resources::flatten_and_resolve,
};

fn slot(handle: usize, unit: u32) -> TextureSlot {
    TextureSlot {
        handle: TextureHandle(handle),
        unit,
    }
}

#[test]
fn textureless_meshes_are_never_drawn() {
    let meshes = [
        MeshDescriptor {
            range: MeshRange { start: 0, end: 2 },
            texture: Some(slot(0, 0)),
        },
        MeshDescriptor {
            range: MeshRange { start: 3, end: 8 },
            texture: None,
        },
        MeshDescriptor {
            range: MeshRange { start: 9, end: 11 },
            texture: Some(slot(1, 1)),
        },
    ];
    let mut api = RecordingDraw::default();

    draw_meshes(&mut api, &meshes);

    assert_eq!(api.draws(), vec![(0, 3), (9, 3)]);
    assert_eq!(api.binds(), vec![(0, 0), (1, 1)]);
}

#[test]
fn draw_order_matches_mesh_declaration_order() {
    // Deliberately interleaved units/handles: the dispatcher must not sort
    // or batch by material.
    let meshes = [
        MeshDescriptor {
            range: MeshRange { start: 0, end: 5 },
            texture: Some(slot(1, 1)),
        },
        MeshDescriptor {
            range: MeshRange { start: 6, end: 8 },
            texture: Some(slot(0, 0)),
        },
        MeshDescriptor {
            range: MeshRange { start: 9, end: 14 },
            texture: Some(slot(1, 1)),
        },
    ];
    let mut api = RecordingDraw::default();

    draw_meshes(&mut api, &meshes);

    assert_eq!(
        api.calls,
        vec![
            DrawCall::Bind { handle: 1, unit: 1 },
            DrawCall::Draw { first: 0, count: 6 },
            DrawCall::Bind { handle: 0, unit: 0 },
            DrawCall::Draw { first: 6, count: 3 },
            DrawCall::Bind { handle: 1, unit: 1 },
            DrawCall::Draw { first: 9, count: 6 },
        ]
    );
}

#[test]
fn draw_count_covers_the_full_inclusive_range() {
    let meshes = [MeshDescriptor {
        range: MeshRange { start: 4, end: 9 },
        texture: Some(slot(0, 0)),
    }];
    let mut api = RecordingDraw::default();

    draw_meshes(&mut api, &meshes);

    // end - start + 1 vertices, leaving no corner of the mesh undrawn.
    assert_eq!(api.draws(), vec![(4, 6)]);
}

#[test]
fn empty_range_issues_no_draw() {
    let meshes = [MeshDescriptor {
        range: MeshRange { start: 0, end: -1 },
        texture: Some(slot(0, 0)),
    }];
    let mut api = RecordingDraw::default();

    draw_meshes(&mut api, &meshes);

    assert!(api.calls.is_empty());
}

// End-to-end scenario A: mesh 0 has one fully attributed face and a wood
// texture, mesh 1 has two faces, no normals and no material.
#[test]
fn two_mesh_scene_loads_and_draws_only_the_textured_mesh() {
    let scene = two_mesh_scene();
    let mut cache = TextureCache::new("tex");
    let mut loader = RecordingLoader::default();

    let model = flatten_and_resolve(&scene, &mut cache, &mut loader);

    assert_eq!(model.buffers.positions.len(), 9);
    assert_eq!(model.meshes[0].range, MeshRange { start: 0, end: 2 });
    assert_eq!(model.meshes[1].range, MeshRange { start: 3, end: 8 });
    for i in 3..=8 {
        assert_eq!(model.buffers.normals[i], [0.0, 0.0, 0.0]);
    }
    assert_eq!(loader.loaded, vec![std::path::PathBuf::from("tex/wood.png")]);

    let mut api = RecordingDraw::default();
    draw_meshes(&mut api, &model.meshes);

    // Mesh 0 drawn once with the wood texture bound, mesh 1 skipped.
    assert_eq!(
        api.calls,
        vec![
            DrawCall::Bind { handle: 0, unit: 0 },
            DrawCall::Draw { first: 0, count: 3 },
        ]
    );
}

// End-to-end scenario B: an empty scene renders nothing and errors nowhere.
#[test]
fn empty_scene_loads_and_draws_nothing() {
    let scene = mesh_flow::Scene::default();
    let mut cache = TextureCache::new("tex");
    let mut loader = RecordingLoader::default();

    let model = flatten_and_resolve(&scene, &mut cache, &mut loader);

    assert!(model.buffers.is_empty());
    assert!(model.meshes.is_empty());
    assert_eq!(cache.len(), 0);

    let mut api = RecordingDraw::default();
    draw_meshes(&mut api, &model.meshes);
    assert!(api.calls.is_empty());
}
