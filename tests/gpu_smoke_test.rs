//! Device-requiring smoke tests, gated behind the `integration-tests`
//! feature: run with `cargo test --features integration-tests` on a machine
//! with a GPU adapter.

mod common;

#[cfg(feature = "integration-tests")]
#[tokio::test]
async fn uploads_flat_model_and_builds_the_pipeline() {
    use common::test_utils::{RecordingLoader, two_mesh_scene};
    use mesh_flow::{
        GpuModel, TextureCache, context::Context, pipelines::model::mk_model_pipeline,
        resources::flatten_and_resolve,
    };

    let ctx = Context::new().await.expect("no GPU adapter available");

    let scene = two_mesh_scene();
    let mut cache = TextureCache::new("tex");
    let mut loader = RecordingLoader::default();
    let model = flatten_and_resolve(&scene, &mut cache, &mut loader);

    let gpu_model = GpuModel::upload(&ctx.device, &model, "smoke");
    assert_eq!(gpu_model.vertex_count, 9);
    assert_eq!(gpu_model.meshes.len(), 2);

    let _pipeline = mk_model_pipeline(
        &ctx.device,
        mesh_flow::wgpu::TextureFormat::Rgba8UnormSrgb,
        &ctx.camera.bind_group_layout,
    );
}

#[cfg(feature = "integration-tests")]
#[tokio::test]
async fn camera_uniform_writes_to_its_buffer() {
    use mesh_flow::{
        Deg,
        context::{Context, view_projection},
    };

    let mut ctx = Context::new().await.expect("no GPU adapter available");

    let view_proj = view_projection(
        [0.0, 5.0, 2.0].into(),
        [0.0, 0.0, 0.0].into(),
        Deg(45.0).into(),
        16.0 / 9.0,
    );
    ctx.camera.uniform.update_view_proj(view_proj);
    ctx.camera.write(&ctx.queue);
}
