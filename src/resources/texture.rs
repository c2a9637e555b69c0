//! Material/texture resolution and the texture cache.
//!
//! [`TextureCache`] deduplicates texture loads by resolved absolute path and
//! hands out [`TextureSlot`]s (opaque handle + cache-assigned texture unit).
//! Loading itself goes through the [`TextureLoader`] seam so the cache stays
//! GPU-agnostic; [`GpuTextureLoader`] is the wgpu-backed implementation that
//! builds one diffuse bind group per loaded texture.
//!
//! Resolution policy: a mesh whose material has no diffuse texture, or whose
//! texture file cannot be loaded, is recorded as texture-less and skipped at
//! render time. Neither condition aborts the load.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::data_structures::{scene::Scene, texture::Texture};

/// Opaque handle to a cached texture. For the GPU loader this indexes its
/// bind-group table; mocks are free to assign whatever they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub usize);

impl TextureHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A cached texture: its handle plus the texture unit the cache assigned to
/// it (insertion order, stable for the cache's lifetime).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSlot {
    pub handle: TextureHandle,
    pub unit: u32,
}

/// The seam through which the cache actually loads a texture file.
pub trait TextureLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle>;
}

/// Path-keyed texture cache.
///
/// Relative paths resolve against the configured base texture directory.
/// Each distinct resolved path is loaded at most once; repeated resolution
/// returns the already-assigned slot. The cache is an explicitly passed,
/// lifetime-scoped resource and may be shared across several model loads.
#[derive(Debug, Default)]
pub struct TextureCache {
    base_dir: PathBuf,
    entries: HashMap<PathBuf, TextureSlot>,
}

impl TextureCache {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            entries: HashMap::new(),
        }
    }

    /// Resolve `file` against the base directory and return its slot,
    /// loading through `loader` only on first use of that path.
    pub fn resolve(
        &mut self,
        file: &Path,
        loader: &mut dyn TextureLoader,
    ) -> Result<TextureSlot> {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.base_dir.join(file)
        };

        if let Some(slot) = self.entries.get(&path) {
            return Ok(*slot);
        }

        let handle = loader
            .load_texture(&path)
            .with_context(|| format!("failed to load texture {}", path.display()))?;
        let slot = TextureSlot {
            handle,
            unit: self.entries.len() as u32,
        };
        self.entries.insert(path, slot);
        Ok(slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve each mesh's material to a texture slot, in mesh order.
///
/// Returns one entry per mesh. `None` marks a texture-less mesh: no material,
/// a material without a diffuse texture, or a texture that failed to load.
/// Failures are absorbed here with a warning; they reduce visual fidelity but
/// never fail the load.
pub fn resolve_materials(
    scene: &Scene,
    cache: &mut TextureCache,
    loader: &mut dyn TextureLoader,
) -> Vec<Option<TextureSlot>> {
    scene
        .meshes
        .iter()
        .map(|mesh| {
            let material = mesh.material.and_then(|idx| scene.materials.get(idx))?;
            let file = material.diffuse_texture.as_deref().or_else(|| {
                log::warn!(
                    "material {} references no diffuse texture, mesh {} will be skipped",
                    material.name,
                    mesh.name
                );
                None
            })?;
            match cache.resolve(file, loader) {
                Ok(slot) => Some(slot),
                Err(e) => {
                    log::warn!("mesh {} will be skipped: {e:#}", mesh.name);
                    None
                }
            }
        })
        .collect()
}

/// One bind-group layout entry pair per diffuse texture: the sampled texture
/// and its sampler, both fragment-visible.
pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("Diffuse texture bind group layout"),
    })
}

/// wgpu-backed [`TextureLoader`]: reads the file, uploads it, and keeps one
/// diffuse bind group per texture. Handles index into [`Self::bind_groups`].
pub struct GpuTextureLoader<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub layout: &'a wgpu::BindGroupLayout,
    pub textures: Vec<Texture>,
    pub bind_groups: Vec<wgpu::BindGroup>,
}

impl<'a> GpuTextureLoader<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        layout: &'a wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            device,
            queue,
            layout,
            textures: Vec::new(),
            bind_groups: Vec::new(),
        }
    }
}

impl TextureLoader for GpuTextureLoader<'_> {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle> {
        let data = fs::read(path)
            .with_context(|| format!("failed to read texture file {}", path.display()))?;
        let label = path.to_string_lossy();
        let format = path.extension().and_then(|e| e.to_str());
        let texture = Texture::from_bytes(self.device, self.queue, &data, &label, format)?;

        let sampler = texture
            .sampler
            .as_ref()
            .expect("diffuse textures always carry a sampler");
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
            label: Some(&format!("{label} bind group")),
        });

        self.textures.push(texture);
        self.bind_groups.push(bind_group);
        Ok(TextureHandle(self.bind_groups.len() - 1))
    }
}
