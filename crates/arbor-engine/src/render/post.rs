//! Full-screen post-processing pass.
//!
//! The scene is drawn into an [`OffscreenTarget`]; [`PostProcess::composite`]
//! then samples it into the swapchain image, adding bloom and an animated
//! noise-perturbed "water" overlay.

use bytemuck::{Pod, Zeroable};

use super::offscreen::OffscreenTarget;
use super::RenderCtx;

/// Tunables for the post pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PostParams {
    /// Luminance above which texels contribute to bloom.
    pub bloom_threshold: f32,
    /// Multiplier for the blurred bright texels added back.
    pub bloom_intensity: f32,
    /// Opacity of the water overlay; `0` disables it.
    pub water_strength: f32,
    /// Tiling period of the noise, in noise cells across the screen.
    pub noise_period: f32,
}

impl Default for PostParams {
    fn default() -> Self {
        Self {
            bloom_threshold: 0.6,
            bloom_intensity: 0.8,
            water_strength: 0.15,
            noise_period: 8.0,
        }
    }
}

/// Uniform layout (32 bytes):
///
///  offset  0  resolution  [f32; 2]
///  offset  8  time         f32
///  offset 12  threshold    f32
///  offset 16  intensity    f32
///  offset 20  water        f32
///  offset 24  period       f32
///  offset 28  _pad         f32
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct PostUniform {
    resolution: [f32; 2],
    time: f32,
    threshold: f32,
    intensity: f32,
    water: f32,
    period: f32,
    _pad: f32,
}

impl PostUniform {
    fn new(size: (u32, u32), time: f32, params: &PostParams) -> Self {
        Self {
            resolution: [size.0.max(1) as f32, size.1.max(1) as f32],
            time: if time.is_finite() { time } else { 0.0 },
            threshold: params.bloom_threshold.clamp(0.0, 1.0),
            intensity: params.bloom_intensity.max(0.0),
            water: params.water_strength.clamp(0.0, 1.0),
            // A period below one cell would alias.
            period: params.noise_period.round().max(1.0),
            _pad: 0.0,
        }
    }
}

/// Owns the off-screen scene texture and the composite pipeline.
#[derive(Default)]
pub struct PostProcess {
    target: OffscreenTarget,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,

    sampler: Option<wgpu::Sampler>,
    uniform_buffer: Option<wgpu::Buffer>,
}

impl PostProcess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes the scene texture to `physical_size` in the context's surface
    /// format. Call once per frame before drawing the scene.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, physical_size: (u32, u32)) {
        self.ensure_pipeline(ctx);
        self.ensure_static(ctx);
        if self.target.ensure(ctx.device, physical_size, ctx.surface_format) {
            self.bind_group = None;
        }
        self.ensure_bind_group(ctx);
    }

    /// View to draw the scene into.
    #[inline]
    pub fn scene_view(&self) -> Option<&wgpu::TextureView> {
        self.target.view()
    }

    /// Samples the scene into `surface_view`.
    ///
    /// The surface is loaded, not cleared; callers clear it first.
    pub fn composite(
        &mut self,
        ctx: &RenderCtx<'_>,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        time: f32,
        params: &PostParams,
    ) {
        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        let uniform = PostUniform::new(self.target.size(), time, params);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("arbor post pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("arbor post shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/post.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("arbor post bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: std::num::NonZeroU64::new(
                                std::mem::size_of::<PostUniform>() as u64,
                            ),
                        },
                        count: None,
                    },
                ],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("arbor post pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("arbor post pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
    }

    fn ensure_static(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_none() {
            self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("arbor post sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                ..Default::default()
            }));
        }
        if self.uniform_buffer.is_none() {
            self.uniform_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("arbor post ubo"),
                size: std::mem::size_of::<PostUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
    }

    fn ensure_bind_group(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(view) = self.target.view() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };
        let Some(ubo) = self.uniform_buffer.as_ref() else { return };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("arbor post bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: ubo.as_entire_binding(),
                },
            ],
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<PostUniform>() % 16, 0);
    }

    #[test]
    fn uniform_sanitizes_params() {
        let params = PostParams {
            bloom_threshold: 1.5,
            bloom_intensity: -1.0,
            water_strength: 2.0,
            noise_period: 0.2,
        };
        let u = PostUniform::new((0, 720), f32::NAN, &params);
        assert_eq!(u.resolution, [1.0, 720.0]);
        assert_eq!(u.time, 0.0);
        assert_eq!(u.threshold, 1.0);
        assert_eq!(u.intensity, 0.0);
        assert_eq!(u.water, 1.0);
        assert_eq!(u.period, 1.0);
    }

    #[test]
    fn noise_period_is_whole_cells() {
        let params = PostParams { noise_period: 7.6, ..PostParams::default() };
        assert_eq!(PostUniform::new((10, 10), 1.0, &params).period, 8.0);
    }

    #[test]
    fn new_pass_has_no_scene_view() {
        assert!(PostProcess::new().scene_view().is_none());
    }
}
