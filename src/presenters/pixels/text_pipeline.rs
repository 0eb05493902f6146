use crate::controllers::interactive::data::overlay_line::OverlayLine;
use crate::core::actions::layout_text::text_compositor::TextCompositor;
use crate::core::data::glyph_atlas::GlyphAtlas;
use crate::core::data::positioned_quad::PositionedQuad;
use crate::errors::RenderBackendError;
use crate::presenters::pixels::glyph_textures::WgpuGlyphTexture;
use crate::presenters::pixels::render_targets::TargetFormat;
use crate::presenters::pixels::shader_source::{create_shader_module, validated};
use bytemuck::{Pod, Zeroable};
use pixels::wgpu;

const VERTICES_PER_QUAD: u32 = 6;
const INITIAL_QUAD_CAPACITY: usize = 128;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 3],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenUniforms {
    size: [f32; 2],
    _padding: [f32; 2],
}

/// Two triangles per glyph quad, wound top-left, bottom-left, bottom-right
/// then top-left, bottom-right, top-right.
#[must_use]
pub fn quad_vertices(quad: &PositionedQuad, color: [f32; 3]) -> [TextVertex; 6] {
    let [tl, bl, br, tr] = quad.corners().map(|[x, y, u, v]| TextVertex {
        position: [x, y],
        tex_coords: [u, v],
        color,
    });

    [tl, bl, br, tl, br, tr]
}

/// Draws overlay text, one draw call per glyph since every glyph has its own
/// texture.
pub struct TextPipeline {
    pipeline: wgpu::RenderPipeline,
    screen_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
    glyph_bind_groups: Vec<wgpu::BindGroup>,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    draws: Vec<(usize, u32)>,
}

impl TextPipeline {
    pub fn new(
        device: &wgpu::Device,
        target: TargetFormat,
        shader_source: &str,
        atlas: &GlyphAtlas<WgpuGlyphTexture>,
    ) -> Result<Self, RenderBackendError> {
        let shader = create_shader_module(device, "text", shader_source)?;

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("text screen uniforms"),
            size: std::mem::size_of::<ScreenUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let screen_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("text screen uniforms"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("text screen uniforms"),
            layout: &screen_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let glyph_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glyph texture"),
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
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glyph sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let glyph_bind_groups = atlas
            .iter()
            .map(|(_, entry)| {
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("glyph texture"),
                    layout: &glyph_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(entry.texture.view()),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                    ],
                })
            })
            .collect();

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("text"),
            bind_group_layouts: &[&screen_layout, &glyph_layout],
            push_constant_ranges: &[],
        });

        let pipeline = validated(device, "text", || {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("text"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<TextVertex>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x2,
                            1 => Float32x2,
                            2 => Float32x3
                        ],
                    }],
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: target.depth_stencil(),
                multisample: target.multisample(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target.color,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                multiview: None,
            })
        })?;

        let vertex_capacity = INITIAL_QUAD_CAPACITY * VERTICES_PER_QUAD as usize;

        Ok(Self {
            pipeline,
            screen_buffer,
            screen_bind_group,
            glyph_bind_groups,
            vertex_buffer: create_vertex_buffer(device, vertex_capacity),
            vertex_capacity,
            draws: Vec::new(),
        })
    }

    /// Lays out `lines` and uploads their vertices for the next `draw`.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        atlas: &GlyphAtlas<WgpuGlyphTexture>,
        lines: &[OverlayLine],
        width: u32,
        height: u32,
    ) {
        let compositor = TextCompositor::new(atlas);
        let mut vertices: Vec<TextVertex> = Vec::new();
        self.draws.clear();

        for line in lines {
            for quad in compositor.layout(&line.text, line.x, line.y, line.scale) {
                if quad.is_empty() {
                    continue;
                }
                let Some(glyph_index) = GlyphAtlas::<WgpuGlyphTexture>::index_of(quad.glyph) else {
                    continue;
                };

                self.draws.push((glyph_index, vertices.len() as u32));
                vertices.extend_from_slice(&quad_vertices(&quad, line.color));
            }
        }

        if vertices.len() > self.vertex_capacity {
            self.vertex_capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
        }

        let screen = ScreenUniforms {
            size: [width as f32, height as f32],
            _padding: [0.0; 2],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::bytes_of(&screen));

        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
    }

    pub fn draw<'rp>(&'rp self, pass: &mut wgpu::RenderPass<'rp>) {
        if self.draws.is_empty() {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.screen_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        for (glyph_index, first_vertex) in &self.draws {
            pass.set_bind_group(1, &self.glyph_bind_groups[*glyph_index], &[]);
            pass.draw(*first_vertex..*first_vertex + VERTICES_PER_QUAD, 0..1);
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertex_capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("text vertices"),
        size: (vertex_capacity * std::mem::size_of::<TextVertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
