use pixels::wgpu;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

/// Attachment settings shared by every pipeline drawn in the scene pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetFormat {
    pub color: wgpu::TextureFormat,
    pub sample_count: u32,
    pub depth: bool,
}

impl TargetFormat {
    #[must_use]
    pub fn multisample(&self) -> wgpu::MultisampleState {
        wgpu::MultisampleState {
            count: self.sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        }
    }

    /// Depth is cleared each frame but never tested: everything is drawn in
    /// submission order.
    #[must_use]
    pub fn depth_stencil(&self) -> Option<wgpu::DepthStencilState> {
        self.depth.then(|| wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Always,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        })
    }
}

/// Size-dependent attachments, rebuilt on resize.
pub struct RenderTargets {
    msaa: Option<wgpu::TextureView>,
    depth: Option<wgpu::TextureView>,
}

impl RenderTargets {
    #[must_use]
    pub fn new(device: &wgpu::Device, format: TargetFormat, width: u32, height: u32) -> Self {
        let size = wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };

        let attachment = |label: &str, texture_format: wgpu::TextureFormat| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some(label),
                    size,
                    mip_level_count: 1,
                    sample_count: format.sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format: texture_format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        };

        Self {
            msaa: (format.sample_count > 1).then(|| attachment("msaa colour", format.color)),
            depth: format.depth.then(|| attachment("depth stencil", DEPTH_FORMAT)),
        }
    }

    /// Colour attachment that ends up in `surface`, resolving if multisampled.
    #[must_use]
    pub fn color_attachment<'a>(
        &'a self,
        surface: &'a wgpu::TextureView,
        clear: wgpu::Color,
    ) -> wgpu::RenderPassColorAttachment<'a> {
        let ops = wgpu::Operations {
            load: wgpu::LoadOp::Clear(clear),
            store: wgpu::StoreOp::Store,
        };

        match &self.msaa {
            Some(msaa) => wgpu::RenderPassColorAttachment {
                view: msaa,
                resolve_target: Some(surface),
                ops,
            },
            None => wgpu::RenderPassColorAttachment {
                view: surface,
                resolve_target: None,
                ops,
            },
        }
    }

    #[must_use]
    pub fn depth_attachment(&self) -> Option<wgpu::RenderPassDepthStencilAttachment<'_>> {
        self.depth
            .as_ref()
            .map(|view| wgpu::RenderPassDepthStencilAttachment {
                view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(0),
                    store: wgpu::StoreOp::Discard,
                }),
            })
    }
}
