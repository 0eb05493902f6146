use crate::core::actions::build_glyph_atlas::ports::glyph_rasterizer::GlyphBitmap;
use crate::core::actions::build_glyph_atlas::ports::glyph_texture::{
    GlyphTexture, GlyphTextureFactory,
};
use pixels::wgpu;

/// A glyph bitmap uploaded as an `R8Unorm` texture.
pub struct WgpuGlyphTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl WgpuGlyphTexture {
    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

impl GlyphTexture for WgpuGlyphTexture {
    fn size(&self) -> (u32, u32) {
        (self.texture.width(), self.texture.height())
    }
}

impl Drop for WgpuGlyphTexture {
    fn drop(&mut self) {
        self.texture.destroy();
    }
}

pub struct WgpuGlyphTextureFactory<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
}

impl<'a> WgpuGlyphTextureFactory<'a> {
    #[must_use]
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self { device, queue }
    }
}

impl GlyphTextureFactory for WgpuGlyphTextureFactory<'_> {
    type Handle = WgpuGlyphTexture;

    fn create(&mut self, character: char, bitmap: &GlyphBitmap) -> WgpuGlyphTexture {
        // glyphs without pixels (space) still get a texture so that every
        // entry can be bound the same way
        let (width, height, coverage) = if bitmap.is_empty() {
            (1, 1, &[0u8][..])
        } else {
            (bitmap.width, bitmap.height, &bitmap.coverage[..])
        };

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let label = format!("glyph {:?}", character);
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            coverage,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        WgpuGlyphTexture { texture, view }
    }
}
