/// Color texture that can be rendered into and sampled afterwards.
///
/// Sized in physical pixels. [`OffscreenTarget::ensure`] recreates the texture
/// when the size or format changes, so the post pass can keep one instance
/// across window resizes.
#[derive(Default)]
pub struct OffscreenTarget {
    texture: Option<wgpu::Texture>,
    view: Option<wgpu::TextureView>,
    size: (u32, u32),
    format: Option<wgpu::TextureFormat>,
}

impl OffscreenTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure the texture matches `size` and `format`.
    ///
    /// Returns `true` when the texture was (re)created; any bind group that
    /// references the old view must then be rebuilt. Zero dimensions are
    /// clamped to one pixel.
    pub fn ensure(
        &mut self,
        device: &wgpu::Device,
        size: (u32, u32),
        format: wgpu::TextureFormat,
    ) -> bool {
        let size = (size.0.max(1), size.1.max(1));
        if !needs_realloc(self.view.is_some(), self.size, self.format, size, format) {
            return false;
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("arbor offscreen scene"),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        log::debug!("offscreen target allocated: {}x{} {:?}", size.0, size.1, format);

        self.texture = Some(texture);
        self.view = Some(view);
        self.size = size;
        self.format = Some(format);
        true
    }

    /// View of the current texture, or `None` before the first `ensure`.
    #[inline]
    pub fn view(&self) -> Option<&wgpu::TextureView> {
        self.view.as_ref()
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

fn needs_realloc(
    allocated: bool,
    current_size: (u32, u32),
    current_format: Option<wgpu::TextureFormat>,
    size: (u32, u32),
    format: wgpu::TextureFormat,
) -> bool {
    !allocated || current_size != size || current_format != Some(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FMT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8UnormSrgb;

    #[test]
    fn first_use_allocates() {
        assert!(needs_realloc(false, (0, 0), None, (1, 1), FMT));
    }

    #[test]
    fn unchanged_target_is_reused() {
        assert!(!needs_realloc(true, (800, 600), Some(FMT), (800, 600), FMT));
    }

    #[test]
    fn resize_or_format_change_reallocates() {
        assert!(needs_realloc(true, (800, 600), Some(FMT), (801, 600), FMT));
        assert!(needs_realloc(
            true,
            (800, 600),
            Some(FMT),
            (800, 600),
            wgpu::TextureFormat::Rgba8UnormSrgb
        ));
    }

    #[test]
    fn fresh_target_has_no_view() {
        let target = OffscreenTarget::new();
        assert!(target.view().is_none());
        assert_eq!(target.size(), (0, 0));
    }
}
