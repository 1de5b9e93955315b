//! GPU texture resource.

use std::sync::Arc;

use vesper_core::{Extent2d, Extent3d};

use crate::device::GraphicsDevice;
use crate::types::{Format, SampleCount, TextureDescriptor};

/// A GPU texture resource.
///
/// Textures are created by [`GraphicsDevice::create_texture`] and are reference-counted.
/// They hold a strong reference to their parent device, keeping it alive.
///
/// # Example
///
/// ```ignore
/// let texture = device.create_texture(&TextureDescriptor::new_2d(
///     1920, 1080,
///     Format::Rgba8Unorm,
/// ))?;
/// println!("Texture size: {}x{}", texture.width(), texture.height());
/// ```
pub struct Texture {
    device: Arc<GraphicsDevice>,
    descriptor: TextureDescriptor,
}

impl Texture {
    /// Create a new texture (called by GraphicsDevice).
    pub(crate) fn new(device: Arc<GraphicsDevice>, descriptor: TextureDescriptor) -> Self {
        Self { device, descriptor }
    }

    /// Get the parent device.
    pub fn device(&self) -> &Arc<GraphicsDevice> {
        &self.device
    }

    /// Get the texture size.
    pub fn size(&self) -> Extent3d {
        self.descriptor.size
    }

    /// Get the size of the base level as seen by a render pass.
    pub fn extent_2d(&self) -> Extent2d {
        self.descriptor.size.into()
    }

    /// Get the texture width.
    pub fn width(&self) -> u32 {
        self.descriptor.size.width
    }

    /// Get the texture height.
    pub fn height(&self) -> u32 {
        self.descriptor.size.height
    }

    /// Get the texture format.
    pub fn format(&self) -> Format {
        self.descriptor.format
    }

    /// Get the sample count.
    pub fn sample_count(&self) -> SampleCount {
        self.descriptor.sample_count
    }

    /// Get the texture label, if set.
    pub fn label(&self) -> Option<&str> {
        self.descriptor.label.as_deref()
    }
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("size", &self.descriptor.size)
            .field("format", &self.descriptor.format)
            .field("image_type", &self.descriptor.image_type)
            .field("label", &self.descriptor.label)
            .finish()
    }
}

// Ensure Texture is Send + Sync
static_assertions::assert_impl_all!(Texture: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_debug() {
        let device = GraphicsDevice::dummy();
        let texture = device
            .create_texture(&TextureDescriptor::new_2d(1920, 1080, Format::Rgba8Unorm))
            .unwrap();
        let debug = format!("{:?}", texture);
        assert!(debug.contains("Texture"));
        assert!(debug.contains("1920"));
    }

    #[test]
    fn test_texture_dimensions() {
        let device = GraphicsDevice::dummy();
        let texture = device
            .create_texture(&TextureDescriptor::new_2d(800, 600, Format::D24UnormS8Uint))
            .unwrap();
        assert_eq!(texture.width(), 800);
        assert_eq!(texture.height(), 600);
        assert_eq!(texture.size(), Extent3d::new(800, 600, 1));
        assert_eq!(texture.extent_2d(), Extent2d::new(800, 600));
        assert_eq!(texture.format(), Format::D24UnormS8Uint);
        assert_eq!(texture.sample_count(), SampleCount::X1);
    }
}
