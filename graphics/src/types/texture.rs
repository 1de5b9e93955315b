//! Texture descriptor.

use vesper_core::Extent3d;

use super::{Format, ImageType, SampleCount};

/// Descriptor for creating a texture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureDescriptor {
    /// Debug label for the texture.
    pub label: Option<String>,
    /// Dimensionality of the texture.
    pub image_type: ImageType,
    /// Texel format.
    pub format: Format,
    /// Size of the base mip level.
    pub size: Extent3d,
    /// Mip level count.
    pub mip_level_count: u32,
    /// Sample count for multisampling.
    pub sample_count: SampleCount,
}

impl TextureDescriptor {
    /// Create a new 2D texture descriptor.
    pub fn new_2d(width: u32, height: u32, format: Format) -> Self {
        Self {
            format,
            size: Extent3d::new_2d(width, height),
            ..Default::default()
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the image type.
    pub fn with_image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = image_type;
        self
    }

    /// Set the mip level count.
    pub fn with_mip_levels(mut self, count: u32) -> Self {
        self.mip_level_count = count;
        self
    }

    /// Set the sample count for multisampling.
    pub fn with_sample_count(mut self, count: SampleCount) -> Self {
        self.sample_count = count;
        self
    }

    /// Number of mip levels in a full chain for this size.
    pub fn max_mip_levels(&self) -> u32 {
        let largest = self.size.width.max(self.size.height).max(self.size.depth);
        u32::BITS - largest.leading_zeros()
    }
}

impl Default for TextureDescriptor {
    fn default() -> Self {
        Self {
            label: None,
            image_type: ImageType::Tex2d,
            format: Format::Undefined,
            size: Extent3d::default(),
            mip_level_count: 1,
            sample_count: SampleCount::X1,
        }
    }
}
