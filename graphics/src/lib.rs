//! # Vesper Graphics
//!
//! Immutable, Vulkan-like pipeline and render pass objects on top of a
//! stateful backend.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`GraphicsDevice`] - Creates shaders, textures and pipelines
//! - [`GraphicsPipelineInfo`] / [`ComputePipelineInfo`] - Declarative pipeline state with validation
//! - [`GraphicsPipeline`] / [`ComputePipeline`] - Move-only pipeline objects owning backend state
//! - [`RenderPassInfo`] / [`RenderPassBeginInfo`] - Render targets, load behavior and viewport of a pass
//! - [`GpuBackend`] - Trait for backend implementations, with a dummy backend for testing
//!
//! ## Example
//!
//! ```ignore
//! use vesper_graphics::{GraphicsDevice, GraphicsPipelineInfo, ShaderDescriptor};
//!
//! let device = GraphicsDevice::dummy();
//! let vs = device.create_shader(&ShaderDescriptor::vertex(vs_code))?;
//! let fs = device.create_shader(&ShaderDescriptor::fragment(fs_code))?;
//! let pipeline = device.create_graphics_pipeline(
//!     &GraphicsPipelineInfo::new(&vs).with_fragment_shader(&fs),
//! )?;
//! ```

pub mod backend;
pub mod device;
pub mod error;
pub mod pipeline;
pub mod render_pass;
pub mod resources;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "dummy")]
pub use backend::dummy::DummyBackend;
pub use backend::{GpuBackend, GpuPipeline};
pub use device::{DeviceCapabilities, GraphicsDevice};
pub use error::{GraphicsError, GraphicsResult};
pub use pipeline::{
    ComputePipeline, ComputePipelineInfo, GraphicsPipeline, GraphicsPipelineInfo, PipelineId,
};
pub use render_pass::{
    AttachmentLoadOp, ClearDepthStencilValue, ClearValue, LoadAction, RenderColorAttachment,
    RenderDepthStencilAttachment, RenderPassBeginInfo, RenderPassInfo, RenderPassLoadActions,
    Viewport,
};
pub use resources::{Shader, Texture};
pub use types::{
    Extent2d, Extent3d, Format, Offset2d, Offset3d, Rect2d, ShaderDescriptor, ShaderStage,
    TextureDescriptor,
};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// Only logs the library versions; devices need no global setup.
pub fn init() {
    vesper_core::init();
    log::info!("Vesper Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_dummy_device() {
        let device = GraphicsDevice::dummy();
        assert_eq!(device.name(), "Dummy");
    }

    #[test]
    fn test_dummy_backend() {
        let backend = DummyBackend::new();
        assert!(backend.name() == "Dummy");
        assert_eq!(backend.live_pipelines(), 0);
    }
}
