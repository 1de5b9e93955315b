//! Shader resource.

use std::sync::Arc;

use vesper_core::Extent3d;

use crate::device::GraphicsDevice;
use crate::types::{ShaderDescriptor, ShaderStage};

/// A shader stage ready to be linked into a pipeline.
///
/// Shaders are created by [`GraphicsDevice::create_shader`]. Pipeline
/// descriptors and pipelines borrow them, so a shader cannot be dropped while
/// a pipeline built from it is alive.
pub struct Shader {
    device: Arc<GraphicsDevice>,
    descriptor: ShaderDescriptor,
}

impl Shader {
    /// Create a new shader (called by GraphicsDevice).
    pub(crate) fn new(device: Arc<GraphicsDevice>, descriptor: ShaderDescriptor) -> Self {
        Self { device, descriptor }
    }

    /// Get the parent device.
    pub fn device(&self) -> &Arc<GraphicsDevice> {
        &self.device
    }

    /// Get the shader stage.
    pub fn stage(&self) -> ShaderStage {
        self.descriptor.stage
    }

    /// Get the entry point name.
    pub fn entry_point(&self) -> &str {
        &self.descriptor.entry_point
    }

    /// Get the shader code.
    pub fn source(&self) -> &[u8] {
        &self.descriptor.source
    }

    /// Workgroup size declared by a compute shader, if any.
    pub fn workgroup_size(&self) -> Option<Extent3d> {
        self.descriptor.workgroup_size
    }

    /// Get the shader label, if set.
    pub fn label(&self) -> Option<&str> {
        self.descriptor.label.as_deref()
    }
}

impl std::fmt::Debug for Shader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shader")
            .field("stage", &self.descriptor.stage)
            .field("entry_point", &self.descriptor.entry_point)
            .field("source_len", &self.descriptor.source.len())
            .field("label", &self.descriptor.label)
            .finish()
    }
}

static_assertions::assert_impl_all!(Shader: Send, Sync);
