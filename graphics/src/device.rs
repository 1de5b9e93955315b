//! Graphics device.
//!
//! The [`GraphicsDevice`] is the main interface for creating shaders,
//! textures and pipelines. It wraps a [`GpuBackend`] together with the
//! [`DeviceCapabilities`] that creation calls are checked against.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::backend::{self, GpuBackend};
use crate::error::{GraphicsError, GraphicsResult};
use crate::pipeline::{ComputePipeline, ComputePipelineInfo, GraphicsPipeline, GraphicsPipelineInfo};
use crate::resources::{Shader, Texture};
use crate::types::{SampleCount, ShaderDescriptor, ShaderStage, TextureDescriptor};

/// Capabilities of a graphics device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceCapabilities {
    /// Maximum texture dimension.
    pub max_texture_dimension: u32,
    /// Maximum number of color attachments per pipeline.
    pub max_color_attachments: u32,
    /// Maximum number of vertex attributes per pipeline.
    pub max_vertex_attributes: u32,
    /// Whether tessellation shaders are supported.
    pub tessellation_shaders: bool,
    /// Whether compute shaders are supported.
    pub compute_shaders: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            max_texture_dimension: 16384,
            max_color_attachments: 8,
            max_vertex_attributes: 16,
            tessellation_shaders: true,
            compute_shaders: true,
        }
    }
}

impl DeviceCapabilities {
    /// Set the maximum texture dimension.
    pub fn with_max_texture_dimension(mut self, max: u32) -> Self {
        self.max_texture_dimension = max;
        self
    }

    /// Set the maximum number of color attachments.
    pub fn with_max_color_attachments(mut self, max: u32) -> Self {
        self.max_color_attachments = max;
        self
    }

    /// Set the maximum number of vertex attributes.
    pub fn with_max_vertex_attributes(mut self, max: u32) -> Self {
        self.max_vertex_attributes = max;
        self
    }

    /// Enable or disable tessellation shader support.
    pub fn with_tessellation(mut self, supported: bool) -> Self {
        self.tessellation_shaders = supported;
        self
    }

    /// Enable or disable compute shader support.
    pub fn with_compute(mut self, supported: bool) -> Self {
        self.compute_shaders = supported;
        self
    }
}

/// A graphics device for creating GPU resources and pipelines.
///
/// # Thread Safety
///
/// `GraphicsDevice` is `Send + Sync` and can be safely shared across threads.
/// Resource tracking uses interior mutability.
///
/// # Example
///
/// ```ignore
/// let device = GraphicsDevice::new(backend, DeviceCapabilities::default());
///
/// let vs = device.create_shader(&ShaderDescriptor::vertex(vs_code))?;
/// let target = device.create_texture(&TextureDescriptor::new_2d(
///     1920, 1080,
///     Format::Rgba8Unorm,
/// ))?;
/// let pipeline = device.create_graphics_pipeline(&GraphicsPipelineInfo::new(&vs))?;
/// ```
pub struct GraphicsDevice {
    backend: Arc<dyn GpuBackend>,
    capabilities: DeviceCapabilities,
    // Track allocated resources (weak references for cleanup/debugging)
    shaders: RwLock<Vec<Weak<Shader>>>,
    textures: RwLock<Vec<Weak<Texture>>>,
}

impl GraphicsDevice {
    /// Create a device on top of `backend`.
    pub fn new(backend: Arc<dyn GpuBackend>, capabilities: DeviceCapabilities) -> Arc<Self> {
        log::info!(
            "Creating GraphicsDevice on {} backend: {:?}",
            backend.name(),
            capabilities
        );
        Arc::new(Self {
            backend,
            capabilities,
            shaders: RwLock::new(Vec::new()),
            textures: RwLock::new(Vec::new()),
        })
    }

    /// Create a device on the backend selected by the enabled features.
    ///
    /// # Errors
    ///
    /// Returns an error if no backend is available.
    pub fn with_default_backend(capabilities: DeviceCapabilities) -> GraphicsResult<Arc<Self>> {
        let backend = backend::create_backend()?;
        Ok(Self::new(backend, capabilities))
    }

    /// Create a device on a fresh dummy backend with default capabilities.
    #[cfg(feature = "dummy")]
    pub fn dummy() -> Arc<Self> {
        Self::new(
            Arc::new(backend::dummy::DummyBackend::new()),
            DeviceCapabilities::default(),
        )
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        self.backend.name()
    }

    /// Get the backend.
    pub fn backend(&self) -> &Arc<dyn GpuBackend> {
        &self.backend
    }

    /// Get the device capabilities.
    pub fn capabilities(&self) -> &DeviceCapabilities {
        &self.capabilities
    }

    /// Create a shader.
    ///
    /// # Errors
    ///
    /// Returns an error if the source or entry point is empty, or if a
    /// workgroup size is given for a non-compute shader.
    pub fn create_shader(
        self: &Arc<Self>,
        descriptor: &ShaderDescriptor,
    ) -> GraphicsResult<Arc<Shader>> {
        if descriptor.source.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "shader source cannot be empty".to_string(),
            ));
        }

        if descriptor.entry_point.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "shader entry point cannot be empty".to_string(),
            ));
        }

        if let Some(size) = descriptor.workgroup_size {
            if descriptor.stage != ShaderStage::Compute {
                return Err(GraphicsError::InvalidParameter(format!(
                    "workgroup size given for a {:?} shader",
                    descriptor.stage
                )));
            }
            if size.is_empty() {
                return Err(GraphicsError::InvalidParameter(format!(
                    "workgroup size {}x{}x{} has a zero component",
                    size.width, size.height, size.depth
                )));
            }
        }

        let shader = Arc::new(Shader::new(Arc::clone(self), descriptor.clone()));
        self.shaders.write().push(Arc::downgrade(&shader));

        log::trace!(
            "GraphicsDevice: created {:?} shader {:?}, entry={}",
            descriptor.stage,
            descriptor.label,
            descriptor.entry_point
        );

        Ok(shader)
    }

    /// Create a GPU texture.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is undefined, the dimensions are zero
    /// or exceed device limits, or the mip and sample counts do not fit the
    /// image.
    pub fn create_texture(
        self: &Arc<Self>,
        descriptor: &TextureDescriptor,
    ) -> GraphicsResult<Arc<Texture>> {
        if descriptor.format.is_undefined() {
            return Err(GraphicsError::InvalidParameter(
                "texture format cannot be undefined".to_string(),
            ));
        }

        if descriptor.size.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "texture dimensions cannot be zero".to_string(),
            ));
        }

        let max_dim = self.capabilities.max_texture_dimension;
        if descriptor.size.width > max_dim
            || descriptor.size.height > max_dim
            || descriptor.size.depth > max_dim
        {
            return Err(GraphicsError::InvalidParameter(format!(
                "texture dimension exceeds maximum {max_dim}"
            )));
        }

        let max_mips = descriptor.max_mip_levels();
        if descriptor.mip_level_count == 0 || descriptor.mip_level_count > max_mips {
            return Err(GraphicsError::InvalidParameter(format!(
                "mip level count {} outside 1..={max_mips}",
                descriptor.mip_level_count
            )));
        }

        let multisampled = descriptor.sample_count != SampleCount::X1;
        if multisampled != descriptor.image_type.is_multisampled() {
            return Err(GraphicsError::InvalidParameter(format!(
                "{:?} sample count does not match image type {:?}",
                descriptor.sample_count, descriptor.image_type
            )));
        }
        if multisampled && descriptor.mip_level_count != 1 {
            return Err(GraphicsError::InvalidParameter(
                "multisampled textures cannot have mip levels".to_string(),
            ));
        }

        let texture = Arc::new(Texture::new(Arc::clone(self), descriptor.clone()));
        self.textures.write().push(Arc::downgrade(&texture));

        log::trace!(
            "GraphicsDevice: created texture {:?}, size={}x{}x{}, format={:?}",
            descriptor.label,
            descriptor.size.width,
            descriptor.size.height,
            descriptor.size.depth,
            descriptor.format
        );

        Ok(texture)
    }

    /// Create and initialize a graphics pipeline.
    ///
    /// # Errors
    ///
    /// See [`GraphicsPipeline::create`].
    pub fn create_graphics_pipeline<'s>(
        self: &Arc<Self>,
        info: &GraphicsPipelineInfo<'s>,
    ) -> GraphicsResult<GraphicsPipeline<'s>> {
        let mut pipeline = GraphicsPipeline::new(self);
        pipeline.create(info)?;
        Ok(pipeline)
    }

    /// Create and initialize a compute pipeline.
    ///
    /// # Errors
    ///
    /// See [`ComputePipeline::create`].
    pub fn create_compute_pipeline<'s>(
        self: &Arc<Self>,
        info: &ComputePipelineInfo<'s>,
    ) -> GraphicsResult<ComputePipeline<'s>> {
        let mut pipeline = ComputePipeline::new(self);
        pipeline.create(info)?;
        Ok(pipeline)
    }

    /// Check a validated graphics descriptor against the device capabilities.
    pub(crate) fn check_graphics_pipeline(
        &self,
        info: &GraphicsPipelineInfo<'_>,
    ) -> GraphicsResult<()> {
        for shader in info.shaders() {
            self.check_owned(shader)?;
        }

        if info.has_tessellation() && !self.capabilities.tessellation_shaders {
            return Err(GraphicsError::FeatureNotSupported(
                "tessellation shaders".to_string(),
            ));
        }

        let attachments = info.color_blend_state.attachments.len();
        if attachments > self.capabilities.max_color_attachments as usize {
            return Err(GraphicsError::InvalidParameter(format!(
                "{attachments} color attachments exceed maximum {}",
                self.capabilities.max_color_attachments
            )));
        }

        let attributes = info.vertex_input_state.vertex_binding_descriptions.len();
        if attributes > self.capabilities.max_vertex_attributes as usize {
            return Err(GraphicsError::InvalidParameter(format!(
                "{attributes} vertex attributes exceed maximum {}",
                self.capabilities.max_vertex_attributes
            )));
        }

        Ok(())
    }

    /// Check a validated compute descriptor against the device capabilities.
    pub(crate) fn check_compute_pipeline(
        &self,
        info: &ComputePipelineInfo<'_>,
    ) -> GraphicsResult<()> {
        if let Some(shader) = info.shader {
            self.check_owned(shader)?;
        }

        if !self.capabilities.compute_shaders {
            return Err(GraphicsError::FeatureNotSupported(
                "compute shaders".to_string(),
            ));
        }
        Ok(())
    }

    fn check_owned(&self, shader: &Shader) -> GraphicsResult<()> {
        if !std::ptr::eq(Arc::as_ptr(shader.device()), self) {
            return Err(GraphicsError::InvalidParameter(format!(
                "{:?} shader {:?} belongs to a different device",
                shader.stage(),
                shader.label()
            )));
        }
        Ok(())
    }

    /// Get the number of live shaders created by this device.
    pub fn shader_count(&self) -> usize {
        self.shaders
            .read()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Get the number of live textures created by this device.
    pub fn texture_count(&self) -> usize {
        self.textures
            .read()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Clean up dead weak references to released resources.
    pub fn cleanup_dead_resources(&self) {
        self.shaders.write().retain(|w| w.strong_count() > 0);
        self.textures.write().retain(|w| w.strong_count() > 0);
    }
}

impl std::fmt::Debug for GraphicsDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsDevice")
            .field("backend", &self.backend.name())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

// Ensure GraphicsDevice is Send + Sync
static_assertions::assert_impl_all!(GraphicsDevice: Send, Sync);
