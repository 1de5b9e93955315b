//! Graphics and compute pipeline objects.
//!
//! A pipeline object starts out uninitialized and becomes created through a
//! single successful [`GraphicsPipeline::create`] (or
//! [`ComputePipeline::create`]) call. From then on it owns backend state that
//! is released exactly once, when the object is dropped.
//!
//! Pipelines are move-only. [`GraphicsPipeline::take`] moves the backend state
//! out of a place that must stay valid, leaving an uninitialized pipeline
//! behind.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use vesper_core::Extent3d;

use crate::backend::GpuPipeline;
use crate::device::GraphicsDevice;
use crate::error::{GraphicsError, GraphicsResult};
use crate::resources::Shader;

use super::info::{ComputePipelineInfo, GraphicsPipelineInfo};

static NEXT_PIPELINE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a pipeline object.
///
/// Allocated once per object and never reused, so two pipelines built from
/// identical descriptors still have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipelineId(u64);

impl PipelineId {
    fn next() -> Self {
        Self(NEXT_PIPELINE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// State shared by both pipeline kinds: identity, owning device and the
/// backend handle.
struct PipelineCore {
    id: PipelineId,
    kind: &'static str,
    device: Arc<GraphicsDevice>,
    label: Option<String>,
    handle: Option<GpuPipeline>,
}

impl PipelineCore {
    fn new(device: &Arc<GraphicsDevice>, kind: &'static str) -> Self {
        Self {
            id: PipelineId::next(),
            kind,
            device: Arc::clone(device),
            label: None,
            handle: None,
        }
    }

    fn ensure_uninitialized(&self) -> GraphicsResult<()> {
        if self.handle.is_some() {
            log::warn!(
                "{} {:?} ({:?}): create called twice",
                self.kind,
                self.id,
                self.label
            );
            return Err(GraphicsError::AlreadyCreated(format!(
                "{} {:?}",
                self.kind,
                self.label.as_deref().unwrap_or("<unnamed>")
            )));
        }
        Ok(())
    }

    fn finish(&mut self, label: Option<&str>, handle: GpuPipeline) {
        log::debug!(
            "{} {:?} ({:?}): created on {}",
            self.kind,
            self.id,
            label,
            self.device.name()
        );
        self.label = label.map(str::to_owned);
        self.handle = Some(handle);
    }
}

impl Drop for PipelineCore {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        // The backend logs unknown handles itself.
        if self.device.backend().destroy_pipeline(handle).is_ok() {
            log::debug!("{} {:?} ({:?}): destroyed", self.kind, self.id, self.label);
        }
    }
}

fn warn_rejected<T>(kind: &str, label: Option<&str>, result: GraphicsResult<T>) -> GraphicsResult<T> {
    if let Err(err) = &result {
        log::warn!("{} {:?} rejected: {}", kind, label, err);
    }
    result
}

// ============================================================================
// Graphics pipeline
// ============================================================================

/// A graphics pipeline: shader stages plus all fixed-function draw state.
///
/// The lifetime `'s` ties the pipeline to the shaders it was created from;
/// they cannot be dropped while the pipeline is alive.
///
/// # Example
///
/// ```ignore
/// let mut pipeline = GraphicsPipeline::new(&device);
/// pipeline.create(&GraphicsPipelineInfo::new(&vertex_shader))?;
/// assert!(pipeline.is_created());
/// ```
pub struct GraphicsPipeline<'s> {
    core: PipelineCore,
    shaders: Vec<&'s Shader>,
}

impl<'s> GraphicsPipeline<'s> {
    /// Create an uninitialized pipeline object on `device`.
    pub fn new(device: &Arc<GraphicsDevice>) -> Self {
        Self {
            core: PipelineCore::new(device, "graphics pipeline"),
            shaders: Vec::new(),
        }
    }

    /// Validate `info` and create the backend state.
    ///
    /// Checks run in order: descriptor validation, device capabilities, then
    /// the backend. On error the object stays uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::AlreadyCreated`] if the object was already
    /// created, or the configuration, capability or backend error that
    /// stopped creation.
    pub fn create(&mut self, info: &GraphicsPipelineInfo<'s>) -> GraphicsResult<()> {
        self.core.ensure_uninitialized()?;

        let kind = self.core.kind;
        warn_rejected(kind, info.label, info.validate())?;
        warn_rejected(kind, info.label, self.core.device.check_graphics_pipeline(info))?;
        let handle = warn_rejected(
            kind,
            info.label,
            self.core.device.backend().create_graphics_pipeline(info),
        )?;

        self.shaders = info.shaders().collect();
        self.core.finish(info.label, handle);
        Ok(())
    }

    /// Move the backend state into a new object, leaving `self` uninitialized.
    ///
    /// The returned object keeps this object's identity; `self` gets a fresh
    /// one.
    pub fn take(&mut self) -> Self {
        let empty = Self::new(&self.core.device);
        std::mem::replace(self, empty)
    }

    /// Identity of this object.
    pub fn id(&self) -> PipelineId {
        self.core.id
    }

    /// Debug label given at creation.
    pub fn label(&self) -> Option<&str> {
        self.core.label.as_deref()
    }

    /// Returns true once [`create`](Self::create) has succeeded.
    pub fn is_created(&self) -> bool {
        self.core.handle.is_some()
    }

    /// Backend handle, if created.
    pub fn handle(&self) -> Option<&GpuPipeline> {
        self.core.handle.as_ref()
    }

    /// Shaders linked into this pipeline, in pipeline order.
    pub fn shaders(&self) -> &[&'s Shader] {
        &self.shaders
    }

    /// Get the parent device.
    pub fn device(&self) -> &Arc<GraphicsDevice> {
        &self.core.device
    }
}

impl PartialEq for GraphicsPipeline<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.core.id == other.core.id
    }
}

impl Eq for GraphicsPipeline<'_> {}

impl fmt::Debug for GraphicsPipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphicsPipeline")
            .field("id", &self.core.id)
            .field("label", &self.core.label)
            .field("handle", &self.core.handle)
            .field("stages", &self.shaders.len())
            .finish()
    }
}

// ============================================================================
// Compute pipeline
// ============================================================================

/// A compute pipeline: a single compute shader.
pub struct ComputePipeline<'s> {
    core: PipelineCore,
    shader: Option<&'s Shader>,
}

impl<'s> ComputePipeline<'s> {
    /// Create an uninitialized pipeline object on `device`.
    pub fn new(device: &Arc<GraphicsDevice>) -> Self {
        Self {
            core: PipelineCore::new(device, "compute pipeline"),
            shader: None,
        }
    }

    /// Validate `info` and create the backend state.
    ///
    /// # Errors
    ///
    /// Same as [`GraphicsPipeline::create`].
    pub fn create(&mut self, info: &ComputePipelineInfo<'s>) -> GraphicsResult<()> {
        self.core.ensure_uninitialized()?;

        let kind = self.core.kind;
        warn_rejected(kind, info.label, info.validate())?;
        warn_rejected(kind, info.label, self.core.device.check_compute_pipeline(info))?;
        let handle = warn_rejected(
            kind,
            info.label,
            self.core.device.backend().create_compute_pipeline(info),
        )?;

        self.shader = info.shader;
        self.core.finish(info.label, handle);
        Ok(())
    }

    /// Move the backend state into a new object, leaving `self` uninitialized.
    pub fn take(&mut self) -> Self {
        let empty = Self::new(&self.core.device);
        std::mem::replace(self, empty)
    }

    /// Fixed workgroup size reported by the backend.
    ///
    /// [`Extent3d::ZERO`] means unspecified, which is also what an
    /// uninitialized pipeline reports.
    pub fn workgroup_size(&self) -> Extent3d {
        self.core
            .handle
            .as_ref()
            .map_or(Extent3d::ZERO, |handle| {
                self.core.device.backend().workgroup_size(handle)
            })
    }

    /// Identity of this object.
    pub fn id(&self) -> PipelineId {
        self.core.id
    }

    /// Debug label given at creation.
    pub fn label(&self) -> Option<&str> {
        self.core.label.as_deref()
    }

    /// Returns true once [`create`](Self::create) has succeeded.
    pub fn is_created(&self) -> bool {
        self.core.handle.is_some()
    }

    /// Backend handle, if created.
    pub fn handle(&self) -> Option<&GpuPipeline> {
        self.core.handle.as_ref()
    }

    /// Compute shader of this pipeline, if created.
    pub fn shader(&self) -> Option<&'s Shader> {
        self.shader
    }

    /// Get the parent device.
    pub fn device(&self) -> &Arc<GraphicsDevice> {
        &self.core.device
    }
}

impl PartialEq for ComputePipeline<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.core.id == other.core.id
    }
}

impl Eq for ComputePipeline<'_> {}

impl fmt::Debug for ComputePipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputePipeline")
            .field("id", &self.core.id)
            .field("label", &self.core.label)
            .field("handle", &self.core.handle)
            .finish()
    }
}

// Pipelines are shared read-only across render passes after creation.
static_assertions::assert_impl_all!(GraphicsPipeline<'static>: Send, Sync);
static_assertions::assert_impl_all!(ComputePipeline<'static>: Send, Sync);
static_assertions::assert_not_impl_any!(GraphicsPipeline<'static>: Clone);
static_assertions::assert_not_impl_any!(ComputePipeline<'static>: Clone);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::backend::dummy::DummyBackend;
    use crate::device::DeviceCapabilities;
    use crate::types::{ShaderDescriptor, ShaderStage};

    fn setup() -> (Arc<DummyBackend>, Arc<GraphicsDevice>) {
        let backend = Arc::new(DummyBackend::new());
        let device = GraphicsDevice::new(backend.clone(), DeviceCapabilities::default());
        (backend, device)
    }

    fn shader(device: &Arc<GraphicsDevice>, stage: ShaderStage) -> Arc<Shader> {
        device
            .create_shader(&ShaderDescriptor::new(stage, b"code".to_vec()))
            .unwrap()
    }

    #[test]
    fn test_create_and_drop() {
        let (backend, device) = setup();
        let vs = shader(&device, ShaderStage::Vertex);
        {
            let mut pipeline = GraphicsPipeline::new(&device);
            assert!(!pipeline.is_created());
            pipeline
                .create(&GraphicsPipelineInfo::new(&vs).with_label("opaque"))
                .unwrap();
            assert!(pipeline.is_created());
            assert_eq!(pipeline.label(), Some("opaque"));
            assert_eq!(pipeline.shaders().len(), 1);
            assert_eq!(backend.live_pipelines(), 1);
        }
        assert_eq!(backend.live_pipelines(), 0);
        assert_eq!(backend.destroyed_pipelines(), 1);
    }

    #[test]
    fn test_second_create_fails() {
        let (backend, device) = setup();
        let vs = shader(&device, ShaderStage::Vertex);
        let info = GraphicsPipelineInfo::new(&vs);
        let mut pipeline = GraphicsPipeline::new(&device);
        pipeline.create(&info).unwrap();
        let handle_before = pipeline.handle().map(|h| format!("{h:?}"));

        assert!(matches!(
            pipeline.create(&info),
            Err(GraphicsError::AlreadyCreated(_))
        ));
        assert_eq!(pipeline.handle().map(|h| format!("{h:?}")), handle_before);
        assert_eq!(backend.created_pipelines(), 1);
    }

    #[test]
    fn test_failed_create_leaves_uninitialized() {
        let (backend, device) = setup();
        let fs = shader(&device, ShaderStage::Fragment);
        let mut pipeline = GraphicsPipeline::new(&device);
        assert!(pipeline.create(&GraphicsPipelineInfo::new(&fs)).is_err());
        assert!(!pipeline.is_created());
        assert_eq!(backend.created_pipelines(), 0);
    }

    #[test]
    fn test_identity_equality() {
        let (_backend, device) = setup();
        let vs = shader(&device, ShaderStage::Vertex);
        let info = GraphicsPipelineInfo::new(&vs);
        let a = device.create_graphics_pipeline(&info).unwrap();
        let b = device.create_graphics_pipeline(&info).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_take_transfers_ownership() {
        let (backend, device) = setup();
        let vs = shader(&device, ShaderStage::Vertex);
        let mut source = device
            .create_graphics_pipeline(&GraphicsPipelineInfo::new(&vs))
            .unwrap();
        let id = source.id();

        let taken = source.take();
        assert!(taken.is_created());
        assert_eq!(taken.id(), id);
        assert!(!source.is_created());
        assert_ne!(source.id(), id);

        drop(source);
        assert_eq!(backend.live_pipelines(), 1);
        drop(taken);
        assert_eq!(backend.live_pipelines(), 0);
        assert_eq!(backend.destroyed_pipelines(), 1);
        assert_eq!(backend.invalid_releases(), 0);
    }

    #[test]
    fn test_compute_workgroup_size() {
        let (backend, device) = setup();
        let cs = device
            .create_shader(
                &ShaderDescriptor::compute(b"cs".to_vec())
                    .with_workgroup_size(Extent3d::new(8, 8, 1)),
            )
            .unwrap();
        let mut pipeline = ComputePipeline::new(&device);
        assert_eq!(pipeline.workgroup_size(), Extent3d::ZERO);

        pipeline.create(&ComputePipelineInfo::new(&cs)).unwrap();
        assert_eq!(pipeline.workgroup_size(), Extent3d::new(8, 8, 1));
        assert!(pipeline.shader().is_some());

        let moved = pipeline.take();
        assert_eq!(moved.workgroup_size(), Extent3d::new(8, 8, 1));
        assert_eq!(pipeline.workgroup_size(), Extent3d::ZERO);
        drop(moved);
        assert_eq!(backend.live_pipelines(), 0);
    }

    #[test]
    fn test_compute_without_declared_size() {
        let (_backend, device) = setup();
        let cs = shader(&device, ShaderStage::Compute);
        let pipeline = device
            .create_compute_pipeline(&ComputePipelineInfo::new(&cs))
            .unwrap();
        assert_eq!(pipeline.workgroup_size(), Extent3d::ZERO);
    }
}
