//! Common utilities for the integration tests.
//!
//! Every test runs against the dummy backend, which keeps pipeline telemetry
//! so tests can observe creation and release without a GPU.

use std::sync::Arc;

use vesper_graphics::{
    DeviceCapabilities, DummyBackend, Format, GraphicsDevice, Shader, ShaderDescriptor,
    ShaderStage, Texture, TextureDescriptor,
};

/// Install a test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A dummy backend plus a device created on it.
pub struct TestContext {
    pub backend: Arc<DummyBackend>,
    pub device: Arc<GraphicsDevice>,
}

impl TestContext {
    /// Create a context with default capabilities and no pipeline limit.
    pub fn new() -> Self {
        Self::with_backend(DummyBackend::new(), DeviceCapabilities::default())
    }

    /// Create a context with the given capabilities.
    pub fn with_capabilities(capabilities: DeviceCapabilities) -> Self {
        Self::with_backend(DummyBackend::new(), capabilities)
    }

    /// Create a context on a configured backend.
    pub fn with_backend(backend: DummyBackend, capabilities: DeviceCapabilities) -> Self {
        init_logging();
        let backend = Arc::new(backend);
        let device = GraphicsDevice::new(backend.clone(), capabilities);
        Self { backend, device }
    }

    /// Create a shader for `stage` with placeholder code.
    pub fn shader(&self, stage: ShaderStage) -> Arc<Shader> {
        self.device
            .create_shader(&ShaderDescriptor::new(stage, b"void main() {}".to_vec()))
            .expect("Failed to create shader")
    }

    /// Create a vertex and a fragment shader.
    pub fn vertex_fragment(&self) -> (Arc<Shader>, Arc<Shader>) {
        (
            self.shader(ShaderStage::Vertex),
            self.shader(ShaderStage::Fragment),
        )
    }

    /// Create a 2D texture.
    pub fn texture(&self, width: u32, height: u32, format: Format) -> Arc<Texture> {
        self.device
            .create_texture(&TextureDescriptor::new_2d(width, height, format))
            .expect("Failed to create texture")
    }
}
