//! Shader stage and shader descriptor.

use vesper_core::Extent3d;

/// Pipeline stage a shader runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader.
    Vertex,
    /// Tessellation control (hull) shader.
    TessellationControl,
    /// Tessellation evaluation (domain) shader.
    TessellationEvaluation,
    /// Fragment shader.
    Fragment,
    /// Compute shader.
    Compute,
}

impl ShaderStage {
    /// Returns true for the two tessellation stages.
    pub fn is_tessellation(&self) -> bool {
        matches!(self, Self::TessellationControl | Self::TessellationEvaluation)
    }
}

/// Descriptor for creating a shader.
///
/// The source is backend dependent (SPIR-V, GLSL, ...); this crate only
/// requires it to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderDescriptor {
    /// Debug label for the shader.
    pub label: Option<String>,
    /// Stage the shader runs in.
    pub stage: ShaderStage,
    /// Shader code.
    pub source: Vec<u8>,
    /// Entry point function name.
    pub entry_point: String,
    /// Fixed workgroup size declared by a compute shader.
    pub workgroup_size: Option<Extent3d>,
}

impl ShaderDescriptor {
    /// Create a shader descriptor with the `main` entry point.
    pub fn new(stage: ShaderStage, source: impl Into<Vec<u8>>) -> Self {
        Self {
            label: None,
            stage,
            source: source.into(),
            entry_point: "main".to_string(),
            workgroup_size: None,
        }
    }

    /// Create a vertex shader descriptor.
    pub fn vertex(source: impl Into<Vec<u8>>) -> Self {
        Self::new(ShaderStage::Vertex, source)
    }

    /// Create a fragment shader descriptor.
    pub fn fragment(source: impl Into<Vec<u8>>) -> Self {
        Self::new(ShaderStage::Fragment, source)
    }

    /// Create a compute shader descriptor.
    pub fn compute(source: impl Into<Vec<u8>>) -> Self {
        Self::new(ShaderStage::Compute, source)
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the entry point.
    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    /// Set the workgroup size of a compute shader.
    pub fn with_workgroup_size(mut self, size: Extent3d) -> Self {
        self.workgroup_size = Some(size);
        self
    }
}
