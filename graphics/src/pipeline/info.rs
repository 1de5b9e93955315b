//! Pipeline descriptors and their validation.

use std::collections::HashSet;

use crate::error::{GraphicsError, GraphicsResult};
use crate::render_pass::RenderPassInfo;
use crate::resources::Shader;
use crate::types::{PrimitiveTopology, ShaderStage};

use super::state::{
    ColorBlendState, DepthState, InputAssemblyState, MultisampleState, RasterizationState,
    StencilState, TessellationState, VertexInputState,
};

/// Parameters for creating a [`GraphicsPipeline`](super::GraphicsPipeline).
///
/// The descriptor borrows its shaders and attribute/attachment slices; it is
/// a plain value with no identity and can be reused for any number of
/// pipelines.
///
/// # Example
///
/// ```ignore
/// let info = GraphicsPipelineInfo::new(&vertex_shader)
///     .with_fragment_shader(&fragment_shader)
///     .with_label("opaque");
/// let pipeline = device.create_graphics_pipeline(&info)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphicsPipelineInfo<'a> {
    /// Optional name shown in graphics debuggers.
    pub label: Option<&'a str>,
    /// Vertex shader. Required.
    pub vertex_shader: Option<&'a Shader>,
    /// Fragment shader.
    pub fragment_shader: Option<&'a Shader>,
    /// Tessellation control shader.
    pub tessellation_control_shader: Option<&'a Shader>,
    /// Tessellation evaluation shader.
    pub tessellation_evaluation_shader: Option<&'a Shader>,
    pub input_assembly_state: InputAssemblyState,
    pub vertex_input_state: VertexInputState<'a>,
    /// Patch configuration. Only meaningful with both tessellation shaders.
    pub tessellation_state: Option<TessellationState>,
    pub rasterization_state: RasterizationState,
    pub multisample_state: MultisampleState,
    pub depth_state: DepthState,
    pub stencil_state: StencilState,
    pub color_blend_state: ColorBlendState<'a>,
}

impl<'a> GraphicsPipelineInfo<'a> {
    /// Create a descriptor with the given vertex shader and default state.
    pub fn new(vertex_shader: &'a Shader) -> Self {
        Self {
            vertex_shader: Some(vertex_shader),
            ..Default::default()
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the fragment shader.
    pub fn with_fragment_shader(mut self, shader: &'a Shader) -> Self {
        self.fragment_shader = Some(shader);
        self
    }

    /// Set both tessellation shaders and the patch configuration.
    ///
    /// Also switches the topology to
    /// [`PrimitiveTopology::PatchList`].
    pub fn with_tessellation(
        mut self,
        control: &'a Shader,
        evaluation: &'a Shader,
        state: TessellationState,
    ) -> Self {
        self.tessellation_control_shader = Some(control);
        self.tessellation_evaluation_shader = Some(evaluation);
        self.tessellation_state = Some(state);
        self.input_assembly_state.topology = PrimitiveTopology::PatchList;
        self
    }

    /// Set the input assembly state.
    pub fn with_input_assembly(mut self, state: InputAssemblyState) -> Self {
        self.input_assembly_state = state;
        self
    }

    /// Set the vertex input state.
    pub fn with_vertex_input(mut self, state: VertexInputState<'a>) -> Self {
        self.vertex_input_state = state;
        self
    }

    /// Set the rasterization state.
    pub fn with_rasterization(mut self, state: RasterizationState) -> Self {
        self.rasterization_state = state;
        self
    }

    /// Set the multisample state.
    pub fn with_multisample(mut self, state: MultisampleState) -> Self {
        self.multisample_state = state;
        self
    }

    /// Set the depth state.
    pub fn with_depth(mut self, state: DepthState) -> Self {
        self.depth_state = state;
        self
    }

    /// Set the stencil state.
    pub fn with_stencil(mut self, state: StencilState) -> Self {
        self.stencil_state = state;
        self
    }

    /// Set the color blend state.
    pub fn with_color_blend(mut self, state: ColorBlendState<'a>) -> Self {
        self.color_blend_state = state;
        self
    }

    /// Returns true if both tessellation shaders are set.
    pub fn has_tessellation(&self) -> bool {
        self.tessellation_control_shader.is_some() && self.tessellation_evaluation_shader.is_some()
    }

    /// Every shader set on the descriptor, in pipeline order.
    pub fn shaders(&self) -> impl Iterator<Item = &'a Shader> {
        [
            self.vertex_shader,
            self.tessellation_control_shader,
            self.tessellation_evaluation_shader,
            self.fragment_shader,
        ]
        .into_iter()
        .flatten()
    }

    /// Check the descriptor for configuration errors.
    ///
    /// Runs without touching any backend. The first error found is returned.
    pub fn validate(&self) -> GraphicsResult<()> {
        let Some(vertex_shader) = self.vertex_shader else {
            return Err(GraphicsError::ShaderStageMissing(
                "graphics pipeline requires a vertex shader".to_string(),
            ));
        };
        check_stage("vertex", vertex_shader, ShaderStage::Vertex)?;
        if let Some(shader) = self.fragment_shader {
            check_stage("fragment", shader, ShaderStage::Fragment)?;
        }
        if let Some(shader) = self.tessellation_control_shader {
            check_stage(
                "tessellation control",
                shader,
                ShaderStage::TessellationControl,
            )?;
        }
        if let Some(shader) = self.tessellation_evaluation_shader {
            check_stage(
                "tessellation evaluation",
                shader,
                ShaderStage::TessellationEvaluation,
            )?;
        }

        self.validate_tessellation()?;
        self.validate_vertex_input()?;
        self.validate_rasterization()
    }

    fn validate_tessellation(&self) -> GraphicsResult<()> {
        match (
            self.tessellation_control_shader.is_some(),
            self.tessellation_evaluation_shader.is_some(),
        ) {
            (true, false) => {
                return Err(GraphicsError::ShaderStageMissing(
                    "tessellation control shader without a tessellation evaluation shader"
                        .to_string(),
                ));
            }
            (false, true) => {
                return Err(GraphicsError::ShaderStageMissing(
                    "tessellation evaluation shader without a tessellation control shader"
                        .to_string(),
                ));
            }
            _ => {}
        }

        let tessellated = self.has_tessellation();
        if self.tessellation_state.is_some() && !tessellated {
            return Err(GraphicsError::ShaderStageMissing(
                "tessellation state requires both tessellation shaders".to_string(),
            ));
        }

        let patch_list = self.input_assembly_state.topology.is_patch_list();
        if patch_list && !tessellated {
            return Err(GraphicsError::InvalidTopology(
                "patch list topology requires tessellation shaders".to_string(),
            ));
        }
        if tessellated && !patch_list {
            return Err(GraphicsError::InvalidTopology(format!(
                "tessellation shaders require patch list topology, got {:?}",
                self.input_assembly_state.topology
            )));
        }

        if let Some(state) = self.tessellation_state
            && state.patch_control_points == 0
        {
            return Err(GraphicsError::InvalidParameter(
                "patch control point count cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_vertex_input(&self) -> GraphicsResult<()> {
        let mut locations = HashSet::new();
        for attribute in self.vertex_input_state.vertex_binding_descriptions {
            if attribute.format.is_undefined() {
                return Err(GraphicsError::InvalidParameter(format!(
                    "vertex attribute at location {} has an undefined format",
                    attribute.location
                )));
            }
            if !locations.insert(attribute.location) {
                return Err(GraphicsError::InvalidParameter(format!(
                    "vertex attribute location {} is bound more than once",
                    attribute.location
                )));
            }
        }
        Ok(())
    }

    fn validate_rasterization(&self) -> GraphicsResult<()> {
        let raster = &self.rasterization_state;
        if !(raster.line_width.is_finite() && raster.line_width > 0.0) {
            return Err(GraphicsError::InvalidParameter(format!(
                "line width must be positive, got {}",
                raster.line_width
            )));
        }
        if !(raster.point_size.is_finite() && raster.point_size > 0.0) {
            return Err(GraphicsError::InvalidParameter(format!(
                "point size must be positive, got {}",
                raster.point_size
            )));
        }

        let min_sample_shading = self.multisample_state.min_sample_shading;
        if !(0.0..=1.0).contains(&min_sample_shading) {
            return Err(GraphicsError::InvalidParameter(format!(
                "min sample shading must be within [0, 1], got {min_sample_shading}"
            )));
        }
        Ok(())
    }

    /// Check that this pipeline state can draw into `pass`.
    ///
    /// The multisample sample count must match the pass attachments, and
    /// every blend attachment needs a color attachment to write to.
    pub fn check_render_pass(&self, pass: &RenderPassInfo<'_>) -> GraphicsResult<()> {
        let samples = self.multisample_state.sample_count;
        if let Some(pass_samples) = pass.sample_count()
            && pass_samples != samples
        {
            return Err(GraphicsError::InvalidParameter(format!(
                "pipeline renders {samples:?} samples, render pass attachments have {pass_samples:?}"
            )));
        }

        let blend_attachments = self.color_blend_state.attachments.len();
        if blend_attachments > pass.color_attachments.len() {
            return Err(GraphicsError::InvalidParameter(format!(
                "{blend_attachments} blend attachments but the render pass has {} color attachments",
                pass.color_attachments.len()
            )));
        }
        Ok(())
    }
}

/// Parameters for creating a [`ComputePipeline`](super::ComputePipeline).
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputePipelineInfo<'a> {
    /// Optional name shown in graphics debuggers.
    pub label: Option<&'a str>,
    /// Compute shader. Required.
    pub shader: Option<&'a Shader>,
}

impl<'a> ComputePipelineInfo<'a> {
    /// Create a descriptor for the given compute shader.
    pub fn new(shader: &'a Shader) -> Self {
        Self {
            label: None,
            shader: Some(shader),
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Check the descriptor for configuration errors.
    pub fn validate(&self) -> GraphicsResult<()> {
        let Some(shader) = self.shader else {
            return Err(GraphicsError::ShaderStageMissing(
                "compute pipeline requires a compute shader".to_string(),
            ));
        };
        check_stage("compute", shader, ShaderStage::Compute)
    }
}

fn check_stage(slot: &'static str, shader: &Shader, expected: ShaderStage) -> GraphicsResult<()> {
    let found = shader.stage();
    if found != expected {
        return Err(GraphicsError::ShaderStageMismatch {
            slot,
            expected,
            found,
        });
    }
    Ok(())
}
