//! Fixed-function pipeline sub-states.
//!
//! Every sub-state defaults to the behavior a pipeline gets when the caller
//! leaves it alone: triangle lists, back-face culling with counter-clockwise
//! front faces, filled polygons, a single sample, depth and stencil tests
//! disabled, and blending disabled with all channels written.

use crate::types::{
    BlendFactor, BlendOp, ColorComponentFlag, ColorComponentFlags, CompareOp, CullMode, Format,
    FrontFace, LogicOp, PolygonMode, PrimitiveTopology, SampleCount, StencilOp,
};

// ============================================================================
// Vertex stage
// ============================================================================

/// How vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputAssemblyState {
    /// Primitive topology.
    pub topology: PrimitiveTopology,
    /// Whether a special index value restarts strip and fan primitives.
    pub primitive_restart_enable: bool,
}

/// Layout of one vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexInputBindingDescription {
    /// Shader input location.
    pub location: u32,
    /// Vertex buffer binding slot the attribute is read from.
    pub binding: u32,
    /// Attribute format.
    pub format: Format,
    /// Byte offset of the attribute within a vertex.
    pub offset: u32,
}

impl VertexInputBindingDescription {
    /// Create an attribute description.
    pub fn new(location: u32, binding: u32, format: Format, offset: u32) -> Self {
        Self {
            location,
            binding,
            format,
            offset,
        }
    }
}

/// Vertex attribute layout of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexInputState<'a> {
    /// One entry per vertex attribute.
    pub vertex_binding_descriptions: &'a [VertexInputBindingDescription],
}

impl<'a> VertexInputState<'a> {
    /// Create a vertex input state from attribute descriptions.
    pub fn new(vertex_binding_descriptions: &'a [VertexInputBindingDescription]) -> Self {
        Self {
            vertex_binding_descriptions,
        }
    }
}

/// Patch configuration for tessellation pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TessellationState {
    /// Number of control points per patch.
    pub patch_control_points: u32,
}

impl TessellationState {
    /// Create a tessellation state.
    pub fn new(patch_control_points: u32) -> Self {
        Self {
            patch_control_points,
        }
    }
}

// ============================================================================
// Rasterization
// ============================================================================

/// Rasterizer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizationState {
    /// Clamp fragment depth instead of clipping against the near and far planes.
    pub depth_clamp_enable: bool,
    /// Polygon fill mode.
    pub polygon_mode: PolygonMode,
    /// Faces to discard.
    pub cull_mode: CullMode,
    /// Winding order of front faces.
    pub front_face: FrontFace,
    /// Whether depth bias is applied.
    pub depth_bias_enable: bool,
    /// Constant depth bias.
    pub depth_bias_constant_factor: f32,
    /// Depth bias scaled by the polygon slope.
    pub depth_bias_slope_factor: f32,
    /// Width of rasterized lines.
    pub line_width: f32,
    /// Size of rasterized points.
    pub point_size: f32,
}

impl Default for RasterizationState {
    fn default() -> Self {
        Self {
            depth_clamp_enable: false,
            polygon_mode: PolygonMode::Fill,
            cull_mode: CullMode::Back,
            front_face: FrontFace::CounterClockwise,
            depth_bias_enable: false,
            depth_bias_constant_factor: 0.0,
            depth_bias_slope_factor: 0.0,
            line_width: 1.0,
            point_size: 1.0,
        }
    }
}

impl RasterizationState {
    /// Set the cull mode.
    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    /// Set the polygon mode.
    pub fn with_polygon_mode(mut self, polygon_mode: PolygonMode) -> Self {
        self.polygon_mode = polygon_mode;
        self
    }

    /// Enable depth bias with the given factors.
    pub fn with_depth_bias(mut self, constant_factor: f32, slope_factor: f32) -> Self {
        self.depth_bias_enable = true;
        self.depth_bias_constant_factor = constant_factor;
        self.depth_bias_slope_factor = slope_factor;
        self
    }
}

/// Multisampling configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultisampleState {
    /// Samples per pixel of the attachments this pipeline renders to.
    pub sample_count: SampleCount,
    /// Run the fragment shader per sample rather than per pixel.
    pub sample_shading_enable: bool,
    /// Minimum fraction of samples shaded when sample shading is enabled.
    pub min_sample_shading: f32,
    /// Coverage mask ANDed with the rasterizer coverage.
    pub sample_mask: u32,
    /// Derive coverage from the fragment alpha.
    pub alpha_to_coverage_enable: bool,
    /// Replace the fragment alpha with one.
    pub alpha_to_one_enable: bool,
}

impl Default for MultisampleState {
    fn default() -> Self {
        Self {
            sample_count: SampleCount::X1,
            sample_shading_enable: false,
            min_sample_shading: 1.0,
            sample_mask: 0xFFFF_FFFF,
            alpha_to_coverage_enable: false,
            alpha_to_one_enable: false,
        }
    }
}

// ============================================================================
// Depth and stencil
// ============================================================================

/// Depth test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthState {
    /// Whether the depth test runs.
    pub depth_test_enable: bool,
    /// Whether passing fragments write depth.
    pub depth_write_enable: bool,
    /// Comparison used by the depth test.
    pub depth_compare_op: CompareOp,
}

impl Default for DepthState {
    fn default() -> Self {
        Self {
            depth_test_enable: false,
            depth_write_enable: false,
            depth_compare_op: CompareOp::Less,
        }
    }
}

impl DepthState {
    /// Depth test and write enabled with the given comparison.
    pub fn test_and_write(compare_op: CompareOp) -> Self {
        Self {
            depth_test_enable: true,
            depth_write_enable: true,
            depth_compare_op: compare_op,
        }
    }
}

/// Stencil behavior for one face orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StencilOpState {
    /// Action when both stencil and depth tests pass.
    pub pass_op: StencilOp,
    /// Action when the stencil test fails.
    pub fail_op: StencilOp,
    /// Action when the stencil test passes and the depth test fails.
    pub depth_fail_op: StencilOp,
    /// Comparison used by the stencil test.
    pub compare_op: CompareOp,
    /// Bits of the stored and reference values that are compared.
    pub compare_mask: u32,
    /// Bits written by stencil updates.
    pub write_mask: u32,
    /// Reference value.
    pub reference: u32,
}

impl Default for StencilOpState {
    fn default() -> Self {
        Self {
            pass_op: StencilOp::Keep,
            fail_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            compare_op: CompareOp::Always,
            compare_mask: 0,
            write_mask: 0,
            reference: 0,
        }
    }
}

/// Stencil test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StencilState {
    /// Whether the stencil test runs.
    pub stencil_test_enable: bool,
    /// Behavior for front-facing primitives.
    pub front: StencilOpState,
    /// Behavior for back-facing primitives.
    pub back: StencilOpState,
}

// ============================================================================
// Color blending
// ============================================================================

/// Blending for one color attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBlendAttachmentState {
    /// Whether blending is applied. When disabled the source color is written.
    pub blend_enable: bool,
    /// Source factor for RGB.
    pub src_color_blend_factor: BlendFactor,
    /// Destination factor for RGB.
    pub dst_color_blend_factor: BlendFactor,
    /// Operation for RGB.
    pub color_blend_op: BlendOp,
    /// Source factor for alpha.
    pub src_alpha_blend_factor: BlendFactor,
    /// Destination factor for alpha.
    pub dst_alpha_blend_factor: BlendFactor,
    /// Operation for alpha.
    pub alpha_blend_op: BlendOp,
    /// Channels written to the attachment.
    pub color_write_mask: ColorComponentFlags,
}

impl Default for ColorBlendAttachmentState {
    fn default() -> Self {
        Self {
            blend_enable: false,
            src_color_blend_factor: BlendFactor::One,
            dst_color_blend_factor: BlendFactor::Zero,
            color_blend_op: BlendOp::Add,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::Zero,
            alpha_blend_op: BlendOp::Add,
            color_write_mask: ColorComponentFlag::Rgba.into(),
        }
    }
}

impl ColorBlendAttachmentState {
    /// Standard "source over" alpha blending.
    pub fn alpha_blending() -> Self {
        Self {
            blend_enable: true,
            src_color_blend_factor: BlendFactor::SrcAlpha,
            dst_color_blend_factor: BlendFactor::OneMinusSrcAlpha,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::OneMinusSrcAlpha,
            ..Default::default()
        }
    }

    /// Additive blending.
    pub fn additive() -> Self {
        Self {
            blend_enable: true,
            src_color_blend_factor: BlendFactor::One,
            dst_color_blend_factor: BlendFactor::One,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::One,
            ..Default::default()
        }
    }

    /// Set the channels written to the attachment.
    pub fn with_write_mask(mut self, mask: impl Into<ColorComponentFlags>) -> Self {
        self.color_write_mask = mask.into();
        self
    }

    /// Returns true if any factor reads the pipeline blend constants.
    pub fn uses_blend_constants(&self) -> bool {
        self.blend_enable
            && [
                self.src_color_blend_factor,
                self.dst_color_blend_factor,
                self.src_alpha_blend_factor,
                self.dst_alpha_blend_factor,
            ]
            .iter()
            .any(BlendFactor::uses_constant)
    }
}

/// Color blending for all attachments of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBlendState<'a> {
    /// Apply `logic_op` instead of blending.
    pub logic_op_enable: bool,
    /// Logical operation used when `logic_op_enable` is set.
    pub logic_op: LogicOp,
    /// Per-attachment blending, indexed like the render pass color attachments.
    pub attachments: &'a [ColorBlendAttachmentState],
    /// Constant color read by the `Constant*` blend factors.
    pub blend_constants: [f32; 4],
}

impl Default for ColorBlendState<'_> {
    fn default() -> Self {
        Self {
            logic_op_enable: false,
            logic_op: LogicOp::Copy,
            attachments: &[],
            blend_constants: [0.0; 4],
        }
    }
}

impl<'a> ColorBlendState<'a> {
    /// Create a color blend state from per-attachment blending.
    pub fn new(attachments: &'a [ColorBlendAttachmentState]) -> Self {
        Self {
            attachments,
            ..Default::default()
        }
    }

    /// Set the blend constants.
    pub fn with_blend_constants(mut self, constants: [f32; 4]) -> Self {
        self.blend_constants = constants;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compare_equal() {
        assert_eq!(StencilOpState::default(), StencilOpState::default());
        assert_eq!(
            ColorBlendAttachmentState::default(),
            ColorBlendAttachmentState::default()
        );
        assert_eq!(StencilState::default().front, StencilOpState::default());
    }

    #[test]
    fn test_rasterization_defaults() {
        let state = RasterizationState::default();
        assert!(!state.depth_clamp_enable);
        assert_eq!(state.polygon_mode, PolygonMode::Fill);
        assert_eq!(state.cull_mode, CullMode::Back);
        assert_eq!(state.front_face, FrontFace::CounterClockwise);
        assert_eq!(state.line_width, 1.0);
        assert_eq!(state.point_size, 1.0);
    }

    #[test]
    fn test_multisample_defaults() {
        let state = MultisampleState::default();
        assert_eq!(state.sample_count, SampleCount::X1);
        assert!(!state.sample_shading_enable);
        assert_eq!(state.min_sample_shading, 1.0);
        assert_eq!(state.sample_mask, u32::MAX);
    }

    #[test]
    fn test_depth_and_stencil_defaults() {
        let depth = DepthState::default();
        assert!(!depth.depth_test_enable);
        assert!(!depth.depth_write_enable);
        assert_eq!(depth.depth_compare_op, CompareOp::Less);

        let stencil = StencilOpState::default();
        assert_eq!(stencil.compare_op, CompareOp::Always);
        assert_eq!(stencil.pass_op, StencilOp::Keep);
        assert_eq!(stencil.write_mask, 0);
    }

    #[test]
    fn test_color_blend_defaults() {
        let attachment = ColorBlendAttachmentState::default();
        assert!(!attachment.blend_enable);
        assert_eq!(attachment.src_color_blend_factor, BlendFactor::One);
        assert_eq!(attachment.dst_color_blend_factor, BlendFactor::Zero);
        assert_eq!(attachment.color_write_mask.bits(), 0b1111);

        let state = ColorBlendState::default();
        assert_eq!(state.logic_op, LogicOp::Copy);
        assert!(state.attachments.is_empty());
        assert_eq!(state.blend_constants, [0.0; 4]);
    }

    #[test]
    fn test_blend_presets() {
        let alpha = ColorBlendAttachmentState::alpha_blending();
        assert!(alpha.blend_enable);
        assert_eq!(alpha.dst_color_blend_factor, BlendFactor::OneMinusSrcAlpha);
        assert!(!alpha.uses_blend_constants());

        let additive = ColorBlendAttachmentState::additive();
        assert_eq!(additive.dst_color_blend_factor, BlendFactor::One);
        assert_ne!(alpha, additive);

        let constant = ColorBlendAttachmentState {
            src_color_blend_factor: BlendFactor::ConstantColor,
            ..ColorBlendAttachmentState::alpha_blending()
        };
        assert!(constant.uses_blend_constants());
    }

    #[test]
    fn test_write_mask_builder() {
        let attachment = ColorBlendAttachmentState::default()
            .with_write_mask(ColorComponentFlag::R | ColorComponentFlag::G);
        assert_eq!(attachment.color_write_mask.bits(), 0b0011);
    }
}
