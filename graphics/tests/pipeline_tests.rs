//! Integration tests for pipeline descriptors and pipeline objects.
//!
//! All tests run against the dummy backend and use its telemetry to observe
//! how many pipelines are alive.
//!
//! ```bash
//! cargo test --test pipeline_tests
//! ```

mod common;

use rstest::rstest;

use common::TestContext;
use vesper_graphics::backend::dummy::DummyBackend;
use vesper_graphics::pipeline::{
    ColorBlendAttachmentState, ColorBlendState, InputAssemblyState, StencilOpState,
    TessellationState, VertexInputBindingDescription, VertexInputState,
};
use vesper_graphics::types::{ColorComponentFlag, ColorComponentFlags, PrimitiveTopology};
use vesper_graphics::{
    ComputePipeline, ComputePipelineInfo, DeviceCapabilities, Extent3d, Format, GraphicsError,
    GraphicsPipeline, GraphicsPipelineInfo, ShaderDescriptor, ShaderStage,
};

// ============================================================================
// Descriptor Validation
// ============================================================================

#[test]
fn test_vertex_only_descriptor_validates() {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);

    let info = GraphicsPipelineInfo::new(&vs);
    assert!(info.tessellation_state.is_none());
    assert!(info.validate().is_ok());
}

#[test]
fn test_patch_list_without_tessellation_fails() {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);

    let info = GraphicsPipelineInfo::new(&vs).with_input_assembly(InputAssemblyState {
        topology: PrimitiveTopology::PatchList,
        ..Default::default()
    });
    assert!(matches!(
        info.validate(),
        Err(GraphicsError::InvalidTopology(_))
    ));
    assert!(ctx.device.create_graphics_pipeline(&info).is_err());
    assert_eq!(ctx.backend.created_pipelines(), 0);
}

#[rstest]
#[case::triangle_list(PrimitiveTopology::TriangleList)]
#[case::triangle_strip(PrimitiveTopology::TriangleStrip)]
#[case::line_list(PrimitiveTopology::LineList)]
#[case::point_list(PrimitiveTopology::PointList)]
fn test_tessellation_requires_patch_list(#[case] topology: PrimitiveTopology) {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);
    let tcs = ctx.shader(ShaderStage::TessellationControl);
    let tes = ctx.shader(ShaderStage::TessellationEvaluation);

    let info = GraphicsPipelineInfo::new(&vs)
        .with_tessellation(&tcs, &tes, TessellationState::new(4))
        .with_input_assembly(InputAssemblyState {
            topology,
            ..Default::default()
        });
    assert!(matches!(
        info.validate(),
        Err(GraphicsError::InvalidTopology(_))
    ));
}

#[test]
fn test_fragment_shader_in_vertex_slot() {
    let ctx = TestContext::new();
    let fs = ctx.shader(ShaderStage::Fragment);

    let err = GraphicsPipelineInfo::new(&fs).validate().unwrap_err();
    assert!(matches!(
        err,
        GraphicsError::ShaderStageMismatch {
            expected: ShaderStage::Vertex,
            found: ShaderStage::Fragment,
            ..
        }
    ));
}

#[test]
fn test_default_states_compare_equal() {
    assert_eq!(StencilOpState::default(), StencilOpState::default());
    assert_eq!(
        ColorBlendAttachmentState::default(),
        ColorBlendAttachmentState::default()
    );
    assert_ne!(
        ColorBlendAttachmentState::default(),
        ColorBlendAttachmentState::alpha_blending()
    );
}

// ============================================================================
// Pipeline Lifecycle
// ============================================================================

#[test]
fn test_full_pipeline_creation() {
    let ctx = TestContext::new();
    let (vs, fs) = ctx.vertex_fragment();
    let attributes = [
        VertexInputBindingDescription::new(0, 0, Format::Rgb32Float, 0),
        VertexInputBindingDescription::new(1, 0, Format::Rg32Float, 12),
    ];
    let blend = [ColorBlendAttachmentState::alpha_blending()];

    let info = GraphicsPipelineInfo::new(&vs)
        .with_label("textured")
        .with_fragment_shader(&fs)
        .with_vertex_input(VertexInputState::new(&attributes))
        .with_color_blend(ColorBlendState::new(&blend));

    let pipeline = ctx.device.create_graphics_pipeline(&info).unwrap();
    assert!(pipeline.is_created());
    assert_eq!(pipeline.label(), Some("textured"));
    assert_eq!(pipeline.shaders().len(), 2);
    assert_eq!(ctx.backend.live_pipelines(), 1);

    drop(pipeline);
    assert_eq!(ctx.backend.live_pipelines(), 0);
    assert_eq!(ctx.backend.destroyed_pipelines(), 1);
}

#[test]
fn test_move_take_and_drop_release_once() {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);
    let info = GraphicsPipelineInfo::new(&vs);

    let mut source = ctx.device.create_graphics_pipeline(&info).unwrap();
    let source_id = source.id();

    // Take leaves the source uninitialized but still droppable.
    let taken = source.take();
    assert!(taken.is_created());
    assert_eq!(taken.id(), source_id);
    assert!(!source.is_created());
    assert_ne!(source.id(), source_id);
    assert_eq!(ctx.backend.live_pipelines(), 1);

    // A plain move keeps exactly one owner.
    let moved = taken;
    assert_eq!(ctx.backend.live_pipelines(), 1);

    drop(source);
    assert_eq!(ctx.backend.destroyed_pipelines(), 0);

    drop(moved);
    assert_eq!(ctx.backend.live_pipelines(), 0);
    assert_eq!(ctx.backend.created_pipelines(), 1);
    assert_eq!(ctx.backend.destroyed_pipelines(), 1);
    assert_eq!(ctx.backend.invalid_releases(), 0);
}

#[test]
fn test_pipelines_in_collection() {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);
    let info = GraphicsPipelineInfo::new(&vs);

    let mut pipelines: Vec<GraphicsPipeline> = (0..4)
        .map(|_| ctx.device.create_graphics_pipeline(&info).unwrap())
        .collect();
    assert_eq!(ctx.backend.live_pipelines(), 4);
    assert_ne!(pipelines[0], pipelines[1]);

    pipelines.remove(1);
    assert_eq!(ctx.backend.live_pipelines(), 3);

    pipelines.clear();
    assert_eq!(ctx.backend.live_pipelines(), 0);
    assert_eq!(ctx.backend.destroyed_pipelines(), 4);
}

#[test]
fn test_second_create_fails_with_already_created() {
    let ctx = TestContext::new();
    let (vs, fs) = ctx.vertex_fragment();

    let mut pipeline = GraphicsPipeline::new(&ctx.device);
    pipeline.create(&GraphicsPipelineInfo::new(&vs)).unwrap();
    let handle_before = pipeline.handle().map(|h| format!("{h:?}"));

    let err = pipeline
        .create(&GraphicsPipelineInfo::new(&vs).with_fragment_shader(&fs))
        .unwrap_err();
    assert!(matches!(err, GraphicsError::AlreadyCreated(_)));
    assert_eq!(pipeline.handle().map(|h| format!("{h:?}")), handle_before);
    assert_eq!(pipeline.shaders().len(), 1);
    assert_eq!(ctx.backend.created_pipelines(), 1);
}

#[test]
fn test_backend_exhaustion() {
    let ctx = TestContext::with_backend(
        DummyBackend::new().with_pipeline_limit(2),
        DeviceCapabilities::default(),
    );
    let vs = ctx.shader(ShaderStage::Vertex);
    let info = GraphicsPipelineInfo::new(&vs);

    let first = ctx.device.create_graphics_pipeline(&info).unwrap();
    let _second = ctx.device.create_graphics_pipeline(&info).unwrap();
    assert!(matches!(
        ctx.device.create_graphics_pipeline(&info),
        Err(GraphicsError::ResourceExhausted(_))
    ));

    // Releasing one frees a slot.
    drop(first);
    assert!(ctx.device.create_graphics_pipeline(&info).is_ok());
}

#[test]
fn test_unknown_color_write_bits_rejected() {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);
    let mask = ColorComponentFlags::from_bits(ColorComponentFlag::R as u32 | 0x40);
    let blend = [ColorBlendAttachmentState::default().with_write_mask(mask)];

    let info = GraphicsPipelineInfo::new(&vs).with_color_blend(ColorBlendState::new(&blend));
    assert!(info.validate().is_ok());
    assert!(matches!(
        ctx.device.create_graphics_pipeline(&info),
        Err(GraphicsError::FeatureNotSupported(_))
    ));
    assert_eq!(ctx.backend.live_pipelines(), 0);
}

#[rstest]
#[case::supported(true)]
#[case::unsupported(false)]
fn test_tessellation_capability(#[case] supported: bool) {
    let ctx =
        TestContext::with_capabilities(DeviceCapabilities::default().with_tessellation(supported));
    let vs = ctx.shader(ShaderStage::Vertex);
    let tcs = ctx.shader(ShaderStage::TessellationControl);
    let tes = ctx.shader(ShaderStage::TessellationEvaluation);

    let info =
        GraphicsPipelineInfo::new(&vs).with_tessellation(&tcs, &tes, TessellationState::new(3));
    let result = ctx.device.create_graphics_pipeline(&info);
    if supported {
        assert!(result.is_ok());
    } else {
        assert!(matches!(result, Err(GraphicsError::FeatureNotSupported(_))));
    }
}

// ============================================================================
// Compute Pipelines
// ============================================================================

#[rstest]
#[case::declared(Some(Extent3d::new(8, 8, 1)), Extent3d::new(8, 8, 1))]
#[case::unspecified(None, Extent3d::ZERO)]
fn test_compute_workgroup_size(#[case] declared: Option<Extent3d>, #[case] expected: Extent3d) {
    let ctx = TestContext::new();
    let mut descriptor = ShaderDescriptor::compute(b"void main() {}".to_vec());
    if let Some(size) = declared {
        descriptor = descriptor.with_workgroup_size(size);
    }
    let cs = ctx.device.create_shader(&descriptor).unwrap();

    let mut pipeline = ComputePipeline::new(&ctx.device);
    assert_eq!(pipeline.workgroup_size(), Extent3d::ZERO);
    pipeline.create(&ComputePipelineInfo::new(&cs)).unwrap();
    assert_eq!(pipeline.workgroup_size(), expected);
}

#[test]
fn test_compute_pipeline_missing_shader() {
    let ctx = TestContext::new();
    let mut pipeline = ComputePipeline::new(&ctx.device);
    assert!(matches!(
        pipeline.create(&ComputePipelineInfo::default()),
        Err(GraphicsError::ShaderStageMissing(_))
    ));
    assert!(!pipeline.is_created());
}

#[test]
fn test_pipelines_shared_across_threads() {
    let ctx = TestContext::new();
    let vs = ctx.shader(ShaderStage::Vertex);
    let info = GraphicsPipelineInfo::new(&vs);
    let pipeline = ctx.device.create_graphics_pipeline(&info).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert!(pipeline.is_created());
                assert_eq!(pipeline.shaders()[0].stage(), ShaderStage::Vertex);
            });
        }
    });
}
