use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vesper_graphics::pipeline::{
    ColorBlendAttachmentState, ColorBlendState, DepthState, TessellationState,
    VertexInputBindingDescription, VertexInputState,
};
use vesper_graphics::types::CompareOp;
use vesper_graphics::{
    Format, GraphicsDevice, GraphicsPipelineInfo, RenderColorAttachment,
    RenderDepthStencilAttachment, RenderPassInfo, Shader, ShaderDescriptor, ShaderStage,
    TextureDescriptor,
};

fn shader(device: &Arc<GraphicsDevice>, stage: ShaderStage) -> Arc<Shader> {
    device
        .create_shader(&ShaderDescriptor::new(stage, b"void main() {}".to_vec()))
        .expect("Failed to create shader")
}

// ---------------------------------------------------------------------------
// Descriptor validation
// ---------------------------------------------------------------------------

fn bench_validate_graphics_info(c: &mut Criterion) {
    let device = GraphicsDevice::dummy();
    let vs = shader(&device, ShaderStage::Vertex);
    let fs = shader(&device, ShaderStage::Fragment);
    let attributes: Vec<_> = (0..8)
        .map(|i| VertexInputBindingDescription::new(i, 0, Format::Rgba32Float, i * 16))
        .collect();
    let blend = [ColorBlendAttachmentState::alpha_blending(); 4];

    let info = GraphicsPipelineInfo::new(&vs)
        .with_fragment_shader(&fs)
        .with_vertex_input(VertexInputState::new(&attributes))
        .with_depth(DepthState::test_and_write(CompareOp::Less))
        .with_color_blend(ColorBlendState::new(&blend));

    c.bench_function("graphics_info_validate_8_attributes", |b| {
        b.iter(|| black_box(&info).validate())
    });
}

fn bench_validate_tessellation_info(c: &mut Criterion) {
    let device = GraphicsDevice::dummy();
    let vs = shader(&device, ShaderStage::Vertex);
    let tcs = shader(&device, ShaderStage::TessellationControl);
    let tes = shader(&device, ShaderStage::TessellationEvaluation);
    let info =
        GraphicsPipelineInfo::new(&vs).with_tessellation(&tcs, &tes, TessellationState::new(3));

    c.bench_function("graphics_info_validate_tessellation", |b| {
        b.iter(|| black_box(&info).validate())
    });
}

fn bench_render_pass_viewport(c: &mut Criterion) {
    let device = GraphicsDevice::dummy();
    let colors: Vec<_> = (0..4)
        .map(|i| {
            device
                .create_texture(&TextureDescriptor::new_2d(
                    1920 - i * 64,
                    1080 - i * 32,
                    Format::Rgba16Float,
                ))
                .expect("Failed to create texture")
        })
        .collect();
    let depth = device
        .create_texture(&TextureDescriptor::new_2d(1920, 1080, Format::D32Float))
        .expect("Failed to create texture");
    let attachments: Vec<_> = colors
        .iter()
        .map(|t| RenderColorAttachment::new(t).with_clear([0.0, 0.0, 0.0, 1.0]))
        .collect();
    let info = RenderPassInfo::new(&attachments)
        .with_depth_attachment(RenderDepthStencilAttachment::new(&depth).with_clear(1.0, 0));

    c.bench_function("render_pass_validate_5_attachments", |b| {
        b.iter(|| black_box(&info).validate())
    });
}

// ---------------------------------------------------------------------------
// Pipeline objects
// ---------------------------------------------------------------------------

fn bench_pipeline_create_drop(c: &mut Criterion) {
    let device = GraphicsDevice::dummy();
    let vs = shader(&device, ShaderStage::Vertex);
    let fs = shader(&device, ShaderStage::Fragment);
    let info = GraphicsPipelineInfo::new(&vs).with_fragment_shader(&fs);

    c.bench_function("graphics_pipeline_create_drop", |b| {
        b.iter(|| {
            let pipeline = device
                .create_graphics_pipeline(black_box(&info))
                .expect("Failed to create pipeline");
            black_box(pipeline.id())
        })
    });
}

criterion_group!(
    benches,
    bench_validate_graphics_info,
    bench_validate_tessellation_info,
    bench_render_pass_viewport,
    bench_pipeline_create_drop,
);
criterion_main!(benches);
