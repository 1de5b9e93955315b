//! Pipeline descriptors and pipeline objects.
//!
//! A caller fills a [`GraphicsPipelineInfo`] or [`ComputePipelineInfo`]
//! (plain values that borrow previously created shaders), then hands it to a
//! pipeline object's `create` call, which validates the descriptor and
//! freezes the state in the backend:
//!
//! ```text
//! GraphicsPipelineInfo ──validate──► device capability check ──► GpuBackend
//!                                                                    │
//!                          GraphicsPipeline (Created) ◄── GpuPipeline┘
//! ```
//!
//! Sub-states left at their defaults resolve to the documented default
//! behavior; see [`state`].

mod info;
mod object;
pub mod state;

pub use info::{ComputePipelineInfo, GraphicsPipelineInfo};
pub use object::{ComputePipeline, GraphicsPipeline, PipelineId};
pub use state::{
    ColorBlendAttachmentState, ColorBlendState, DepthState, InputAssemblyState, MultisampleState,
    RasterizationState, StencilOpState, StencilState, TessellationState,
    VertexInputBindingDescription, VertexInputState,
};
