//! Common types and descriptors for graphics resources.
//!
//! This module contains the closed vocabularies every descriptor is built
//! from: formats, sampler and upload layouts, raster, depth/stencil and blend
//! operations, plus the bit enumerations and their flag sets.

mod barrier;
mod blend;
mod buffer;
mod depth_stencil;
mod format;
mod raster;
mod sampler;
mod shader;
mod texture;
mod upload;

pub use barrier::{AspectMask, AspectMaskBit, MemoryBarrierBit, MemoryBarrierFlags};
pub use blend::{BlendFactor, BlendOp, ColorComponentFlag, ColorComponentFlags, LogicOp};
pub use buffer::{
    BufferFillInfo, BufferStorageFlag, BufferStorageFlags, DispatchIndirectCommand,
    DrawIndexedIndirectCommand, DrawIndirectCommand, WHOLE_BUFFER,
};
pub use depth_stencil::{CompareOp, StencilOp};
pub use format::{ComponentSwizzle, Format, ImageType, SampleCount};
pub use raster::{ClipDepthRange, CullMode, FrontFace, IndexType, PolygonMode, PrimitiveTopology};
pub use sampler::{AddressMode, BorderColor, Filter};
pub use shader::{ShaderDescriptor, ShaderStage};
pub use texture::TextureDescriptor;
pub use upload::{UploadFormat, UploadType};

pub use vesper_core::{Extent2d, Extent3d, Offset2d, Offset3d, Rect2d};
