//! Memory barrier and image aspect masks.

use vesper_core::{Flags, impl_flag_bits};

/// Kinds of memory access that a barrier makes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MemoryBarrierBit {
    /// No access.
    None = 0,
    /// Vertex attribute fetches.
    VertexBuffer = 1 << 0,
    /// Index fetches.
    IndexBuffer = 1 << 1,
    /// Uniform buffer reads.
    UniformBuffer = 1 << 2,
    /// Texture sampling.
    TextureFetch = 1 << 3,
    /// Storage image loads and stores.
    ImageAccess = 1 << 4,
    /// Indirect command reads.
    CommandBuffer = 1 << 5,
    /// Texture uploads and readbacks.
    TextureUpdate = 1 << 6,
    /// Buffer uploads, copies and readbacks.
    BufferUpdate = 1 << 7,
    /// Client access to persistently mapped buffers.
    MappedBuffer = 1 << 8,
    /// Framebuffer attachment reads and writes.
    Framebuffer = 1 << 9,
    /// Storage buffer loads and stores.
    ShaderStorage = 1 << 10,
    /// Query result writes.
    QueryCounter = 1 << 11,
    /// Every access kind.
    AllBits = u32::MAX,
}

impl_flag_bits!(MemoryBarrierBit: u32 {
    None,
    VertexBuffer,
    IndexBuffer,
    UniformBuffer,
    TextureFetch,
    ImageAccess,
    CommandBuffer,
    TextureUpdate,
    BufferUpdate,
    MappedBuffer,
    Framebuffer,
    ShaderStorage,
    QueryCounter,
    AllBits,
});

/// Set of [`MemoryBarrierBit`]s.
pub type MemoryBarrierFlags = Flags<MemoryBarrierBit>;

/// Aspects of an image affected by a clear or copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AspectMaskBit {
    /// Color aspect.
    Color = 1 << 0,
    /// Depth aspect.
    Depth = 1 << 1,
    /// Stencil aspect.
    Stencil = 1 << 2,
}

impl_flag_bits!(AspectMaskBit: u32 { Color, Depth, Stencil });

/// Set of [`AspectMaskBit`]s.
pub type AspectMask = Flags<AspectMaskBit>;
