//! Buffer storage options and indirect command layouts.

use bytemuck::{Pod, Zeroable};
use vesper_core::{Flags, impl_flag_bits};

/// Binds the whole buffer when used as a size.
///
/// Combined with an offset, the range `[offset, buffer size)` is bound.
pub const WHOLE_BUFFER: u64 = u64::MAX;

/// Storage options requested at buffer creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BufferStorageFlag {
    /// No options.
    None = 0,
    /// Contents may be updated after creation.
    DynamicStorage = 1 << 0,
    /// Hint to place the storage in host memory.
    ClientStorage = 1 << 1,
    /// Map the buffer persistently and coherently at creation.
    MapMemory = 1 << 2,
}

impl_flag_bits!(BufferStorageFlag: u32 {
    None,
    DynamicStorage,
    ClientStorage,
    MapMemory,
});

/// Set of [`BufferStorageFlag`]s.
pub type BufferStorageFlags = Flags<BufferStorageFlag>;

/// Parameters for filling a buffer range with a repeated 32-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferFillInfo {
    /// Start of the range in bytes.
    pub offset: u64,
    /// Size of the range in bytes, or [`WHOLE_BUFFER`].
    pub size: u64,
    /// Value written to every 32-bit word.
    pub data: u32,
}

impl BufferFillInfo {
    /// Fill the whole buffer with `data`.
    pub fn new(data: u32) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    /// Restrict the fill to `size` bytes starting at `offset`.
    pub fn with_range(mut self, offset: u64, size: u64) -> Self {
        self.offset = offset;
        self.size = size;
        self
    }

    /// Resolve the size against a buffer of `buffer_size` bytes.
    ///
    /// Returns `None` if the range does not fit.
    pub fn resolved_size(&self, buffer_size: u64) -> Option<u64> {
        if self.size == WHOLE_BUFFER {
            return buffer_size.checked_sub(self.offset);
        }
        let end = self.offset.checked_add(self.size)?;
        (end <= buffer_size).then_some(self.size)
    }
}

impl Default for BufferFillInfo {
    fn default() -> Self {
        Self {
            offset: 0,
            size: WHOLE_BUFFER,
            data: 0,
        }
    }
}

/// Arguments of a non-indexed indirect draw, as laid out in GPU memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DrawIndirectCommand {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

/// Arguments of an indexed indirect draw, as laid out in GPU memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DrawIndexedIndirectCommand {
    pub index_count: u32,
    pub instance_count: u32,
    pub first_index: u32,
    pub vertex_offset: i32,
    pub first_instance: u32,
}

/// Arguments of an indirect compute dispatch, as laid out in GPU memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DispatchIndirectCommand {
    pub group_count_x: u32,
    pub group_count_y: u32,
    pub group_count_z: u32,
}
