//! GPU resources.
//!
//! This module contains the resource types that are created by [`GraphicsDevice`]
//! and borrowed by pipeline and render pass descriptors:
//! - [`Shader`] - a single shader stage
//! - [`Texture`] - GPU texture/image, used as a render pass attachment
//!
//! Resources are reference-counted with [`Arc`] and can be shared across threads.
//! Each resource holds a strong reference to its parent device.
//!
//! [`GraphicsDevice`]: crate::GraphicsDevice
//! [`Arc`]: std::sync::Arc

mod shader;
mod texture;

pub use shader::Shader;
pub use texture::Texture;
