//! GPU backend abstraction layer.
//!
//! This module provides a trait-based abstraction for GPU backends. A backend
//! turns validated pipeline descriptors into backend-resident state and
//! releases that state again when the owning pipeline object is dropped.
//!
//! # Available Backends
//!
//! - `dummy` (default): No-op backend for testing and development
//!
//! # Architecture
//!
//! Each backend implements the [`GpuBackend`] trait, which provides:
//! - Graphics and compute pipeline creation and destruction
//! - Reflection of compute workgroup sizes
//! - Rejection of flag bits the backend does not understand

#[cfg(feature = "dummy")]
pub mod dummy;

use std::sync::Arc;

use vesper_core::Extent3d;

use crate::error::{GraphicsError, GraphicsResult};
use crate::pipeline::{ComputePipelineInfo, GraphicsPipelineInfo};
use crate::types::ColorComponentFlags;

/// Handle to backend-resident pipeline state.
///
/// Handles are owned by exactly one pipeline object and are deliberately not
/// `Clone`; the backend releases the state when the handle is passed back to
/// [`GpuBackend::destroy_pipeline`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum GpuPipeline {
    /// Dummy backend pipeline table entry.
    Dummy {
        /// Key in the dummy backend table.
        id: u64,
    },
}

/// GPU backend trait for abstracting different GPU APIs.
///
/// Descriptors reaching a backend have already passed
/// [`GraphicsPipelineInfo::validate`] and the device capability checks.
pub trait GpuBackend: Send + Sync + 'static {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Create backend state for a graphics pipeline.
    fn create_graphics_pipeline(
        &self,
        info: &GraphicsPipelineInfo<'_>,
    ) -> GraphicsResult<GpuPipeline>;

    /// Create backend state for a compute pipeline.
    fn create_compute_pipeline(&self, info: &ComputePipelineInfo<'_>)
    -> GraphicsResult<GpuPipeline>;

    /// Release the state behind `pipeline`.
    ///
    /// Returns an error if the handle is not known to this backend.
    fn destroy_pipeline(&self, pipeline: GpuPipeline) -> GraphicsResult<()>;

    /// Fixed workgroup size of a compute pipeline.
    ///
    /// [`Extent3d::ZERO`] means the size is unspecified. Backends without
    /// shader reflection keep this default.
    fn workgroup_size(&self, _pipeline: &GpuPipeline) -> Extent3d {
        Extent3d::ZERO
    }

    /// Reject color write masks containing bits outside the named channels.
    fn validate_color_write_mask(&self, mask: ColorComponentFlags) -> GraphicsResult<()> {
        if mask.has_unknown_bits() {
            return Err(GraphicsError::FeatureNotSupported(format!(
                "{} backend: unknown color write mask bits {:#x}",
                self.name(),
                mask.unknown_bits()
            )));
        }
        Ok(())
    }
}

/// Selects and creates the appropriate backend based on available features.
#[cfg(feature = "dummy")]
pub fn create_backend() -> GraphicsResult<Arc<dyn GpuBackend>> {
    log::info!("Using dummy backend");
    Ok(Arc::new(dummy::DummyBackend::new()))
}

/// Selects and creates the appropriate backend based on available features.
#[cfg(not(feature = "dummy"))]
pub fn create_backend() -> GraphicsResult<Arc<dyn GpuBackend>> {
    Err(GraphicsError::FeatureNotSupported(
        "no GPU backend feature is enabled".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorComponentFlag;

    struct NullBackend;

    impl GpuBackend for NullBackend {
        fn name(&self) -> &'static str {
            "Null"
        }

        fn create_graphics_pipeline(
            &self,
            _info: &GraphicsPipelineInfo<'_>,
        ) -> GraphicsResult<GpuPipeline> {
            Err(GraphicsError::FeatureNotSupported("graphics".to_string()))
        }

        fn create_compute_pipeline(
            &self,
            _info: &ComputePipelineInfo<'_>,
        ) -> GraphicsResult<GpuPipeline> {
            Err(GraphicsError::FeatureNotSupported("compute".to_string()))
        }

        fn destroy_pipeline(&self, _pipeline: GpuPipeline) -> GraphicsResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_workgroup_size_is_zero() {
        let backend = NullBackend;
        let size = backend.workgroup_size(&GpuPipeline::Dummy { id: 1 });
        assert_eq!(size, Extent3d::ZERO);
    }

    #[test]
    fn test_default_write_mask_validation() {
        let backend = NullBackend;
        assert!(
            backend
                .validate_color_write_mask(ColorComponentFlag::Rgba.into())
                .is_ok()
        );
        assert!(
            backend
                .validate_color_write_mask(ColorComponentFlags::empty())
                .is_ok()
        );
        assert!(matches!(
            backend.validate_color_write_mask(ColorComponentFlags::from_bits(0x10)),
            Err(GraphicsError::FeatureNotSupported(_))
        ));
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn test_create_backend() {
        let backend = create_backend().unwrap();
        assert_eq!(backend.name(), "Dummy");
    }
}
