//! Dummy GPU backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations but keeps a table of
//! the pipelines it has created. The counters it exposes let tests observe
//! the resource lifecycle of pipeline objects: every creation must be matched
//! by exactly one release.

use std::collections::HashMap;

use parking_lot::Mutex;
use vesper_core::Extent3d;

use crate::error::{GraphicsError, GraphicsResult};
use crate::pipeline::{ComputePipelineInfo, GraphicsPipelineInfo};

use super::{GpuBackend, GpuPipeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PipelineKind {
    Graphics,
    Compute,
}

#[derive(Debug)]
struct DummyPipeline {
    kind: PipelineKind,
    label: Option<String>,
    workgroup_size: Extent3d,
}

#[derive(Debug, Default)]
struct DummyState {
    next_id: u64,
    pipelines: HashMap<u64, DummyPipeline>,
    created: usize,
    destroyed: usize,
    invalid_releases: usize,
}

/// Dummy GPU backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    state: Mutex<DummyState>,
    max_pipelines: Option<usize>,
}

impl DummyBackend {
    /// Create a new dummy backend with no pipeline limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail pipeline creation with [`GraphicsError::ResourceExhausted`] once
    /// `limit` pipelines are alive.
    pub fn with_pipeline_limit(mut self, limit: usize) -> Self {
        self.max_pipelines = Some(limit);
        self
    }

    /// Number of pipelines currently alive.
    pub fn live_pipelines(&self) -> usize {
        self.state.lock().pipelines.len()
    }

    /// Total number of pipelines created.
    pub fn created_pipelines(&self) -> usize {
        self.state.lock().created
    }

    /// Total number of pipelines destroyed.
    pub fn destroyed_pipelines(&self) -> usize {
        self.state.lock().destroyed
    }

    /// Number of release calls for handles that were not alive.
    pub fn invalid_releases(&self) -> usize {
        self.state.lock().invalid_releases
    }

    fn insert(
        &self,
        kind: PipelineKind,
        label: Option<&str>,
        workgroup_size: Extent3d,
    ) -> GraphicsResult<GpuPipeline> {
        let mut state = self.state.lock();
        if let Some(limit) = self.max_pipelines
            && state.pipelines.len() >= limit
        {
            return Err(GraphicsError::ResourceExhausted(format!(
                "dummy backend pipeline limit of {limit} reached"
            )));
        }

        state.next_id += 1;
        let id = state.next_id;
        state.pipelines.insert(
            id,
            DummyPipeline {
                kind,
                label: label.map(str::to_owned),
                workgroup_size,
            },
        );
        state.created += 1;

        log::trace!("DummyBackend: created {:?} pipeline {} ({:?})", kind, id, label);
        Ok(GpuPipeline::Dummy { id })
    }
}

impl GpuBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn create_graphics_pipeline(
        &self,
        info: &GraphicsPipelineInfo<'_>,
    ) -> GraphicsResult<GpuPipeline> {
        for attachment in info.color_blend_state.attachments {
            self.validate_color_write_mask(attachment.color_write_mask)?;
        }
        self.insert(PipelineKind::Graphics, info.label, Extent3d::ZERO)
    }

    fn create_compute_pipeline(
        &self,
        info: &ComputePipelineInfo<'_>,
    ) -> GraphicsResult<GpuPipeline> {
        let workgroup_size = info
            .shader
            .and_then(|shader| shader.workgroup_size())
            .unwrap_or(Extent3d::ZERO);
        self.insert(PipelineKind::Compute, info.label, workgroup_size)
    }

    fn destroy_pipeline(&self, pipeline: GpuPipeline) -> GraphicsResult<()> {
        let GpuPipeline::Dummy { id } = pipeline;
        let mut state = self.state.lock();
        match state.pipelines.remove(&id) {
            Some(entry) => {
                state.destroyed += 1;
                log::trace!(
                    "DummyBackend: destroyed {:?} pipeline {} ({:?})",
                    entry.kind,
                    id,
                    entry.label
                );
                Ok(())
            }
            None => {
                state.invalid_releases += 1;
                log::error!("DummyBackend: release of unknown pipeline {}", id);
                Err(GraphicsError::InvalidParameter(format!(
                    "unknown pipeline handle {id}"
                )))
            }
        }
    }

    fn workgroup_size(&self, pipeline: &GpuPipeline) -> Extent3d {
        let GpuPipeline::Dummy { id } = pipeline;
        self.state
            .lock()
            .pipelines
            .get(id)
            .filter(|entry| entry.kind == PipelineKind::Compute)
            .map_or(Extent3d::ZERO, |entry| entry.workgroup_size)
    }
}
