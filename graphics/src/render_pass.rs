//! Render-pass descriptors.
//!
//! A render pass is not an object with a lifecycle. [`RenderPassInfo`]
//! describes the attachments one pass renders into, with their load behavior
//! and the viewport; [`RenderPassBeginInfo`] does the same for the default
//! (swapchain-like) target that is not addressable as a [`Texture`]. Both are
//! stack-local values consumed once by the command-recording layer.

use crate::error::{GraphicsError, GraphicsResult};
use crate::resources::Texture;
use crate::types::{ClipDepthRange, Extent2d, Offset2d, Rect2d, SampleCount};

/// How an attachment's contents are treated at the start of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachmentLoadOp {
    /// Preserve the existing contents.
    #[default]
    Load,
    /// Reset the contents to the attachment's clear value.
    Clear,
    /// Contents are undefined; an optimization hint only.
    DontCare,
}

impl AttachmentLoadOp {
    /// Resolve this op against a clear value.
    pub fn resolve(self, clear_value: ClearValue) -> LoadAction {
        match self {
            Self::Load => LoadAction::Preserve,
            Self::Clear => LoadAction::Clear(clear_value),
            Self::DontCare => LoadAction::Discard,
        }
    }
}

/// Clear value for a depth/stencil attachment. Defaults to depth `0.0`,
/// stencil `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClearDepthStencilValue {
    /// Depth clear value.
    pub depth: f32,
    /// Stencil clear value.
    pub stencil: i32,
}

impl ClearDepthStencilValue {
    /// Create a new depth/stencil clear value.
    pub const fn new(depth: f32, stencil: i32) -> Self {
        Self { depth, stencil }
    }
}

/// A clear value for any attachment kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearValue {
    /// RGBA color.
    Color([f32; 4]),
    /// Depth and stencil pair.
    DepthStencil(ClearDepthStencilValue),
}

/// What the backend must do with one attachment slot when the pass begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadAction {
    /// Keep the existing contents.
    Preserve,
    /// Reset the contents to exactly this value.
    Clear(ClearValue),
    /// Contents may be left undefined.
    Discard,
}

impl LoadAction {
    /// Get the clear value, if this action clears.
    pub fn clear_value(&self) -> Option<ClearValue> {
        match self {
            Self::Clear(value) => Some(*value),
            _ => None,
        }
    }
}

// ============================================================================
// Attachments
// ============================================================================

/// A color attachment of a render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderColorAttachment<'a> {
    /// Texture rendered into.
    pub texture: &'a Texture,
    /// Load operation.
    pub load_op: AttachmentLoadOp,
    /// RGBA clear value used with [`AttachmentLoadOp::Clear`].
    pub clear_value: [f32; 4],
}

impl<'a> RenderColorAttachment<'a> {
    /// Create an attachment that preserves the texture's contents.
    pub fn new(texture: &'a Texture) -> Self {
        Self {
            texture,
            load_op: AttachmentLoadOp::default(),
            clear_value: [0.0; 4],
        }
    }

    /// Set the load operation.
    pub fn with_load_op(mut self, load_op: AttachmentLoadOp) -> Self {
        self.load_op = load_op;
        self
    }

    /// Clear to the given color at the start of the pass.
    pub fn with_clear(mut self, color: [f32; 4]) -> Self {
        self.load_op = AttachmentLoadOp::Clear;
        self.clear_value = color;
        self
    }

    /// Get the load action for this attachment.
    pub fn load_action(&self) -> LoadAction {
        self.load_op.resolve(ClearValue::Color(self.clear_value))
    }
}

/// A depth or stencil attachment of a render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderDepthStencilAttachment<'a> {
    /// Texture rendered into.
    pub texture: &'a Texture,
    /// Load operation.
    pub load_op: AttachmentLoadOp,
    /// Clear value used with [`AttachmentLoadOp::Clear`].
    pub clear_value: ClearDepthStencilValue,
}

impl<'a> RenderDepthStencilAttachment<'a> {
    /// Create an attachment that preserves the texture's contents.
    pub fn new(texture: &'a Texture) -> Self {
        Self {
            texture,
            load_op: AttachmentLoadOp::default(),
            clear_value: ClearDepthStencilValue::default(),
        }
    }

    /// Set the load operation.
    pub fn with_load_op(mut self, load_op: AttachmentLoadOp) -> Self {
        self.load_op = load_op;
        self
    }

    /// Clear to the given depth and stencil values at the start of the pass.
    pub fn with_clear(mut self, depth: f32, stencil: i32) -> Self {
        self.load_op = AttachmentLoadOp::Clear;
        self.clear_value = ClearDepthStencilValue::new(depth, stencil);
        self
    }

    /// Get the load action for this attachment.
    pub fn load_action(&self) -> LoadAction {
        self.load_op.resolve(ClearValue::DepthStencil(self.clear_value))
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Viewport of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Drawn rectangle in pixels.
    pub draw_rect: Rect2d,
    /// Minimum depth.
    pub min_depth: f32,
    /// Maximum depth.
    pub max_depth: f32,
    /// Clip-space depth convention.
    pub depth_range: ClipDepthRange,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            draw_rect: Rect2d::default(),
            min_depth: 0.0,
            max_depth: 1.0,
            depth_range: ClipDepthRange::default(),
        }
    }
}

impl Viewport {
    /// Create a viewport covering `draw_rect` with the full depth range.
    pub fn new(draw_rect: Rect2d) -> Self {
        Self {
            draw_rect,
            ..Default::default()
        }
    }

    /// Create a viewport at offset zero covering `extent`.
    pub fn from_extent(extent: Extent2d) -> Self {
        Self::new(Rect2d::from_extent(extent))
    }

    /// Set the depth bounds.
    pub fn with_depth(mut self, min_depth: f32, max_depth: f32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    /// Set the clip-space depth convention.
    pub fn with_depth_range(mut self, depth_range: ClipDepthRange) -> Self {
        self.depth_range = depth_range;
        self
    }

    fn validate(&self) -> GraphicsResult<()> {
        if self.draw_rect.extent.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "viewport extent cannot be zero".to_string(),
            ));
        }
        let depth_ok = (0.0..=1.0).contains(&self.min_depth)
            && (0.0..=1.0).contains(&self.max_depth)
            && self.min_depth <= self.max_depth;
        if !depth_ok {
            return Err(GraphicsError::InvalidParameter(format!(
                "viewport depth bounds {}..{} outside 0..1",
                self.min_depth, self.max_depth
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Render pass info
// ============================================================================

/// Load actions of every attachment slot of a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPassLoadActions {
    /// One action per color attachment, in attachment order.
    pub color: Vec<LoadAction>,
    /// Depth attachment action.
    pub depth: Option<LoadAction>,
    /// Stencil attachment action.
    pub stencil: Option<LoadAction>,
}

/// Render targets, load behavior and viewport of one pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPassInfo<'a> {
    /// Debug label.
    pub label: Option<&'a str>,
    /// Explicit viewport; inferred from the attachments when `None`.
    pub viewport: Option<Viewport>,
    /// Color attachments.
    pub color_attachments: &'a [RenderColorAttachment<'a>],
    /// Depth attachment.
    pub depth_attachment: Option<RenderDepthStencilAttachment<'a>>,
    /// Stencil attachment.
    pub stencil_attachment: Option<RenderDepthStencilAttachment<'a>>,
}

impl<'a> RenderPassInfo<'a> {
    /// Create a pass rendering into `color_attachments`.
    pub fn new(color_attachments: &'a [RenderColorAttachment<'a>]) -> Self {
        Self {
            color_attachments,
            ..Default::default()
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set an explicit viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Set the depth attachment.
    pub fn with_depth_attachment(mut self, attachment: RenderDepthStencilAttachment<'a>) -> Self {
        self.depth_attachment = Some(attachment);
        self
    }

    /// Set the stencil attachment.
    pub fn with_stencil_attachment(
        mut self,
        attachment: RenderDepthStencilAttachment<'a>,
    ) -> Self {
        self.stencil_attachment = Some(attachment);
        self
    }

    /// Iterate all attached textures: colors first, then depth, then stencil.
    pub fn textures(&self) -> impl Iterator<Item = &'a Texture> {
        self.color_attachments
            .iter()
            .map(|a| a.texture)
            .chain(self.depth_attachment.map(|a| a.texture))
            .chain(self.stencil_attachment.map(|a| a.texture))
    }

    /// Samples per pixel of the attachments, taken from the first one.
    ///
    /// [`validate`](Self::validate) rejects passes whose attachments disagree.
    pub fn sample_count(&self) -> Option<SampleCount> {
        self.textures().next().map(Texture::sample_count)
    }

    /// Get the viewport used by the pass.
    ///
    /// An explicit viewport is returned as is. Otherwise the viewport sits at
    /// offset zero and covers the smallest extent among all attachments.
    /// Returns `None` when there is neither a viewport nor any attachment.
    pub fn effective_viewport(&self) -> Option<Viewport> {
        if self.viewport.is_some() {
            return self.viewport;
        }
        self.textures()
            .map(Texture::extent_2d)
            .reduce(Extent2d::min)
            .map(|extent| Viewport::new(Rect2d::new(Offset2d::ZERO, extent)))
    }

    /// Validate attachment formats, sample counts and the viewport.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::InvalidParameter`] if an attachment's format
    /// does not fit its slot, the attachments differ in sample count, or no
    /// valid viewport can be resolved.
    pub fn validate(&self) -> GraphicsResult<()> {
        for (index, attachment) in self.color_attachments.iter().enumerate() {
            let format = attachment.texture.format();
            if !format.is_color() {
                return Err(GraphicsError::InvalidParameter(format!(
                    "color attachment {index} has non-color format {format:?}"
                )));
            }
        }

        if let Some(attachment) = &self.depth_attachment {
            let format = attachment.texture.format();
            if !format.is_depth() {
                return Err(GraphicsError::InvalidParameter(format!(
                    "depth attachment has non-depth format {format:?}"
                )));
            }
        }

        if let Some(attachment) = &self.stencil_attachment {
            let format = attachment.texture.format();
            if !format.has_stencil() {
                return Err(GraphicsError::InvalidParameter(format!(
                    "stencil attachment has format {format:?} without stencil"
                )));
            }
        }

        if let Some(expected) = self.sample_count()
            && let Some(texture) = self.textures().find(|t| t.sample_count() != expected)
        {
            return Err(GraphicsError::InvalidParameter(format!(
                "attachment {:?} has {:?} samples, expected {expected:?}",
                texture.label(),
                texture.sample_count()
            )));
        }

        let viewport = self.effective_viewport().ok_or_else(|| {
            GraphicsError::InvalidParameter(
                "render pass has neither a viewport nor attachments".to_string(),
            )
        })?;
        viewport.validate()
    }

    /// Get the load action of every attachment slot.
    pub fn load_actions(&self) -> RenderPassLoadActions {
        RenderPassLoadActions {
            color: self
                .color_attachments
                .iter()
                .map(RenderColorAttachment::load_action)
                .collect(),
            depth: self.depth_attachment.map(|a| a.load_action()),
            stencil: self.stencil_attachment.map(|a| a.load_action()),
        }
    }
}

// ============================================================================
// Default target
// ============================================================================

/// Begin info for a pass on the default target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPassBeginInfo<'a> {
    /// Debug label.
    pub label: Option<&'a str>,
    /// Explicit viewport; the whole target when `None`.
    pub viewport: Option<Viewport>,
    /// Color load operation.
    pub color_load_op: AttachmentLoadOp,
    /// Color clear value.
    pub clear_color: [f32; 4],
    /// Depth load operation.
    pub depth_load_op: AttachmentLoadOp,
    /// Stencil load operation.
    pub stencil_load_op: AttachmentLoadOp,
    /// Depth/stencil clear value.
    pub clear_depth_stencil: ClearDepthStencilValue,
    /// Encode color writes with the sRGB transfer function.
    pub enable_srgb: bool,
}

impl Default for RenderPassBeginInfo<'_> {
    fn default() -> Self {
        Self {
            label: None,
            viewport: None,
            color_load_op: AttachmentLoadOp::default(),
            clear_color: [0.0; 4],
            depth_load_op: AttachmentLoadOp::default(),
            stencil_load_op: AttachmentLoadOp::default(),
            clear_depth_stencil: ClearDepthStencilValue::default(),
            enable_srgb: true,
        }
    }
}

impl<'a> RenderPassBeginInfo<'a> {
    /// Set the debug label.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set an explicit viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Clear color at the start of the pass.
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.color_load_op = AttachmentLoadOp::Clear;
        self.clear_color = color;
        self
    }

    /// Clear depth and stencil at the start of the pass.
    pub fn with_clear_depth_stencil(mut self, depth: f32, stencil: i32) -> Self {
        self.depth_load_op = AttachmentLoadOp::Clear;
        self.stencil_load_op = AttachmentLoadOp::Clear;
        self.clear_depth_stencil = ClearDepthStencilValue::new(depth, stencil);
        self
    }

    /// Enable or disable sRGB encoding of color writes.
    pub fn with_srgb(mut self, enable: bool) -> Self {
        self.enable_srgb = enable;
        self
    }

    /// Get the viewport for a default target of the given size.
    pub fn effective_viewport(&self, target: Extent2d) -> Viewport {
        self.viewport.unwrap_or_else(|| Viewport::from_extent(target))
    }

    /// Get the load actions of the color, depth and stencil aspects.
    ///
    /// Clear values are reported as supplied; the backend passes color
    /// writes, clears included, through [`Self::encode_output`].
    pub fn load_actions(&self) -> RenderPassLoadActions {
        let depth_stencil = ClearValue::DepthStencil(self.clear_depth_stencil);
        RenderPassLoadActions {
            color: vec![self.color_load_op.resolve(ClearValue::Color(self.clear_color))],
            depth: Some(self.depth_load_op.resolve(depth_stencil)),
            stencil: Some(self.stencil_load_op.resolve(depth_stencil)),
        }
    }

    /// Encode a linear color written to the default target.
    ///
    /// With sRGB enabled the RGB channels go through the sRGB OETF after
    /// clamping to `[0, 1]`; alpha is never touched.
    pub fn encode_output(&self, linear: [f32; 4]) -> [f32; 4] {
        if !self.enable_srgb {
            return linear;
        }
        let [r, g, b, a] = linear;
        [srgb_oetf(r), srgb_oetf(g), srgb_oetf(b), a]
    }
}

fn srgb_oetf(linear: f32) -> f32 {
    let c = linear.clamp(0.0, 1.0);
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
