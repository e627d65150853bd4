// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan of the displayed image.
//!
//! The image is drawn inside a scrollable whose content is the viewport
//! scaled by [`Scale`]. Panning is expressed as a relative scroll offset so
//! it survives window resizes; `(0.5, 0.5)` is centered.

pub use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, SCALE_STEP};
use iced::widget::scrollable::RelativeOffset;
use iced::{Point, Size};

const CENTERED: RelativeOffset = RelativeOffset { x: 0.5, y: 0.5 };

/// Zoom factor, guaranteed to be within the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_SCALE, MAX_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Multiplies the scale by `SCALE_STEP` once per wheel step; negative
    /// steps zoom out.
    #[must_use]
    pub fn stepped(self, steps: f32) -> Self {
        Self::new(self.0 * SCALE_STEP.powf(steps))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer: Point,
    offset: RelativeOffset,
}

/// Scale, pan offset and the grab-and-drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: Scale,
    offset: RelativeOffset,
    drag: Option<DragAnchor>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            offset: CENTERED,
            drag: None,
        }
    }
}

impl ViewTransform {
    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn offset(&self) -> RelativeOffset {
        self.offset
    }

    /// Whether the view is at scale 1.0 and centered.
    pub fn is_identity(&self) -> bool {
        self.scale == Scale::default() && self.offset == CENTERED
    }

    /// Zooms by wheel steps. Returns the offset to apply when the scale
    /// changed.
    pub fn zoom(&mut self, steps: f32) -> Option<RelativeOffset> {
        let scale = self.scale.stepped(steps);
        if scale == self.scale {
            return None;
        }
        self.scale = scale;
        Some(self.offset)
    }

    /// Restores scale 1.0 and a centered image.
    pub fn reset(&mut self) -> RelativeOffset {
        *self = Self::default();
        self.offset
    }

    /// Size of the scrollable content for a viewport of `viewport` size.
    ///
    /// Never smaller than the viewport so the image stays centered when
    /// zoomed out.
    #[must_use]
    pub fn content_size(&self, viewport: Size) -> Size {
        let factor = self.scale.value().max(1.0);
        Size::new(viewport.width * factor, viewport.height * factor)
    }

    /// Size of the image box inside the content.
    #[must_use]
    pub fn image_size(&self, viewport: Size) -> Size {
        Size::new(
            viewport.width * self.scale.value(),
            viewport.height * self.scale.value(),
        )
    }

    pub fn start_drag(&mut self, pointer: Point) {
        self.drag = Some(DragAnchor {
            pointer,
            offset: self.offset,
        });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pans following the pointer. Returns the new offset while a drag is
    /// active and the content overflows the viewport.
    pub fn drag_to(&mut self, pointer: Point, viewport: Size) -> Option<RelativeOffset> {
        let anchor = self.drag?;
        let content = self.content_size(viewport);
        let overflow_x = content.width - viewport.width;
        let overflow_y = content.height - viewport.height;
        if overflow_x <= 0.0 && overflow_y <= 0.0 {
            return None;
        }

        // Moving the cursor right scrolls the content left.
        let shift = |start: f32, delta: f32, overflow: f32| {
            if overflow <= 0.0 {
                start
            } else {
                (start - delta / overflow).clamp(0.0, 1.0)
            }
        };
        self.offset = RelativeOffset {
            x: shift(anchor.offset.x, pointer.x - anchor.pointer.x, overflow_x),
            y: shift(anchor.offset.y, pointer.y - anchor.pointer.y, overflow_y),
        };
        Some(self.offset)
    }
}
