use tracing::debug;

use super::{SectionId, VisibilityEntry};

/// The scrollable surface sections are mounted on.
pub trait Viewport {
    fn is_mounted(&self, section: SectionId) -> bool;

    /// Smoothly scroll so the section's top lines up with the top of the
    /// viewport.
    fn scroll_into_view(&mut self, section: SectionId);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub section: SectionId,
    pub top: f32,
    pub height: f32,
}

/// A scroll the runtime still has to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    pub offset: f32,
}

/// Fraction of a box of `height` starting at `top` that lies inside the
/// viewport `[view_top, view_top + view_height)`.
pub fn visible_ratio(top: f32, height: f32, view_top: f32, view_height: f32) -> f32 {
    if height <= 0.0 || view_height <= 0.0 {
        return 0.0;
    }
    let start = top.max(view_top);
    let end = (top + height).min(view_top + view_height);
    ((end - start) / height).clamp(0.0, 1.0)
}

/// Vertical stack of mounted sections with a known geometry.
///
/// Front ends without an intersection observer feed scroll offsets in and
/// read [`visibility_changes`](SectionLayout::visibility_changes) back out.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    boxes: Vec<SectionBox>,
    offset: f32,
    viewport_height: f32,
    pending: Option<ScrollRequest>,
    /// Sections at or above the threshold as of the last change report.
    in_view: Vec<SectionId>,
}

impl SectionLayout {
    /// Stack sections top to bottom in the given order.
    pub fn stacked(sections: &[(SectionId, f32)], viewport_height: f32) -> Self {
        let mut top = 0.0;
        let boxes = sections
            .iter()
            .map(|&(section, height)| {
                let b = SectionBox { section, top, height };
                top += height;
                b
            })
            .collect();
        Self {
            boxes,
            offset: 0.0,
            viewport_height,
            pending: None,
            in_view: Vec::new(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn content_height(&self) -> f32 {
        self.boxes.iter().map(|b| b.top + b.height).fold(0.0, f32::max)
    }

    /// Record where the runtime says the viewport is.
    pub fn set_viewport(&mut self, offset: f32, viewport_height: f32) {
        self.offset = offset.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
    }

    pub fn section_box(&self, section: SectionId) -> Option<&SectionBox> {
        self.boxes.iter().find(|b| b.section == section)
    }

    /// One entry per mounted section, in layout order.
    pub fn visibility(&self) -> Vec<VisibilityEntry> {
        self.boxes
            .iter()
            .map(|b| VisibilityEntry {
                section: b.section,
                ratio: visible_ratio(b.top, b.height, self.offset, self.viewport_height),
            })
            .collect()
    }

    /// Entries for sections that crossed `threshold` in either direction
    /// since the previous call, in layout order. The first call reports
    /// every section already in view.
    pub fn visibility_changes(&mut self, threshold: f32) -> Vec<VisibilityEntry> {
        let current = self.visibility();
        let changed: Vec<VisibilityEntry> = current
            .into_iter()
            .filter(|entry| {
                let now = entry.ratio > 0.0 && entry.ratio >= threshold;
                now != self.in_view.contains(&entry.section)
            })
            .collect();
        for entry in &changed {
            if self.in_view.contains(&entry.section) {
                self.in_view.retain(|s| *s != entry.section);
            } else {
                self.in_view.push(entry.section);
            }
        }
        changed
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }
}

impl Viewport for SectionLayout {
    fn is_mounted(&self, section: SectionId) -> bool {
        self.section_box(section).is_some()
    }

    fn scroll_into_view(&mut self, section: SectionId) {
        let Some(target) = self.section_box(section).map(|b| b.top) else {
            return;
        };
        let max_offset = (self.content_height() - self.viewport_height).max(0.0);
        let offset = target.min(max_offset);
        debug!(%section, offset, "scrolling section into view");
        self.offset = offset;
        self.pending = Some(ScrollRequest { section, offset });
    }
}
