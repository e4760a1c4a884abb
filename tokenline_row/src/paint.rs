// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The painter seam: per-badge placement geometry for renderers.

use alloc::vec::Vec;

use kurbo::{Rect, RoundedRect};

use crate::row::TokenRow;
use crate::token::Token;

/// Corner radius of a badge's visible region.
pub const CORNER_RADIUS: f64 = 4.0;

/// Where one badge goes under the current layout.
///
/// `frame` is the badge's natural rectangle; the renderer lays the badge's
/// full content out inside it. `clip` is the leading sub-rectangle allowed to
/// show, its width the displayed width, so a name-shrunk badge still paints
/// everything and the clip cuts the info suffix off at the right edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BadgePlacement {
    /// Row slot this placement belongs to.
    pub index: usize,
    /// Natural rectangle of the badge's content.
    pub frame: Rect,
    /// Region of `frame` allowed to show.
    pub clip: Rect,
    /// Corner radius to round `clip` with.
    pub radius: f64,
}

impl BadgePlacement {
    /// The clip as a rounded rectangle, ready for a clip layer.
    pub fn rounded_clip(&self) -> RoundedRect {
        RoundedRect::from_rect(self.clip, self.radius)
    }
}

/// Draws badges, one call per visible placement.
///
/// Implemented by the host renderer. The row resolves icon names, colors, and
/// text; this trait only receives them together with the geometry to put them
/// in.
pub trait BadgePainter {
    /// Draw one badge inside `placement`.
    fn paint_badge(&mut self, token: &Token, placement: &BadgePlacement);
}

impl TokenRow {
    /// Placement geometry for the current layout at the given row height.
    ///
    /// One entry per visible box, in row order. Zero-width boxes (collapsed
    /// badges, the hidden ellipsis, unmeasured slots) get no placement.
    pub fn placements(&self, height: f64) -> Vec<BadgePlacement> {
        self.boxes()
            .iter()
            .enumerate()
            .filter(|(_, token_box)| token_box.displayed_width > 0.0)
            .map(|(index, token_box)| BadgePlacement {
                index,
                frame: Rect::new(
                    token_box.offset,
                    0.0,
                    token_box.offset + token_box.displayed_width + token_box.clipped,
                    height,
                ),
                clip: Rect::new(
                    token_box.offset,
                    0.0,
                    token_box.offset + token_box.displayed_width,
                    height,
                ),
                radius: CORNER_RADIUS,
            })
            .collect()
    }

    /// Hand every visible badge of the current layout to `painter`, left to
    /// right.
    ///
    /// Badges arrive in row order, so where degraded boxes overlap a later
    /// badge paints over its predecessor's clipped tail.
    pub fn paint(&self, height: f64, painter: &mut dyn BadgePainter) {
        for placement in &self.placements(height) {
            painter.paint_badge(&self.tokens()[placement.index], placement);
        }
    }
}
