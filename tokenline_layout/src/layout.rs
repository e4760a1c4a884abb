// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase degradation search and its positioning arithmetic.

use alloc::vec::Vec;

use crate::policy::{DisplayState, box_widths, display_state};
use crate::types::{Degradation, Phase, RowLayout, TokenBox, TokenMeasure};

/// Lay out a badge row, degrading trailing tokens until it fits.
///
/// `measures` holds one entry per row position in priority order, the ellipsis
/// slot last; position 0 is the highest priority and is never degraded. The
/// search walks candidates from least to most severe and accepts the first one
/// whose extent is at most `available_width`:
///
/// - Shrink phase, cutoff `0..len`: the ellipsis stays hidden and the trailing
///   `cutoff` positions lose their info suffix.
/// - Drop phase, cutoff `0..len`: the ellipsis becomes visible and the
///   trailing `cutoff` positions collapse to nothing, the remaining middle
///   positions already at name-only width.
///
/// If even the deepest drop candidate overflows, that candidate is returned
/// anyway: the leading token and the ellipsis are the irreducible minimum, and
/// [`RowLayout::extent`] then exceeds `available_width`. With the cutoff
/// bounded strictly below the row length the search always terminates within
/// `2 * len` candidate evaluations, whatever `available_width` is (including
/// zero, negative, or NaN, all of which no candidate can satisfy).
///
/// The result is a pure function of the arguments: equal inputs give equal
/// box lists. Negative or non-finite measured widths are treated as zero.
#[must_use]
pub fn compute_layout(measures: &[TokenMeasure], available_width: f64, spacing: f64) -> RowLayout {
    let len = measures.len();
    let mut boxes = Vec::with_capacity(len);
    if len == 0 {
        return RowLayout {
            boxes,
            extent: 0.0,
            degradation: Degradation::NONE,
        };
    }

    for cutoff in 0..len {
        let extent = lay_out_candidate(measures, spacing, Phase::Shrink, cutoff, &mut boxes);
        if extent <= available_width {
            return RowLayout {
                boxes,
                extent,
                degradation: Degradation {
                    phase: Phase::Shrink,
                    cutoff,
                },
            };
        }
    }

    for cutoff in 0..len - 1 {
        let extent = lay_out_candidate(measures, spacing, Phase::Drop, cutoff, &mut boxes);
        if extent <= available_width {
            return RowLayout {
                boxes,
                extent,
                degradation: Degradation {
                    phase: Phase::Drop,
                    cutoff,
                },
            };
        }
    }

    // Best effort: the deepest drop candidate, overflow permitted.
    let cutoff = len - 1;
    let extent = lay_out_candidate(measures, spacing, Phase::Drop, cutoff, &mut boxes);
    RowLayout {
        boxes,
        extent,
        degradation: Degradation {
            phase: Phase::Drop,
            cutoff,
        },
    }
}

/// Lay out one search candidate into `boxes` and return its extent.
///
/// Positioning: `offset[0] = 0`, then each box advances the cursor by
/// `displayed_width - clipped + spacing`, so the clipped amount of a degraded
/// token is tucked under its successors. A collapsed box is the exception: it
/// advances the cursor by nothing at all, its spacing compensated away, which
/// puts the visible ellipsis one spacing after the last surviving token. No
/// compensation applies while nothing is collapsed.
fn lay_out_candidate(
    measures: &[TokenMeasure],
    spacing: f64,
    phase: Phase,
    cutoff: usize,
    boxes: &mut Vec<TokenBox>,
) -> f64 {
    boxes.clear();
    let len = measures.len();
    let mut offset = 0.0;
    let mut extent = 0.0;
    for (index, &measure) in measures.iter().enumerate() {
        let state = display_state(index, len, cutoff, phase);
        let (displayed_width, clipped) = box_widths(state, measure);
        boxes.push(TokenBox {
            offset,
            displayed_width,
            clipped,
        });
        extent = offset + displayed_width - clipped;
        offset = if state == DisplayState::Collapsed {
            offset
        } else {
            extent + spacing
        };
    }
    extent
}
