// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degradation policy: which display state each row position takes.
//!
//! The policy is a pure table lookup, kept apart from the offset arithmetic in
//! [`layout`](crate::layout) so both can be tested in isolation.

use crate::types::{Phase, TokenMeasure};

/// Display state of one row position under a given phase and cutoff.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DisplayState {
    /// The badge shows everything it measured.
    Full,
    /// The info suffix is cut; only the icon/title portion shows.
    NameOnly,
    /// The badge contributes no visible space at all.
    Collapsed,
    /// The trailing overflow indicator, not currently shown.
    EllipsisHidden,
    /// The trailing overflow indicator, shown at its full width.
    EllipsisVisible,
}

/// Classify row position `index` out of `len` for a search candidate.
///
/// The rules, in order of precedence:
///
/// - The last position is always the ellipsis slot: hidden while the search is
///   still shrinking, visible once it is dropping. It is never name-shrunk.
/// - Position 0 is exempt from degradation in both phases.
/// - A position within the trailing `cutoff` (that is, `index >= len - cutoff`)
///   degrades: to [`NameOnly`](DisplayState::NameOnly) in the shrink phase, to
///   [`Collapsed`](DisplayState::Collapsed) in the drop phase.
/// - Everything else keeps [`Full`](DisplayState::Full) while shrinking. In
///   the drop phase the row has already exhausted shrinking, so non-collapsed
///   middle positions stay at [`NameOnly`](DisplayState::NameOnly).
///
/// Total over all inputs: a `cutoff` at or beyond `len` simply degrades every
/// eligible position.
pub fn display_state(index: usize, len: usize, cutoff: usize, phase: Phase) -> DisplayState {
    if index + 1 >= len {
        return match phase {
            Phase::Shrink => DisplayState::EllipsisHidden,
            Phase::Drop => DisplayState::EllipsisVisible,
        };
    }
    if index == 0 {
        return DisplayState::Full;
    }
    if index >= len.saturating_sub(cutoff) {
        return match phase {
            Phase::Shrink => DisplayState::NameOnly,
            Phase::Drop => DisplayState::Collapsed,
        };
    }
    match phase {
        Phase::Shrink => DisplayState::Full,
        Phase::Drop => DisplayState::NameOnly,
    }
}

/// Displayed and clipped width for a token in the given state.
///
/// Returns `(displayed_width, clipped)` with `clipped` always equal to the
/// sanitized full width minus the displayed width. The measurement is run
/// through [`TokenMeasure::sanitized`] first, and a name width above the full
/// width is treated as the full width, so the result is total and the pair
/// always sums to the sanitized full width.
pub fn box_widths(state: DisplayState, measure: TokenMeasure) -> (f64, f64) {
    let measure = measure.sanitized();
    let full = measure.full_width;
    match state {
        DisplayState::Full | DisplayState::EllipsisVisible => (full, 0.0),
        DisplayState::NameOnly => {
            let name = measure.name_width.min(full);
            (name, full - name)
        }
        DisplayState::Collapsed | DisplayState::EllipsisHidden => (0.0, full),
    }
}
