// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement inputs and geometry outputs of a layout pass.

use alloc::vec::Vec;

/// Reported widths for one token, in a shared linear unit (points/pixels).
///
/// `full_width` is the badge's natural rendered width including every part and
/// internal padding. `name_width` is the width of just the icon/title portion,
/// with the trailing info suffix removed. For the ellipsis slot only
/// `full_width` is consulted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TokenMeasure {
    /// Natural rendered width of the whole badge.
    pub full_width: f64,
    /// Rendered width of the icon/title portion alone.
    pub name_width: f64,
}

impl TokenMeasure {
    /// Create a measurement from full and name-only widths.
    pub const fn new(full_width: f64, name_width: f64) -> Self {
        Self {
            full_width,
            name_width,
        }
    }

    /// Copy with negative or non-finite widths clamped to zero.
    ///
    /// Missing or garbage reports must never make the search misbehave, so
    /// every width is normalized through this before any arithmetic.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            full_width: sanitize_width(self.full_width),
            name_width: sanitize_width(self.name_width),
        }
    }
}

#[inline]
fn sanitize_width(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

/// Computed geometry for one token in one layout pass.
///
/// Boxes are ephemeral: each recompute replaces the whole list. The visible
/// span of a box is `[offset, offset + displayed_width)`; `clipped` is how much
/// of the token's full width the pass cut away (`full_width - displayed_width`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TokenBox {
    /// Left edge, relative to the row origin.
    pub offset: f64,
    /// Width the token currently occupies on screen.
    pub displayed_width: f64,
    /// Width removed from the token's natural size by degradation.
    pub clipped: f64,
}

/// Which half of the degradation search produced a layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Phase {
    /// Trailing tokens lose their info suffix; the ellipsis stays hidden.
    Shrink,
    /// Trailing tokens collapse to nothing; the ellipsis becomes visible.
    Drop,
}

/// Accepted severity of a layout pass: the phase plus its cutoff.
///
/// `cutoff` counts trailing row positions subject to degradation and is always
/// strictly less than the row length. The derived ordering ranks severity:
/// every [`Shrink`](Phase::Shrink) result orders below every
/// [`Drop`](Phase::Drop) result, and within a phase a larger cutoff orders
/// higher.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Degradation {
    /// Search phase the accepted candidate came from.
    pub phase: Phase,
    /// Number of trailing positions degraded in that candidate.
    pub cutoff: usize,
}

impl Degradation {
    /// The least severe outcome: nothing shrunk, nothing dropped.
    pub const NONE: Self = Self {
        phase: Phase::Shrink,
        cutoff: 0,
    };
}

/// Result of one layout pass over a row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// One box per token, in token order, ellipsis last.
    pub boxes: Vec<TokenBox>,
    /// Rightmost visible edge of the last box.
    ///
    /// The row fits its container iff `extent <= available_width`. A
    /// best-effort layout may report an extent beyond the available width when
    /// the irreducible minimum (the leading token plus the ellipsis) cannot
    /// fit.
    pub extent: f64,
    /// Severity of the accepted candidate.
    pub degradation: Degradation,
}

impl RowLayout {
    /// Whether the pass degraded anything at all.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degradation != Degradation::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_garbage_widths() {
        let m = TokenMeasure::new(-4.0, f64::NAN).sanitized();
        assert_eq!(m, TokenMeasure::new(0.0, 0.0));

        let m = TokenMeasure::new(f64::INFINITY, 12.0).sanitized();
        assert_eq!(m, TokenMeasure::new(0.0, 12.0));

        let m = TokenMeasure::new(80.0, 40.0).sanitized();
        assert_eq!(m, TokenMeasure::new(80.0, 40.0));
    }

    #[test]
    fn degradation_orders_by_severity() {
        let none = Degradation::NONE;
        let shrink_two = Degradation {
            phase: Phase::Shrink,
            cutoff: 2,
        };
        let drop_zero = Degradation {
            phase: Phase::Drop,
            cutoff: 0,
        };
        let drop_two = Degradation {
            phase: Phase::Drop,
            cutoff: 2,
        };

        assert!(none < shrink_two);
        assert!(shrink_two < drop_zero);
        assert!(drop_zero < drop_two);
    }

    #[test]
    fn row_layout_reports_degraded() {
        let clean = RowLayout {
            boxes: Vec::new(),
            extent: 0.0,
            degradation: Degradation::NONE,
        };
        assert!(!clean.is_degraded());

        let shrunk = RowLayout {
            degradation: Degradation {
                phase: Phase::Shrink,
                cutoff: 1,
            },
            ..clean
        };
        assert!(shrunk.is_degraded());
    }
}
