// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement bookkeeping and synchronous recompute for one badge row.

use alloc::vec;
use alloc::vec::Vec;

use tokenline_layout::{Degradation, RowLayout, TokenBox, TokenMeasure, compute_layout};

use crate::token::Token;

/// Default gap between adjacent badges, in the shared measurement unit.
pub const SPACING: f64 = 2.0;

bitflags::bitflags! {
    /// Which measurements a row slot has received so far.
    ///
    /// The empty set means the slot is entirely unmeasured.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MeasureFlags: u8 {
        /// The full badge width has been reported.
        const FULL_WIDTH = 0b0000_0001;
        /// The name-only width has been reported.
        const NAME_WIDTH = 0b0000_0010;
    }
}

/// Measurement table and layout cache for one badge row.
///
/// Construct it from the real tokens in priority order; the row appends the
/// trailing [`Token::ellipsis`] slot itself. The host then streams widths in
/// through the report methods as badges get measured, one slot at a time, in
/// any order; every report synchronously re-runs the truncation search and
/// replaces the cached [`RowLayout`] wholesale. Slots that have not reported
/// yet count as zero width, so early layouts are provisional and converge
/// once the table fills in. Until an available width is reported the row is
/// treated as unbounded.
///
/// Each row owns its table outright, so independent rows never interfere.
///
/// # Example
///
/// ```rust
/// use tokenline_row::{Rgba8, Token, TokenRow};
///
/// let mut row = TokenRow::new([
///     Token::new(Rgba8::WHITE, Rgba8::BLACK)
///         .with_icon("tram")
///         .with_info("12"),
/// ]);
/// row.report_available_width(120.0);
/// row.report_width(0, 64.0);
/// row.report_name_width(0, 28.0);
/// row.report_width(1, 20.0);
/// row.report_name_width(1, 20.0);
///
/// assert!(row.is_fully_measured());
/// assert!(!row.layout().is_degraded());
/// assert_eq!(row.boxes()[0].displayed_width, 64.0);
/// ```
#[derive(Clone, Debug)]
pub struct TokenRow {
    tokens: Vec<Token>,
    measures: Vec<TokenMeasure>,
    reported: Vec<MeasureFlags>,
    available_width: f64,
    spacing: f64,
    layout: RowLayout,
}

impl TokenRow {
    /// Create a row from the real tokens, with the default [`SPACING`].
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self::assemble(tokens.into_iter().collect(), Token::ellipsis(), SPACING)
    }

    /// Create a row with a non-default inter-badge spacing.
    pub fn with_spacing(tokens: impl IntoIterator<Item = Token>, spacing: f64) -> Self {
        Self::assemble(tokens.into_iter().collect(), Token::ellipsis(), spacing)
    }

    /// Create a row with a custom overflow indicator instead of the default
    /// ellipsis badge.
    ///
    /// The indicator still takes the last slot and follows the indicator
    /// rules: hidden while the row shrinks, shown at its full width once
    /// badges start dropping, never name-shrunk.
    pub fn with_indicator(tokens: impl IntoIterator<Item = Token>, indicator: Token) -> Self {
        Self::assemble(tokens.into_iter().collect(), indicator, SPACING)
    }

    fn assemble(mut tokens: Vec<Token>, indicator: Token, spacing: f64) -> Self {
        tokens.push(indicator);
        let len = tokens.len();
        let measures = vec![TokenMeasure::default(); len];
        let layout = compute_layout(&measures, f64::INFINITY, spacing);
        Self {
            tokens,
            measures,
            reported: vec![MeasureFlags::empty(); len],
            available_width: f64::INFINITY,
            spacing,
            layout,
        }
    }

    /// Record the full rendered width of the badge in `slot` and recompute.
    ///
    /// Last write wins. Reports for slots outside the row are ignored.
    pub fn report_width(&mut self, slot: usize, value: f64) {
        if slot >= self.measures.len() {
            self.note_ignored(slot);
            return;
        }
        self.measures[slot].full_width = value;
        self.reported[slot].insert(MeasureFlags::FULL_WIDTH);
        self.recompute();
    }

    /// Record the name-only width of the badge in `slot` and recompute.
    ///
    /// Last write wins. Reports for slots outside the row are ignored.
    pub fn report_name_width(&mut self, slot: usize, value: f64) {
        if slot >= self.measures.len() {
            self.note_ignored(slot);
            return;
        }
        self.measures[slot].name_width = value;
        self.reported[slot].insert(MeasureFlags::NAME_WIDTH);
        self.recompute();
    }

    /// Record the container's available width and recompute.
    pub fn report_available_width(&mut self, value: f64) {
        self.available_width = value;
        self.recompute();
    }

    /// All tokens in row order, the appended ellipsis last.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of row slots, including the trailing ellipsis.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the row holds no real tokens, only the ellipsis slot.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// The widths last reported for `slot`, if the slot exists.
    ///
    /// Values are returned as reported; normalization of garbage happens
    /// inside the layout pass.
    pub fn measure(&self, slot: usize) -> Option<TokenMeasure> {
        self.measures.get(slot).copied()
    }

    /// Which measurement kinds `slot` has received so far.
    pub fn reported(&self, slot: usize) -> MeasureFlags {
        self.reported.get(slot).copied().unwrap_or_default()
    }

    /// Whether every slot has reported both of its widths.
    pub fn is_fully_measured(&self) -> bool {
        self.reported.iter().all(|flags| flags.is_all())
    }

    /// The available width last reported, or infinity before the first report.
    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    /// The inter-badge spacing this row lays out with.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The current layout, recomputed on every report.
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Geometry boxes of the current layout, one per slot.
    pub fn boxes(&self) -> &[TokenBox] {
        &self.layout.boxes
    }

    /// Severity the current layout was accepted at.
    pub fn degradation(&self) -> Degradation {
        self.layout.degradation
    }

    /// Rightmost visible edge of the current layout.
    pub fn extent(&self) -> f64 {
        self.layout.extent
    }

    fn recompute(&mut self) {
        self.layout = compute_layout(&self.measures, self.available_width, self.spacing);
        #[cfg(feature = "log")]
        log::trace!(
            "row recomputed: {:?}, extent {} of {}",
            self.layout.degradation,
            self.layout.extent,
            self.available_width
        );
    }

    #[cfg_attr(
        not(feature = "log"),
        allow(unused_variables, reason = "only read by the log feature")
    )]
    fn note_ignored(&self, slot: usize) {
        #[cfg(feature = "log")]
        log::warn!(
            "ignoring measurement report for slot {} of a {}-slot row",
            slot,
            self.measures.len()
        );
    }
}
