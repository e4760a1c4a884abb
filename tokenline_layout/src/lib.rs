// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tokenline_layout --heading-base-level=0

//! Tokenline Layout: adaptive truncation for a single row of badges.
//!
//! A badge row shows fixed-height tokens (icon/title plus a trailing info
//! suffix) left to right in priority order, highest priority first. When the
//! container narrows, the row must give ground gracefully instead of clipping
//! at an arbitrary pixel: first the trailing badges lose their info suffix,
//! then they disappear entirely behind a trailing ellipsis indicator.
//!
//! This crate is the pure core of that behavior.
//!
//! - [`compute_layout`] runs the two-phase greedy search over "how much to
//!   degrade" and returns one geometry box per token.
//! - [`policy`] classifies each row position (full, name-only, collapsed, or
//!   the ellipsis slot) independently of the positioning arithmetic.
//!
//! Measuring text and drawing badges are the host's business; the crate only
//! turns reported widths into offsets. It has no UI-framework dependency and
//! is `no_std` (with `alloc`).
//!
//! # Example
//!
//! ```rust
//! use tokenline_layout::{compute_layout, Degradation, Phase, TokenMeasure};
//!
//! // Two real tokens plus the trailing ellipsis slot.
//! let measures = [
//!     TokenMeasure::new(80.0, 40.0),
//!     TokenMeasure::new(60.0, 30.0),
//!     TokenMeasure::new(20.0, 20.0),
//! ];
//!
//! // Plenty of room: every badge at full width, ellipsis hidden.
//! let layout = compute_layout(&measures, 300.0, 2.0);
//! assert_eq!(layout.degradation, Degradation::NONE);
//! assert_eq!(layout.boxes[1].displayed_width, 60.0);
//!
//! // Tight: the trailing badge gives up its info suffix.
//! let layout = compute_layout(&measures, 100.0, 2.0);
//! assert_eq!(
//!     layout.degradation,
//!     Degradation {
//!         phase: Phase::Shrink,
//!         cutoff: 2,
//!     }
//! );
//! assert_eq!(layout.boxes[1].displayed_width, 30.0);
//!
//! // Narrower still: the trailing badge collapses outright and the ellipsis
//! // becomes visible right after the last survivor.
//! let layout = compute_layout(&measures, 40.0, 2.0);
//! assert_eq!(layout.degradation.phase, Phase::Drop);
//! assert_eq!(layout.boxes[1].displayed_width, 0.0);
//! assert_eq!(layout.boxes[2].displayed_width, 20.0);
//! ```
//!
//! The search is deterministic, total over its inputs (garbage widths clamp
//! to zero), and bounded: at most `2 * len` candidates are evaluated, so a
//! container too narrow for even the leading badge plus the ellipsis resolves
//! to a best-effort layout that overflows, rather than looping.

#![no_std]

extern crate alloc;

pub mod layout;
pub mod policy;
pub mod types;

pub use layout::compute_layout;
pub use policy::DisplayState;
pub use types::{Degradation, Phase, RowLayout, TokenBox, TokenMeasure};
