// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tokenline_row --heading-base-level=0

//! Tokenline Row: the host layer around the badge-row truncation search.
//!
//! ## Overview
//!
//! [`tokenline_layout`] turns reported widths into geometry; this crate owns
//! everything around that pure core for one on-screen row:
//!
//! - [`Token`]: immutable badge content (title, icon name, info suffix,
//!   colors). Row order is priority order; the token at index 0 never
//!   degrades, and the row appends the trailing [`Token::ellipsis`] overflow
//!   indicator itself ([`TokenRow::with_indicator`] substitutes a custom one).
//! - [`TokenRow`]: a per-row controller owning the measurement table. The
//!   host streams report calls in as badges get measured and as the container
//!   resizes; every report re-runs the truncation search synchronously and
//!   replaces the cached [`RowLayout`](tokenline_layout::RowLayout) wholesale.
//! - [`BadgePainter`]: the seam a renderer implements to draw visible badges
//!   from [`BadgePlacement`] geometry (Kurbo rectangles, frame plus clip).
//!
//! ## Not a renderer, not a measurer
//!
//! This crate draws nothing and measures nothing. Measure each badge with
//! whatever the host UI provides (a text layout pass, a hidden render, a
//! glyph cache), report the widths, and paint from the resulting placements.
//! How a badge looks (font, padding, icon resolution) stays on the host side
//! of the seam.
//!
//! ## Measurement contract
//!
//! Reports arrive per slot, in any order; last write wins. Slots that have
//! not reported yet count as zero width, so early layouts are provisional and
//! converge once every badge reports; [`TokenRow::is_fully_measured`] exposes
//! that convergence. Each row owns its table outright, so independent rows
//! never interfere.
//!
//! # Example
//!
//! ```rust
//! use tokenline_row::{Rgba8, Token, TokenRow};
//!
//! // Two travel legs; the row appends the overflow indicator itself.
//! let mut row = TokenRow::new([
//!     Token::new(Rgba8::WHITE, Rgba8::rgb(0x00, 0x7a, 0xff))
//!         .with_icon("figure.walk")
//!         .with_info("32"),
//!     Token::new(Rgba8::WHITE, Rgba8::rgb(0x34, 0xc7, 0x59))
//!         .with_title("Bike")
//!         .with_info("24"),
//! ]);
//!
//! // The host measures each badge and reports its widths.
//! row.report_width(0, 80.0);
//! row.report_name_width(0, 40.0);
//! row.report_width(1, 60.0);
//! row.report_name_width(1, 30.0);
//! row.report_width(2, 20.0);
//! row.report_name_width(2, 20.0);
//!
//! // Plenty of room: nothing degrades.
//! row.report_available_width(300.0);
//! assert!(!row.layout().is_degraded());
//!
//! // Drag the panel narrower: the Bike badge loses its info suffix.
//! row.report_available_width(100.0);
//! assert_eq!(row.boxes()[1].displayed_width, 30.0);
//!
//! // Narrower still: Bike collapses outright and the ellipsis badge shows.
//! row.report_available_width(40.0);
//! let placements = row.placements(24.0);
//! assert_eq!(placements.len(), 2);
//! assert_eq!(placements[1].index, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod paint;
pub mod row;
pub mod token;

pub use paint::{BadgePainter, BadgePlacement, CORNER_RADIUS};
pub use row::{MeasureFlags, SPACING, TokenRow};
pub use token::{Rgba8, Token};
