// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width-sweep example: one badge row degrading step by step as its
//! container narrows, drawn as ASCII art.
//!
//! Run:
//! - `cargo run -p tokenline_demos --example width_sweep`

use kurbo::Rect;
use tokenline_layout::{Degradation, Phase};
use tokenline_row::{Rgba8, Token, TokenRow};

const ROW_HEIGHT: f64 = 24.0;
/// Layout units per ASCII cell.
const SCALE: f64 = 4.0;

/// Pre-measured `(full_width, name_width)` per slot, ellipsis last.
const WIDTHS: [(f64, f64); 7] = [
    (52.0, 30.0),
    (64.0, 42.0),
    (58.0, 36.0),
    (59.0, 30.0),
    (69.0, 40.0),
    (59.0, 30.0),
    (30.0, 30.0),
];

fn travel_tokens() -> Vec<Token> {
    let blue = Rgba8::rgb(0x00, 0x7a, 0xff);
    let green = Rgba8::rgb(0x34, 0xc7, 0x59);
    let red = Rgba8::rgb(0xff, 0x3b, 0x30);
    let orange = Rgba8::rgb(0xff, 0x95, 0x00);
    vec![
        Token::new(Rgba8::WHITE, blue)
            .with_icon("figure.walk")
            .with_info("32"),
        Token::new(Rgba8::WHITE, green).with_title("Bike").with_info("24"),
        Token::new(Rgba8::WHITE, red).with_title("ICE").with_info("50"),
        Token::new(Rgba8::WHITE, blue)
            .with_icon("car.fill")
            .with_info("477"),
        Token::new(Rgba8::WHITE, blue).with_title("Taxi").with_info("321"),
        Token::new(Rgba8::WHITE, orange)
            .with_icon("airplane")
            .with_info("666"),
    ]
}

fn glyph(token: &Token) -> char {
    if let Some(title) = &token.title {
        return title.chars().next().unwrap_or('#');
    }
    match token.icon.as_deref() {
        Some("figure.walk") => 'w',
        Some("car.fill") => 'c',
        Some("airplane") => 'a',
        Some("ellipsis") => '+',
        _ => '#',
    }
}

fn cell_span(rect: Rect, limit: usize) -> (usize, usize) {
    let start = ((rect.x0 / SCALE).round() as usize).min(limit);
    let end = ((rect.x1 / SCALE).round() as usize).min(limit);
    (start, end)
}

fn ascii_row(row: &TokenRow, available_width: f64) -> String {
    let placements = row.placements(ROW_HEIGHT);
    let right = placements
        .iter()
        .map(|placement| placement.clip.x1)
        .fold(available_width, f64::max);
    let limit = (right / SCALE).ceil() as usize + 1;
    let mut line = vec![' '; limit];
    for placement in &placements {
        let mark = glyph(&row.tokens()[placement.index]);
        let (start, end) = cell_span(placement.clip, limit);
        for cell in &mut line[start..end] {
            *cell = mark;
        }
    }
    // Container edge marker; shrunk tails and best-effort overflow spill past
    // it until the host clips to the container.
    let edge = ((available_width / SCALE).round() as usize).min(limit.saturating_sub(1));
    line[edge] = '|';
    line.into_iter().collect()
}

fn main() {
    let mut row = TokenRow::new(travel_tokens());
    for (slot, (full_width, name_width)) in WIDTHS.into_iter().enumerate() {
        row.report_width(slot, full_width);
        row.report_name_width(slot, name_width);
    }

    for available_width in [500.0, 340.0, 280.0, 220.0, 160.0, 120.0, 81.0, 80.0, 40.0] {
        row.report_available_width(available_width);
        let Degradation { phase, cutoff } = row.degradation();
        let verdict = if row.extent() <= available_width {
            "fits"
        } else {
            "overflows"
        };
        let stage = match phase {
            Phase::Shrink if cutoff == 0 => String::from("full row"),
            Phase::Shrink => format!("shrink cutoff {cutoff}"),
            Phase::Drop => format!("drop cutoff {cutoff}"),
        };
        println!(
            "{available_width:>5} wide -> {stage}, extent {} ({verdict})",
            row.extent()
        );
        println!("      {}", ascii_row(&row, available_width));
        println!();
    }
}
