// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal example: a painter adapter that renders the badge row with ANSI
//! truecolor, one terminal column per layout unit.
//!
//! The adapter is both sides of the contract: it measures each badge as the
//! column count of its text label and reports those widths, then paints the
//! accepted layout. Degraded badges tuck their clipped tails under their
//! successors, so a later badge overdraws where they overlap, and the painter
//! clips everything to the container's column count.
//!
//! Run:
//! - `cargo run -p tokenline_demos --example terminal_row`

use tokenline_layout::Degradation;
use tokenline_row::{BadgePainter, BadgePlacement, Rgba8, Token, TokenRow};

#[derive(Copy, Clone)]
struct Cell {
    ch: char,
    fg: Rgba8,
    bg: Rgba8,
}

/// One row of colored cells, `None` where nothing painted.
struct TerminalPainter {
    cells: Vec<Option<Cell>>,
}

impl TerminalPainter {
    fn new(columns: usize) -> Self {
        Self {
            cells: vec![None; columns],
        }
    }

    fn into_ansi(self) -> String {
        let mut out = String::new();
        let mut current: Option<(Rgba8, Rgba8)> = None;
        for cell in self.cells {
            match cell {
                Some(Cell { ch, fg, bg }) => {
                    if current != Some((fg, bg)) {
                        out.push_str(&format!("\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b));
                        if bg.a == 0 {
                            out.push_str("\x1b[49m");
                        } else {
                            out.push_str(&format!("\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b));
                        }
                        current = Some((fg, bg));
                    }
                    out.push(ch);
                }
                None => {
                    if current.is_some() {
                        out.push_str("\x1b[0m");
                        current = None;
                    }
                    out.push(' ');
                }
            }
        }
        out.push_str("\x1b[0m");
        out
    }
}

impl BadgePainter for TerminalPainter {
    fn paint_badge(&mut self, token: &Token, placement: &BadgePlacement) {
        let label: Vec<char> = full_label(token).chars().collect();
        let start = placement.clip.x0.round() as usize;
        let end = (placement.clip.x1.round() as usize).min(self.cells.len());
        for x in start..end {
            // The clip shares its left edge with the frame, so the label
            // starts right at the clip.
            let ch = label.get(x - start).copied().unwrap_or(' ');
            self.cells[x] = Some(Cell {
                ch,
                fg: token.foreground,
                bg: token.background,
            });
        }
    }
}

fn icon_glyph(icon: &str) -> char {
    match icon {
        "figure.walk" => 'w',
        "car.fill" => 'c',
        "airplane" => 'a',
        "ellipsis" => '+',
        _ => '#',
    }
}

/// The icon/title portion of the label, padded.
fn name_label(token: &Token) -> String {
    let mut label = String::from(" ");
    if let Some(icon) = &token.icon {
        label.push(icon_glyph(icon));
        label.push(' ');
    }
    if let Some(title) = &token.title {
        label.push_str(title);
        label.push(' ');
    }
    label
}

/// The whole label: name portion plus the info suffix.
fn full_label(token: &Token) -> String {
    let mut label = name_label(token);
    if let Some(info) = &token.info {
        label.push_str(info);
        label.push(' ');
    }
    label
}

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

fn main() {
    let mut row = TokenRow::new(travel_tokens());

    // Measure every badge, ellipsis slot included, in terminal columns.
    let measured: Vec<(f64, f64)> = row
        .tokens()
        .iter()
        .map(|token| {
            (
                full_label(token).chars().count() as f64,
                name_label(token).chars().count() as f64,
            )
        })
        .collect();
    for (slot, (full_width, name_width)) in measured.into_iter().enumerate() {
        row.report_width(slot, full_width);
        row.report_name_width(slot, name_width);
    }

    for columns in [80.0, 44.0, 25.0, 18.0, 8.0] {
        row.report_available_width(columns);
        let mut painter = TerminalPainter::new(columns as usize);
        row.paint(1.0, &mut painter);
        let Degradation { phase, cutoff } = row.degradation();
        println!(
            "{columns:>3} columns  {phase:?} cutoff {cutoff}, extent {}",
            row.extent()
        );
        println!("{}", painter.into_ansi());
        println!();
    }
}
