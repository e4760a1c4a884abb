// Copyright 2025 the Tokenline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge content: tokens and their colors.

use alloc::string::String;

/// 8-bit sRGB color with straight alpha.
///
/// Kept deliberately dumb; renderers convert into whatever their paint API
/// wants.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Accent blue, the foreground a badge gets when none is set.
    pub const ACCENT: Self = Self::rgb(0x00, 0x7a, 0xff);
    /// Neutral gray, the fill of the default ellipsis badge.
    pub const GRAY: Self = Self::rgb(0x8e, 0x8e, 0x93);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }
}

/// Immutable content of one badge.
///
/// A badge renders an optional icon and title, then a trailing info suffix.
/// The suffix is the first thing truncation cuts (see
/// [`tokenline_layout`]), so put the expendable detail there. Row order is
/// priority order: the token at index 0 never degrades.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// Title text, if any.
    pub title: Option<String>,
    /// Symbolic icon name, resolved by the renderer.
    pub icon: Option<String>,
    /// Trailing info suffix, if any.
    pub info: Option<String>,
    /// Color of icon and text.
    pub foreground: Rgba8,
    /// Fill color of the badge.
    pub background: Rgba8,
}

impl Default for Token {
    /// An empty badge in the default colors: accent foreground over a
    /// transparent fill.
    fn default() -> Self {
        Self::new(Rgba8::ACCENT, Rgba8::TRANSPARENT)
    }
}

impl Token {
    /// Create an empty badge with the given colors.
    pub const fn new(foreground: Rgba8, background: Rgba8) -> Self {
        Self {
            title: None,
            icon: None,
            info: None,
            foreground,
            background,
        }
    }

    /// Set the title text.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(String::from(title));
        self
    }

    /// Set the symbolic icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(String::from(icon));
        self
    }

    /// Set the trailing info suffix.
    #[must_use]
    pub fn with_info(mut self, info: &str) -> Self {
        self.info = Some(String::from(info));
        self
    }

    /// Set the color of icon and text.
    #[must_use]
    pub fn with_foreground(mut self, foreground: Rgba8) -> Self {
        self.foreground = foreground;
        self
    }

    /// Set the fill color of the badge.
    #[must_use]
    pub fn with_background(mut self, background: Rgba8) -> Self {
        self.background = background;
        self
    }

    /// The synthetic overflow indicator appended to the end of every row.
    ///
    /// Icon-only, white on gray, no info suffix; it is either hidden outright
    /// or shown at its full width, never name-shrunk.
    #[must_use]
    pub fn ellipsis() -> Self {
        Self::new(Rgba8::WHITE, Rgba8::GRAY).with_icon("ellipsis")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_content() {
        let token = Token::new(Rgba8::WHITE, Rgba8::rgb(0x00, 0x7a, 0xff))
            .with_icon("figure.walk")
            .with_info("32");
        assert_eq!(token.icon.as_deref(), Some("figure.walk"));
        assert_eq!(token.info.as_deref(), Some("32"));
        assert_eq!(token.title, None);
    }

    #[test]
    fn ellipsis_is_icon_only() {
        let token = Token::ellipsis();
        assert_eq!(token.icon.as_deref(), Some("ellipsis"));
        assert_eq!(token.title, None);
        assert_eq!(token.info, None);
        assert_eq!(token.foreground, Rgba8::WHITE);
        assert_eq!(token.background, Rgba8::GRAY);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Rgba8::rgb(1, 2, 3).a, 0xff);
        assert_eq!(Rgba8::default(), Rgba8::TRANSPARENT);
    }

    #[test]
    fn default_token_is_accent_on_transparent() {
        let token = Token::default().with_title("Taxi");
        assert_eq!(token.foreground, Rgba8::ACCENT);
        assert_eq!(token.background, Rgba8::TRANSPARENT);
        assert_eq!(token.title.as_deref(), Some("Taxi"));
    }

    #[test]
    fn color_builders_override_defaults() {
        let token = Token::default()
            .with_foreground(Rgba8::WHITE)
            .with_background(Rgba8::ACCENT);
        assert_eq!(token.foreground, Rgba8::WHITE);
        assert_eq!(token.background, Rgba8::ACCENT);
    }
}
