//! Visibility rules for the learning display modes.
//!
//! Visibility is never stored. Every render pass derives it from the token
//! sequence, the display mode and the blur intensity, so identical inputs always
//! produce the same mask.

use crate::types::{DisplayMode, Token, TokenKind, Visibility};

/// Highest blur intensity.
pub const MAX_INTENSITY: u8 = 100;

/// Slider step for the blur intensity.
pub const INTENSITY_STEP: u8 = 5;

/// Above this intensity punctuation is hidden too.
const PUNCTUATION_BLUR_THRESHOLD: u8 = 90;

/// Resolve the visibility of the token at `index`.
///
/// An out-of-range index resolves to `Visible`. Intensity is clamped to
/// [`MAX_INTENSITY`].
pub fn resolve_visibility(
    tokens: &[Token],
    index: usize,
    mode: DisplayMode,
    intensity: u8,
) -> Visibility {
    let Some(token) = tokens.get(index) else {
        return Visibility::Visible;
    };

    if token.kind == TokenKind::Newline {
        return Visibility::Visible;
    }

    match mode {
        DisplayMode::Study | DisplayMode::Test => Visibility::Visible,
        DisplayMode::Initials => resolve_initials(tokens, index, token),
        DisplayMode::Blur => resolve_blur(index, token, intensity.min(MAX_INTENSITY)),
    }
}

/// Resolve visibility for every token in order.
pub fn resolve_all(tokens: &[Token], mode: DisplayMode, intensity: u8) -> Vec<Visibility> {
    (0..tokens.len())
        .map(|i| resolve_visibility(tokens, i, mode, intensity))
        .collect()
}

fn resolve_initials(tokens: &[Token], index: usize, token: &Token) -> Visibility {
    match token.kind {
        TokenKind::Space | TokenKind::Punctuation | TokenKind::Newline => Visibility::Visible,
        TokenKind::Word => Visibility::InitialOnly,
        TokenKind::CjkChar => {
            // The first ideograph of each clause stays as a cue.
            let previous = tokens[..index]
                .iter()
                .rev()
                .find(|t| t.kind != TokenKind::Space);

            match previous.map(|t| t.kind) {
                None | Some(TokenKind::Newline) | Some(TokenKind::Punctuation) => {
                    Visibility::Visible
                }
                Some(_) => Visibility::Hidden,
            }
        }
    }
}

fn resolve_blur(index: usize, token: &Token, intensity: u8) -> Visibility {
    if intensity == 0 {
        return Visibility::Visible;
    }

    match token.kind {
        TokenKind::Punctuation => {
            if intensity > PUNCTUATION_BLUR_THRESHOLD {
                Visibility::Hidden
            } else {
                Visibility::Visible
            }
        }
        TokenKind::Space | TokenKind::Newline => Visibility::Visible,
        TokenKind::Word | TokenKind::CjkChar => {
            if blur_seed(index, token.char_len(), intensity) < u64::from(intensity) {
                Visibility::Hidden
            } else {
                Visibility::Visible
            }
        }
    }
}

/// Deterministic pseudo-random value in `0..100` for the blur mask.
pub fn blur_seed(index: usize, len: usize, intensity: u8) -> u64 {
    (index as u64 * 7 + len as u64 * 13 + u64::from(intensity) * 23) % 100
}

/// CSS blur radius in pixels for hidden tokens at the given intensity.
pub fn blur_radius(intensity: u8) -> f32 {
    f32::from(intensity.min(MAX_INTENSITY)) / 15.0
}

/// Clamp a slider value to `0..=100` and round it to the nearest step.
pub fn snap_intensity(value: i32) -> u8 {
    let clamped = value.clamp(0, i32::from(MAX_INTENSITY));
    let step = i32::from(INTENSITY_STEP);
    let snapped = (clamped + step / 2) / step * step;
    snapped.min(i32::from(MAX_INTENSITY)) as u8
}

/// Render tokens as plain text with hidden characters replaced.
///
/// Hidden tokens become one `placeholder` per character; initial-only tokens
/// keep their first character. Spaces and newlines are always kept.
pub fn mask_text(tokens: &[Token], mode: DisplayMode, intensity: u8, placeholder: char) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        match resolve_visibility(tokens, i, mode, intensity) {
            Visibility::Visible => out.push_str(&token.content),
            Visibility::Hidden => out.extend(std::iter::repeat(placeholder).take(token.char_len())),
            Visibility::InitialOnly => {
                let (head, tail) = token.initial();
                out.push_str(head);
                out.extend(std::iter::repeat(placeholder).take(tail.chars().count()));
            }
        }
    }

    out
}
