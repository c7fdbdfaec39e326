//! Hex color string parsing (`#RRGGBB`)
//!
//! Parsing returns an explicit `Result` so callers can tell a failed parse
//! apart from a color that happens to equal the fallback. The UI substitutes
//! `FALLBACK_COLOR` at the edge via `unwrap_or`.

use macroquad::prelude::Color;
use std::fmt;

/// Color substituted for unparseable input: opaque white
pub const FALLBACK_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Why a hex color string failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// Input does not start with `#`
    MissingHash,
    /// Wrong number of digits after `#` (total input length attached)
    BadLength(usize),
    /// A character outside `[0-9a-fA-F]`
    BadDigit,
}

impl fmt::Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexColorError::MissingHash => write!(f, "hex color must start with '#'"),
            HexColorError::BadLength(len) => {
                write!(f, "hex color must be 7 characters (#RRGGBB), got {}", len)
            }
            HexColorError::BadDigit => write!(f, "hex color contains a non-hex digit"),
        }
    }
}

impl std::error::Error for HexColorError {}

/// Parse `#RRGGBB` into a normalized color. Alpha is always 1.0 since the
/// hex form encodes no alpha channel.
pub fn parse_hex_color(s: &str) -> Result<Color, HexColorError> {
    let digits = s.strip_prefix('#').ok_or(HexColorError::MissingHash)?;
    if digits.len() != 6 {
        return Err(HexColorError::BadLength(s.len()));
    }
    // Reject non-ASCII up front so the byte-range slices below stay on
    // char boundaries.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexColorError::BadDigit);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| HexColorError::BadDigit)
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(Color::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ))
}

/// Re-encode the RGB channels as `#RRGGBB` (uppercase). Alpha is dropped.
pub fn color_to_hex(color: Color) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        byte(color.r),
        byte(color.g),
        byte(color.b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let c = parse_hex_color("#4D99E6").unwrap();
        assert!((c.r - 77.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 153.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 230.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_alpha_always_opaque() {
        assert_eq!(parse_hex_color("#000000").unwrap().a, 1.0);
        assert_eq!(parse_hex_color("#FFFFFF").unwrap().a, 1.0);
    }

    #[test]
    fn test_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#F2F2F5", "#1A1A1A", "#4D99E6", "#A6BFE6", "#0F0E0D"] {
            let color = parse_hex_color(hex).unwrap();
            assert_eq!(color_to_hex(color), *hex, "round trip failed for {}", hex);
        }
    }

    #[test]
    fn test_round_trip_lowercase_input() {
        // Lowercase digits parse to the same color; re-encoding is uppercase.
        let color = parse_hex_color("#a6bfe6").unwrap();
        assert_eq!(color_to_hex(color), "#A6BFE6");
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(parse_hex_color(""), Err(HexColorError::MissingHash));
        assert_eq!(parse_hex_color("F2F2F5"), Err(HexColorError::MissingHash));
        assert_eq!(parse_hex_color("#F2F2"), Err(HexColorError::BadLength(5)));
        assert_eq!(parse_hex_color("#F2F2F5AA"), Err(HexColorError::BadLength(9)));
        assert_eq!(parse_hex_color("#"), Err(HexColorError::BadLength(1)));
        assert_eq!(parse_hex_color("#GGGGGG"), Err(HexColorError::BadDigit));
        assert_eq!(parse_hex_color("#12345G"), Err(HexColorError::BadDigit));
    }

    #[test]
    fn test_malformed_non_ascii_does_not_panic() {
        // 6 bytes after '#' but not 6 ASCII digits; must error, not slice
        // mid-character.
        assert_eq!(parse_hex_color("#ααα"), Err(HexColorError::BadDigit));
        assert_eq!(parse_hex_color("#aαaα"), Err(HexColorError::BadDigit));
        assert!(parse_hex_color("#é2F2F5").is_err());
    }

    #[test]
    fn test_fallback_at_the_edge() {
        let c = parse_hex_color("not a color").unwrap_or(FALLBACK_COLOR);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 1.0, 1.0));
    }
}
