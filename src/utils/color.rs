/// Hex color parsing
use crate::models::Rgb;

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive) into an [`Rgb`].
///
/// Returns `None` for anything that is not exactly six hex digits after an
/// optional leading `#`. Callers pick the fallback color.
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a color as `#rrggbb`
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(parse_hex("#1A2b3C"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex("ffffff"), Some(Rgb::WHITE));
        assert_eq!(parse_hex("#000000"), Some(Rgb::BLACK));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex("not-a-color"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#1234567"), None);
        assert_eq!(parse_hex("##123456"), None);
        assert_eq!(parse_hex("#12345g"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex(" #123456"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgb::new(0x11, 0xab, 0x00)), "#11ab00");
    }
}
