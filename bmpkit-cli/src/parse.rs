//! Parsers for the dotted literal formats the CLI accepts.

use bmpkit_codec::Rgb;

/// Parse an `R.G.B` dotted-decimal color literal.
///
/// # Errors
///
/// A descriptive message when the literal is malformed or a component falls
/// outside `0..=255`.
pub fn color(text: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = text.split('.').collect();
    let &[r, g, b] = parts.as_slice() else {
        return Err(format!("invalid color '{text}' (expected R.G.B)"));
    };
    Ok(Rgb::new(component(text, r)?, component(text, g)?, component(text, b)?))
}

fn component(literal: &str, part: &str) -> Result<u8, String> {
    let value: i32 = part
        .parse()
        .map_err(|_| format!("invalid color '{literal}' (expected R.G.B)"))?;
    u8::try_from(value)
        .map_err(|_| format!("color components must be between 0 and 255 (got {value})"))
}

/// Parse an `X.Y` center-coordinate literal.
///
/// Components may be negative; a circle centered off-frame simply clips.
///
/// # Errors
///
/// A descriptive message when the literal is not two dot-separated integers.
pub fn center(text: &str) -> Result<(i32, i32), String> {
    let malformed = || format!("invalid center '{text}' (expected X.Y)");
    let (x, y) = text.split_once('.').ok_or_else(malformed)?;
    let x = x.parse().map_err(|_| malformed())?;
    let y = y.parse().map_err(|_| malformed())?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::{center, color};
    use bmpkit_codec::Rgb;

    #[test]
    fn test_color_valid() {
        assert_eq!(color("255.0.0"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(color("0.128.255"), Ok(Rgb::new(0, 128, 255)));
    }

    #[test]
    fn test_color_malformed() {
        assert!(color("255.0").is_err());
        assert!(color("255.0.0.0").is_err());
        assert!(color("red").is_err());
        assert!(color("1.2.x").is_err());
    }

    #[test]
    fn test_color_out_of_range() {
        let err = color("0.300.0").unwrap_err();
        assert!(err.contains("between 0 and 255"));
        assert!(color("-1.0.0").unwrap_err().contains("between 0 and 255"));
    }

    #[test]
    fn test_center_valid() {
        assert_eq!(center("100.50"), Ok((100, 50)));
        assert_eq!(center("-10.5"), Ok((-10, 5)));
        assert_eq!(center("100.-50"), Ok((100, -50)));
    }

    #[test]
    fn test_center_malformed() {
        assert!(center("100").is_err());
        assert!(center("100.").is_err());
        assert!(center("a.b").is_err());
        assert!(center("1.2.3").is_err());
    }
}
