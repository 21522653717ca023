use ratatui::style::Color;

/// Errors produced while parsing a configured color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("Color '{0}' must have 6 hex digits")]
    InvalidLength(String),

    #[error("Color '{0}' contains invalid hex digits")]
    InvalidDigits(String),
}

/// Parse a `#rrggbb` string into a terminal RGB color
pub fn parse_hex_color(color: &str) -> Result<Color, ColorError> {
    let hex = color
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(color.to_string()))?;

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ColorError::InvalidLength(color.to_string()));
    }

    // from_str_radix alone would also take a sign
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigits(color.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidDigits(color.to_string()))
    };

    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
