//! Pastel heart colors.

/// Colors the falling and rising hearts are drawn from.
pub const PASTEL_PALETTE: [&str; 6] = [
    "#ff9fb7", "#f8b5e9", "#ffd2e6", "#f4a5cf", "#deaaf5", "#e6c6fa",
];

/// The default palette as owned strings, for configuration.
pub fn default_palette() -> Vec<String> {
    PASTEL_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Returns true for `#rgb` and `#rrggbb` hex colors.
pub fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
