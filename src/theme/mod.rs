//! Card theme: palette constants and global styles.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

use colors::*;

/// `:root` block declaring the color custom properties used by
/// [`GLOBAL_STYLES`].
pub fn root_variables() -> String {
    let vars = [
        ("cream", CREAM),
        ("blush", BLUSH),
        ("card-white", CARD_WHITE),
        ("rose", ROSE),
        ("rose-deep", ROSE_DEEP),
        ("lilac", LILAC),
        ("text-primary", TEXT_PRIMARY),
        ("text-secondary", TEXT_SECONDARY),
        ("overlay-scrim", OVERLAY_SCRIM),
    ];
    let body: String = vars
        .iter()
        .map(|(name, value)| format!("  --{name}: {value};\n"))
        .collect();
    format!(":root {{\n{body}}}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_cover_styles() {
        let vars = root_variables();
        for name in ["--rose", "--rose-deep", "--lilac", "--cream", "--overlay-scrim"] {
            assert!(vars.contains(&format!("{name}:")), "missing {name}");
            assert!(GLOBAL_STYLES.contains(&format!("var({name})")), "unused {name}");
        }
    }
}
