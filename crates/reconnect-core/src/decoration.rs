//! Decorative hearts.
//!
//! A [`Decoration`] is a purely visual, short-lived element. It carries
//! everything the UI needs to render it plus the lifetime after which the
//! spawner detaches it from its container.

use std::fmt;
use std::time::Duration;

/// Unique identifier for a spawned decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecorationId(pub u64);

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heart-{}", self.0)
    }
}

/// Which animation a heart plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    /// Background rain, falls from the top of the window
    Falling,
    /// Single heart floating up next to the buttons
    Rising,
}

impl DecorationKind {
    /// Returns the CSS class for this kind
    pub fn class(&self) -> &'static str {
        match self {
            DecorationKind::Falling => "falling-heart",
            DecorationKind::Rising => "heart",
        }
    }
}

/// Horizontal position of a decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Percentage of the viewport width
    Viewport(f64),
    /// Pixels from the left edge of the container
    Pixels(f64),
}

impl Placement {
    pub fn value(&self) -> f64 {
        match *self {
            Placement::Viewport(v) | Placement::Pixels(v) => v,
        }
    }

    /// CSS length for the `left` property.
    pub fn css(&self) -> String {
        match self {
            Placement::Viewport(v) => format!("{v:.2}vw"),
            Placement::Pixels(px) => format!("{px:.2}px"),
        }
    }
}

/// A single heart with its randomized visual parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub id: DecorationId,
    pub kind: DecorationKind,
    /// Width and height in pixels
    pub size_px: u32,
    pub left: Placement,
    /// Background color, always taken from the card palette
    pub color: String,
    pub animation_duration: Duration,
    pub animation_delay: Duration,
    /// Time from attach to detach
    pub lifetime: Duration,
}

impl Decoration {
    /// Inline style for the rendered element.
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}; \
             animation-duration: {duration:.2}s; animation-delay: {delay:.2}s; \
             background-color: {color};",
            size = self.size_px,
            left = self.left.css(),
            duration = self.animation_duration.as_secs_f64(),
            delay = self.animation_delay.as_secs_f64(),
            color = self.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Decoration {
        Decoration {
            id: DecorationId(7),
            kind: DecorationKind::Falling,
            size_px: 20,
            left: Placement::Viewport(37.5),
            color: "#ff9fb7".to_string(),
            animation_duration: Duration::from_millis(5250),
            animation_delay: Duration::from_millis(1500),
            lifetime: Duration::from_millis(6750),
        }
    }

    #[test]
    fn kind_classes() {
        assert_eq!(DecorationKind::Falling.class(), "falling-heart");
        assert_eq!(DecorationKind::Rising.class(), "heart");
    }

    #[test]
    fn id_display() {
        assert_eq!(DecorationId(12).to_string(), "heart-12");
    }

    #[test]
    fn style_contains_every_parameter() {
        let style = sample().style();
        assert!(style.contains("width: 20px"));
        assert!(style.contains("height: 20px"));
        assert!(style.contains("left: 37.50vw"));
        assert!(style.contains("animation-duration: 5.25s"));
        assert!(style.contains("animation-delay: 1.50s"));
        assert!(style.contains("background-color: #ff9fb7"));
    }

    #[test]
    fn pixel_placement_css() {
        assert_eq!(Placement::Pixels(12.0).css(), "12.00px");
        assert_eq!(Placement::Pixels(12.0).value(), 12.0);
    }
}
