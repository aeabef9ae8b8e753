//! Panel visibility.
//!
//! The prompt and affirmative panels are mutually exclusive, so they are
//! modeled as a [`Stage`]. The overlay sits on top of either stage and is
//! tracked separately.

/// Named regions of the card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    /// The yes/no question
    Prompt,
    /// Message shown after "yes"
    Affirmative,
    /// Playful message shown briefly after "no"
    Overlay,
}

/// Which of the two main panels is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Stage {
    #[default]
    Prompt,
    Affirmative,
}

/// Visibility of every panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PanelState {
    stage: Stage,
    overlay_visible: bool,
}

impl PanelState {
    /// Prompt showing, everything else hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Prompt => self.stage == Stage::Prompt,
            Panel::Affirmative => self.stage == Stage::Affirmative,
            Panel::Overlay => self.overlay_visible,
        }
    }

    /// `"hidden"` for hidden panels, empty otherwise.
    pub fn hidden_class(&self, panel: Panel) -> &'static str {
        if self.is_visible(panel) {
            ""
        } else {
            "hidden"
        }
    }

    /// Show the affirmative panel and clear the overlay.
    ///
    /// Returns whether anything changed.
    pub fn affirm(&mut self) -> bool {
        let before = *self;
        self.stage = Stage::Affirmative;
        self.overlay_visible = false;
        *self != before
    }

    /// Show the overlay. The stage is left alone.
    pub fn decline(&mut self) -> bool {
        let changed = !self.overlay_visible;
        self.overlay_visible = true;
        changed
    }

    /// Go back to the prompt. Only valid from the affirmative stage.
    pub fn return_to_prompt(&mut self) -> bool {
        if self.stage != Stage::Affirmative {
            return false;
        }
        self.stage = Stage::Prompt;
        true
    }

    /// Timed end of the overlay.
    pub fn hide_overlay(&mut self) -> bool {
        let changed = self.overlay_visible;
        self.overlay_visible = false;
        changed
    }
}
