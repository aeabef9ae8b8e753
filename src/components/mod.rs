//! UI Components for the reconnect card.
//!
//! Page-specific panels; reusable pieces live in `reconnect-ui`.

mod affirmative_panel;
mod prompt_panel;

pub use affirmative_panel::AffirmativePanel;
pub use prompt_panel::PromptPanel;
