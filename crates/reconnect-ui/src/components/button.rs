//! Button Components
//!
//! The three card actions each get their own look:
//! - Yes: filled rose, the answer we hope for
//! - No: outlined, a little shy
//! - Back: small text link under the message

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled rose button
    #[default]
    Yes,
    /// Outlined button
    No,
    /// Subtle text-style button
    Back,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Yes => "btn-yes",
            ButtonVariant::No => "btn-no",
            ButtonVariant::Back => "btn-back",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// DOM id, so styles and tests can find the button
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled card button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Yes,
///         id: "yes-btn".to_string(),
///         onclick: move |_| card.affirm(),
///         "Yes"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());
    let id = props.id.clone().unwrap_or_default();

    rsx! {
        button {
            id: "{id}",
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Yes.class(), "btn-yes");
        assert_eq!(ButtonVariant::No.class(), "btn-no");
        assert_eq!(ButtonVariant::Back.class(), "btn-back");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Yes);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(button_class(ButtonVariant::No, None), "btn-no");
        assert_eq!(button_class(ButtonVariant::No, Some("")), "btn-no");
        assert_eq!(button_class(ButtonVariant::No, Some("wobble")), "btn-no wobble");
    }
}
