//! The demo's button component.

use std::fmt;

use crate::view::{Callback, DemoStyles, Node};

use super::Component;

/// Props of [`Button`].
#[derive(Clone)]
pub struct ButtonProps {
    /// Label shown on the button.
    pub title: String,
    /// Invoked when the button is pressed.
    pub on_press: Callback,
}

impl ButtonProps {
    pub fn new(title: impl Into<String>, on_press: Callback) -> Self {
        Self {
            title: title.into(),
            on_press,
        }
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// A rounded, pressable button with a text label.
#[derive(Debug, Clone, Copy, Default)]
pub struct Button;

impl Component for Button {
    type Props = ButtonProps;

    fn display_name(&self) -> Option<&str> {
        Some("CustomButton")
    }

    fn render(&self, props: &ButtonProps) -> Node {
        Node::touchable(props.on_press.clone())
            .with_style(DemoStyles::button_container())
            .with_child(Node::text(props.title.clone()).with_style(DemoStyles::button_text()))
    }
}
