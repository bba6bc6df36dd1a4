//! View composition: styles, the render tree, and the demo screen.

mod node;
mod reanimated;
mod style;

pub use node::{Callback, Node, NodeKind};
pub use reanimated::{ReanimatedView, keys};
pub use style::{Align, Color, DemoStyles, FontWeight, Insets, Style};
