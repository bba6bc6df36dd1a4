//! Components and their lifecycle.
//!
//! A [`Component`] turns props into a render tree. A [`ComponentInstance`]
//! is one placement of a component in the UI: it owns the component value and
//! its current props and tracks whether it is mounted. Mounting and unmounting
//! are explicit calls, distinct from rendering, so that lifecycle hooks run
//! once per mount no matter how often the instance re-renders.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_motion::component::{Button, ButtonProps, ComponentInstance, with_logging};
//!
//! let props = ButtonProps::new("Click Me", Arc::new(|| println!("pressed")));
//! let mut button = ComponentInstance::new(with_logging(Button), props);
//!
//! button.mount(); // logs "CustomButton Mounted"
//! let tree = button.render();
//! assert!(tree.press("Click Me"));
//! ```

mod button;
mod logging;

pub use button::{Button, ButtonProps};
pub use logging::{ComponentMountEvent, FALLBACK_LABEL, WithLogging, with_logging};

use crate::view::Node;

/// Something that renders props into a tree of nodes.
pub trait Component: Send + Sync {
    /// The props accepted by [`render`](Self::render).
    type Props: Clone + Send + Sync + 'static;

    /// The component's declared name, if it has one.
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Produce the render tree for `props`.
    fn render(&self, props: &Self::Props) -> Node;

    /// Called when an instance of this component is attached to the tree.
    fn mounted(&self) {}

    /// Called when an instance of this component is detached from the tree.
    fn unmounted(&self) {}
}

/// One mounted (or mountable) placement of a component.
pub struct ComponentInstance<C: Component> {
    component: C,
    props: C::Props,
    mounted: bool,
    render_count: u64,
}

impl<C: Component> ComponentInstance<C> {
    /// Create an unmounted instance.
    pub fn new(component: C, props: C::Props) -> Self {
        Self {
            component,
            props,
            mounted: false,
            render_count: 0,
        }
    }

    /// The wrapped component.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// The current props.
    pub fn props(&self) -> &C::Props {
        &self.props
    }

    /// Replace the props. The next render uses them.
    pub fn set_props(&mut self, props: C::Props) {
        self.props = props;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of renders since the instance was created.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Attach the instance. Returns `false` if it was already mounted.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.component.mounted();
        true
    }

    /// Detach the instance. Returns `false` if it was not mounted.
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.component.unmounted();
        true
    }

    /// Render the component with the current props.
    pub fn render(&mut self) -> Node {
        self.render_count += 1;
        self.component.render(&self.props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter {
        mounts: AtomicUsize,
        unmounts: AtomicUsize,
    }

    impl Component for Counter {
        type Props = u32;

        fn render(&self, props: &u32) -> Node {
            Node::text(props.to_string())
        }

        fn mounted(&self) {
            self.mounts.fetch_add(1, Ordering::SeqCst);
        }

        fn unmounted(&self) {
            self.unmounts.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_lifecycle_hooks_run_once_per_transition() {
        let mut instance = ComponentInstance::new(Counter::default(), 1);

        assert!(instance.mount());
        assert!(!instance.mount());
        assert!(instance.is_mounted());
        assert!(instance.unmount());
        assert!(!instance.unmount());

        assert_eq!(instance.component().mounts.load(Ordering::SeqCst), 1);
        assert_eq!(instance.component().unmounts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_render_uses_latest_props() {
        let mut instance = ComponentInstance::new(Counter::default(), 1);
        assert_eq!(instance.render().text_content(), "1");

        instance.set_props(2);
        assert_eq!(instance.props(), &2);
        assert_eq!(instance.render().text_content(), "2");
        assert_eq!(instance.render_count(), 2);
        assert_eq!(instance.component().mounts.load(Ordering::SeqCst), 0);
    }
}
