//! The mount-logging decorator.
//!
//! [`with_logging`] wraps any component in [`WithLogging`], which renders
//! exactly like the wrapped component and takes the same props. Its only
//! addition is a "Mounted" log line, emitted once each time the instance is
//! mounted. Re-renders never log, whatever props they carry.
//!
//! The once-per-mount guarantee comes from an explicit mounted flag owned by
//! the wrapper, so it holds even if a host calls the mount hook repeatedly.

use std::sync::Arc;

use horizon_motion_core::logging::targets;
use horizon_motion_core::{Property, Signal};

use super::Component;
use crate::view::Node;

/// Label used when the wrapped component declares no name.
pub const FALLBACK_LABEL: &str = "Component";

/// Emitted once per mount of a decorated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMountEvent {
    pub component_label: String,
}

/// A component decorated with mount logging. Build one with [`with_logging`].
pub struct WithLogging<C> {
    inner: C,
    mounted: Property<bool>,
    mount_events: Arc<Signal<ComponentMountEvent>>,
}

/// Wrap `component` so that each mount of an instance is logged once.
pub fn with_logging<C: Component>(component: C) -> WithLogging<C> {
    WithLogging {
        inner: component,
        mounted: Property::new(false),
        mount_events: Arc::new(Signal::new()),
    }
}

impl<C: Component> WithLogging<C> {
    /// The wrapped component.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// The label written to the log: the declared name, or [`FALLBACK_LABEL`].
    pub fn label(&self) -> &str {
        self.inner.display_name().unwrap_or(FALLBACK_LABEL)
    }

    /// Whether the decorated instance is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Signal emitted alongside each mount log line.
    pub fn mount_events(&self) -> &Signal<ComponentMountEvent> {
        &self.mount_events
    }
}

/// Clones get their own mounted flag but report to the same mount signal.
impl<C: Component + Clone> Clone for WithLogging<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            mounted: Property::new(false),
            mount_events: self.mount_events.clone(),
        }
    }
}

impl<C: Component> Component for WithLogging<C> {
    type Props = C::Props;

    fn display_name(&self) -> Option<&str> {
        self.inner.display_name()
    }

    fn render(&self, props: &Self::Props) -> Node {
        self.inner.render(props)
    }

    fn mounted(&self) {
        if !self.mounted.set(true) {
            return;
        }
        let label = self.label().to_string();
        tracing::info!(target: targets::COMPONENT, "{label} Mounted");
        self.mount_events.emit(ComponentMountEvent {
            component_label: label,
        });
        self.inner.mounted();
    }

    fn unmounted(&self) {
        if self.mounted.set(false) {
            self.inner.unmounted();
        }
    }
}
