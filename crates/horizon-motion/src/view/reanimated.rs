//! The demo screen.
//!
//! [`ReanimatedView`] lays out a title, a mount-logging "Click Me" button, a
//! box whose opacity follows the fade cell, and a box whose vertical offset
//! follows the slide cell. Two buttons reset their cell and start a run on it.
//!
//! The cells exist only while the view is mounted. Press handlers in a
//! rendered tree hold weak references to them, so pressing a button from a
//! tree rendered before an unmount does nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use horizon_motion_core::Signal;
use horizon_motion_core::logging::targets;

use crate::animation::{AnimatedCell, AnimationDriver, RunHandle};
use crate::component::{
    Button, ButtonProps, Component, ComponentInstance, WithLogging, with_logging,
};
use crate::config::{RunSettings, ViewConfig};

use super::node::{Callback, Node};
use super::style::DemoStyles;

/// Keys of the animated nodes in the rendered tree.
pub mod keys {
    pub const CONTAINER: &str = "container";
    pub const TITLE: &str = "title";
    pub const FADING_BOX: &str = "fading-box";
    pub const SLIDING_BOX: &str = "sliding-box";
}

struct ViewCells {
    fade: Arc<AnimatedCell>,
    slide: Arc<AnimatedCell>,
}

/// The single demo screen.
pub struct ReanimatedView {
    config: ViewConfig,
    driver: AnimationDriver,
    cells: Option<ViewCells>,
    click_button: ComponentInstance<WithLogging<Button>>,
    button_pressed: Arc<Signal<()>>,
    dirty: Arc<AtomicBool>,
}

impl ReanimatedView {
    /// Create an unmounted view animating through `driver`.
    pub fn new(config: ViewConfig, driver: AnimationDriver) -> Self {
        let button_pressed = Arc::new(Signal::new());
        let pressed = button_pressed.clone();
        let on_press: Callback = Arc::new(move || {
            tracing::info!(target: targets::VIEW, "Button Pressed");
            pressed.emit(());
        });
        let click_button = ComponentInstance::new(
            with_logging(Button),
            ButtonProps::new(config.click_label.clone(), on_press),
        );

        Self {
            config,
            driver,
            cells: None,
            click_button,
            button_pressed,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.cells.is_some()
    }

    /// Signal emitted each time "Click Me" is pressed.
    pub fn button_pressed(&self) -> &Signal<()> {
        &self.button_pressed
    }

    /// The decorated "Click Me" button.
    pub fn click_button(&self) -> &WithLogging<Button> {
        self.click_button.component()
    }

    /// The opacity cell, while mounted.
    pub fn fade_cell(&self) -> Option<&Arc<AnimatedCell>> {
        self.cells.as_ref().map(|cells| &cells.fade)
    }

    /// The vertical offset cell, while mounted.
    pub fn slide_cell(&self) -> Option<&Arc<AnimatedCell>> {
        self.cells.as_ref().map(|cells| &cells.slide)
    }

    /// Whether an animated value changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Attach the view: create its cells and mount the decorated button.
    pub fn mount(&mut self) -> bool {
        if self.cells.is_some() {
            return false;
        }

        let fade = Arc::new(AnimatedCell::new("opacity", self.config.fade.from));
        let slide = Arc::new(AnimatedCell::new("translate-y", self.config.slide.from));
        for cell in [&fade, &slide] {
            let dirty = self.dirty.clone();
            cell.subscribe(move |_| dirty.store(true, Ordering::SeqCst));
        }
        self.cells = Some(ViewCells { fade, slide });
        self.click_button.mount();
        self.dirty.store(true, Ordering::SeqCst);

        tracing::debug!(target: targets::VIEW, "view mounted");
        true
    }

    /// Detach the view: stop its runs and drop its cells.
    pub fn unmount(&mut self) -> bool {
        let Some(cells) = self.cells.take() else {
            return false;
        };
        self.driver.stop(&cells.fade);
        self.driver.stop(&cells.slide);
        self.click_button.unmount();

        tracing::debug!(target: targets::VIEW, "view unmounted");
        true
    }

    /// Press handler of "Fade In": reset opacity and fade it in.
    pub fn fade_in(&self) -> Option<RunHandle> {
        let Some(cell) = self.fade_cell() else {
            tracing::warn!(target: targets::VIEW, "fade ignored: view is not mounted");
            return None;
        };
        Some(restart(&self.driver, cell, self.config.fade))
    }

    /// Press handler of "Start Animation": reset the offset and slide it.
    pub fn start_animation(&self) -> Option<RunHandle> {
        let Some(cell) = self.slide_cell() else {
            tracing::warn!(target: targets::VIEW, "slide ignored: view is not mounted");
            return None;
        };
        Some(restart(&self.driver, cell, self.config.slide))
    }

    /// Build the render tree from the layout and the cells' current values.
    ///
    /// Returns `None` while the view is not mounted.
    pub fn render(&mut self) -> Option<Node> {
        let cells = self.cells.as_ref()?;
        let opacity = cells.fade.value();
        let offset = cells.slide.value();
        let fade_press = trigger(&self.driver, &cells.fade, self.config.fade);
        let slide_press = trigger(&self.driver, &cells.slide, self.config.slide);
        self.dirty.store(false, Ordering::SeqCst);

        tracing::trace!(target: targets::VIEW, opacity, offset, "render");

        let tree = Node::view()
            .with_key(keys::CONTAINER)
            .with_style(DemoStyles::container())
            .with_children([
                Node::text(self.config.title.clone())
                    .with_key(keys::TITLE)
                    .with_style(DemoStyles::title()),
                self.click_button.render(),
                Node::animated_view()
                    .with_key(keys::FADING_BOX)
                    .with_style(DemoStyles::fading_box())
                    .with_opacity(opacity),
                Button.render(&ButtonProps::new(self.config.fade_label.clone(), fade_press)),
                Node::animated_view()
                    .with_key(keys::SLIDING_BOX)
                    .with_translate_y(offset)
                    .with_child(Node::view().with_style(DemoStyles::transition_box())),
                Button.render(&ButtonProps::new(self.config.slide_label.clone(), slide_press)),
            ]);
        Some(tree)
    }
}

impl Drop for ReanimatedView {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn restart(driver: &AnimationDriver, cell: &Arc<AnimatedCell>, run: RunSettings) -> RunHandle {
    cell.set_value(run.from);
    driver.start(cell, run.to, run.duration_ms)
}

fn trigger(driver: &AnimationDriver, cell: &Arc<AnimatedCell>, run: RunSettings) -> Callback {
    let driver = driver.clone();
    let cell: Weak<AnimatedCell> = Arc::downgrade(cell);
    Arc::new(move || match cell.upgrade() {
        Some(cell) => {
            restart(&driver, &cell, run);
        }
        None => {
            tracing::warn!(target: targets::VIEW, "press ignored: view is not mounted");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::CellState;
    use horizon_motion_core::EventLoop;
    use std::time::Duration;

    fn mounted_view() -> (EventLoop, ReanimatedView) {
        let event_loop = EventLoop::manual();
        let mut view = ReanimatedView::new(
            ViewConfig::default(),
            AnimationDriver::for_event_loop(&event_loop),
        );
        view.mount();
        (event_loop, view)
    }

    #[test]
    fn test_unmounted_view_renders_nothing() {
        let event_loop = EventLoop::manual();
        let mut view = ReanimatedView::new(
            ViewConfig::default(),
            AnimationDriver::for_event_loop(&event_loop),
        );
        assert!(view.render().is_none());
        assert!(view.fade_in().is_none());
        assert!(view.start_animation().is_none());
    }

    #[test]
    fn test_layout() {
        let (_event_loop, mut view) = mounted_view();
        let tree = view.render().unwrap();

        assert_eq!(
            tree.find_by_key(keys::TITLE).map(Node::text_content),
            Some("Chenlee Ebdao Reanimated App".to_string())
        );
        for title in ["Click Me", "Fade In", "Start Animation"] {
            assert!(tree.find_touchable(title).is_some(), "missing {title}");
        }
        assert_eq!(tree.find_by_key(keys::FADING_BOX).and_then(Node::opacity), Some(0.0));
        assert_eq!(
            tree.find_by_key(keys::SLIDING_BOX).and_then(Node::translate_y),
            Some(0.0)
        );
        assert_eq!(tree.children().len(), 6);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let (_event_loop, mut view) = mounted_view();
        assert!(!view.mount());
        assert!(view.click_button().is_mounted());
        assert!(view.unmount());
        assert!(!view.unmount());
        assert!(!view.click_button().is_mounted());
        assert!(view.fade_cell().is_none());
    }

    #[test]
    fn test_fade_in_resets_and_runs() {
        let (event_loop, view) = mounted_view();
        let cell = view.fade_cell().unwrap().clone();
        cell.set_value(0.8);

        let handle = view.fade_in().unwrap();
        assert!(handle.is_active());
        assert_eq!(cell.value(), 0.0);
        assert_eq!(cell.target(), 1.0);

        event_loop.advance(Duration::from_millis(2000)).unwrap();
        assert_eq!(cell.value(), 1.0);
        assert_eq!(cell.state(), CellState::Settled);
    }

    #[test]
    fn test_dirty_flag_tracks_cell_updates() {
        let (event_loop, mut view) = mounted_view();
        view.render();
        assert!(!view.is_dirty());

        view.start_animation();
        event_loop.advance(Duration::from_millis(16)).unwrap();
        assert!(view.is_dirty());
        view.render();
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_stale_tree_press_after_unmount_is_ignored() {
        let (event_loop, mut view) = mounted_view();
        let tree = view.render().unwrap();
        view.unmount();

        assert!(tree.press("Fade In"));
        assert!(event_loop.is_idle());
    }
}
