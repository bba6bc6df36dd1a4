//! Horizon Motion Reanimated Example
//!
//! Mounts the demo screen headlessly, taps its three buttons and logs the
//! animated values frame by frame until both runs settle.
//!
//! Run with: cargo run -p horizon-motion --example reanimated [config.toml]
//!
//! Set `RUST_LOG=debug` to also see the driver and event loop.

use std::sync::Arc;
use std::time::Instant;

use horizon_motion::EventLoop;
use horizon_motion::animation::AnimationDriver;
use horizon_motion::config::MotionConfig;
use horizon_motion::view::{Node, ReanimatedView, keys};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MotionConfig::load(path)?,
        None => MotionConfig::default(),
    };

    let event_loop = EventLoop::new();
    let driver =
        AnimationDriver::for_event_loop(&event_loop).with_default_easing(config.animation.easing);
    let mut view = ReanimatedView::new(config.view.clone(), driver);
    view.mount();

    // Taps arrive as input tasks, dispatched before the next frame.
    let tree = Arc::new(view.render().ok_or("view failed to mount")?);
    for title in [
        config.view.click_label.clone(),
        config.view.fade_label.clone(),
        config.view.slide_label.clone(),
    ] {
        let tree = tree.clone();
        event_loop.post_task(move || {
            if !tree.press(&title) {
                tracing::warn!(%title, "no button with this title");
            }
        });
    }

    let interval = config.animation.frame_interval();
    let started = Instant::now();
    let mut frames = 0u64;
    while !event_loop.is_idle() {
        std::thread::sleep(interval);
        event_loop.pump();
        frames += 1;

        if view.is_dirty() {
            if let Some(tree) = view.render() {
                report(&tree);
            }
        }
    }

    tracing::info!(
        frames,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "animations settled"
    );
    view.unmount();
    Ok(())
}

fn report(tree: &Node) {
    let opacity = tree
        .find_by_key(keys::FADING_BOX)
        .and_then(Node::opacity)
        .unwrap_or_default();
    let offset = tree
        .find_by_key(keys::SLIDING_BOX)
        .and_then(Node::translate_y)
        .unwrap_or_default();
    tracing::info!("opacity {opacity:.3}  offset {offset:.1}");
}
