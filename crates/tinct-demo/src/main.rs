//! Tinct Demo: headless host loop for the color animation engine.
//!
//! Starts one single-color lerp and one palette batch, then ticks the engine
//! at a fixed rate until both finish, logging every frame at `debug`.
//! `RUST_LOG=debug cargo run -p tinct-demo` shows the full trace.

mod config;

use std::sync::Arc;

use parking_lot::Mutex;
use tinct_anim::{AnimationEngine, EngineConfig};
use tinct_core::{BlendStyle, Color, ColorRng, blend, ops, to_hsl};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

/// Upper bound on ticks, in case the engine never drains.
const MAX_FRAMES: u32 = 100_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let demo = DemoConfig::default();
    let mut rng = demo.seed.map_or_else(ColorRng::from_time, ColorRng::new);
    tracing::info!(
        "demo: {} fps, {}s per animation, seed {:?}",
        demo.fps,
        demo.duration,
        demo.seed
    );

    let mut engine = AnimationEngine::new(EngineConfig::from_env());

    // Single color: black to a random bright color.
    let swatch = Arc::new(Mutex::new(Color::BLACK));
    let target = rng.random_bright_color();
    let single = {
        let swatch = Arc::clone(&swatch);
        engine.start_lerp(
            move |c: Color| *swatch.lock() = c,
            Color::BLACK,
            target,
            demo.duration,
        )
    };
    tracing::info!("{single}: black -> {target} ({})", to_hsl(target));

    // Palette: bright, pastel and dark colors faded to their inverses.
    let from = vec![
        rng.random_bright_color(),
        rng.random_pastel_color(),
        rng.random_dark_color(),
    ];
    let to: Vec<Color> = from.iter().map(|&c| ops::invert(c)).collect();
    let palette = Arc::new(Mutex::new(from.clone()));
    let batch = match engine.start_lerp_batch(Arc::clone(&palette), from, to, demo.duration) {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::error!("palette animation not started: {e}");
            None
        }
    };

    let dt = demo.frame_time();
    let mut frames = 0;
    while !engine.is_empty() && frames < MAX_FRAMES {
        let summary = engine.advance(dt);
        frames += 1;
        tracing::debug!("frame {frames}: swatch {}", *swatch.lock());
        for handle in &summary.completed {
            tracing::info!("{handle} finished after {frames} frame(s)");
        }
    }
    if !engine.is_empty() {
        tracing::warn!("stopping after {MAX_FRAMES} frames with {} active", engine.len());
        engine.cancel_all();
    }

    let final_swatch = *swatch.lock();
    tracing::info!("final swatch: {final_swatch}");
    if batch.is_some() {
        for (i, c) in palette.lock().iter().enumerate() {
            tracing::info!("palette[{i}]: {c}");
        }
    }

    let text = ops::select_contrasting(final_swatch, Color::BLACK, Color::WHITE);
    tracing::info!(
        "luminosity {:.3}, contrasting text {text}",
        ops::luminosity(final_swatch)
    );

    let other = rng.random_pastel_color();
    tracing::info!(
        "vs {other}: similar hue {}, distance {:.3}",
        ops::is_similar(final_swatch, other),
        ops::how_similar(final_swatch, other)
    );
    for style in BlendStyle::ALL {
        tracing::info!("{:>10}: {}", style.label(), blend(final_swatch, other, style));
    }
}
