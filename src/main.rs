//! Breakout Remix entry point
//!
//! Loads settings and assets, then runs the game with the autopilot at the
//! paddle and the headless shape batcher as the display.

use std::path::PathBuf;

use anyhow::Context;

use breakout_remix::audio::ClipPlayer;
use breakout_remix::game::{Game, ThreadPacer};
use breakout_remix::input::Autopilot;
use breakout_remix::renderer::ShapeBatch;
use breakout_remix::{Assets, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Breakout Remix starting...");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load_from(&PathBuf::from(path)),
        None => Settings::load(),
    };

    let assets = Assets::load(&settings.asset_dir).with_context(|| {
        format!(
            "could not load game assets from {}",
            settings.asset_dir.display()
        )
    })?;

    let mut audio = ClipPlayer::new(assets.clips, &settings);
    let mut renderer = ShapeBatch::new();
    let mut input = Autopilot::new();
    let mut pacer = ThreadPacer;

    let mut game = Game::new(settings);
    let score = game.run(&mut renderer, &mut audio, &mut input, &mut pacer);

    log::info!(
        "Final score {score} ({} frames drawn, {} clips played)",
        renderer.frames_presented(),
        audio.played()
    );
    Ok(())
}
