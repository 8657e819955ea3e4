//! Frame driver
//!
//! [`Game`] owns the session and runs one frame at a time: read input, tick
//! the simulation, turn events into sound, run any blocking banner the phase
//! calls for, draw, present, pace.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundCue};
use crate::banner::Banner;
use crate::input::InputSource;
use crate::renderer::{Renderer, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Blocking delay between frames
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately, tallying what would have been slept
#[derive(Debug, Default)]
pub struct NoPacer {
    total: Duration,
}

impl NoPacer {
    pub fn total(&self) -> Duration {
        self.total
    }
}

impl Pacer for NoPacer {
    fn pause(&mut self, duration: Duration) {
        self.total += duration;
    }
}

/// Keeps banner sparks off the debris stream
const BANNER_RNG_STREAM: u64 = 0x0ba2_2e75;

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    /// Presentation-only randomness (banner sparks)
    rng: Pcg32,
    frame_delay: Duration,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let state = GameState::with_options(seed, settings.sim_options());
        let frame_delay = Duration::from_secs_f32(settings.frame_time());
        log::info!(
            "New game: seed {seed}, quality {}, debris {:?}",
            settings.quality.as_str(),
            settings.debris_style
        );
        Self {
            state,
            settings,
            rng: Pcg32::seed_from_u64(seed ^ BANNER_RNG_STREAM),
            frame_delay,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Ready cue and the READY? banner
    pub fn opening<R, A, P>(&mut self, renderer: &mut R, audio: &mut A, pacer: &mut P)
    where
        R: Renderer + ?Sized,
        A: AudioSink + ?Sized,
        P: Pacer + ?Sized,
    {
        audio.play(SoundCue::Ready);
        if self.settings.banners {
            Banner::ready().play(renderer, pacer, &mut self.rng);
        }
    }

    /// Run one frame. Returns `false` once the session has ended.
    pub fn frame<R, A, I, P>(
        &mut self,
        renderer: &mut R,
        audio: &mut A,
        input: &mut I,
        pacer: &mut P,
    ) -> bool
    where
        R: Renderer + ?Sized,
        A: AudioSink + ?Sized,
        I: InputSource + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state.is_over() {
            return false;
        }
        if input.quit_requested() {
            log::info!("Quit requested at frame {}", self.state.frame);
            return false;
        }

        input.observe(&self.state);
        let tick_input = input.tick_input();
        tick(&mut self.state, &tick_input, self.settings.frame_time());

        for event in self.state.drain_events() {
            log_event(&event);
            if let Some(cue) = SoundCue::for_event(&event) {
                audio.play(cue);
            }
        }

        match self.state.phase {
            GamePhase::LevelCleared => {
                self.banner(Banner::level_done(), renderer, pacer);
                self.state.advance_level();
            }
            GamePhase::GameOver => {
                self.banner(Banner::game_over(), renderer, pacer);
                audio.play(SoundCue::LoseBall);
            }
            GamePhase::Playing => {}
        }

        draw_scene(renderer, &self.state);
        renderer.present();
        pacer.pause(self.frame_delay);

        !self.state.is_over()
    }

    /// Opening plus frames until the game ends, input quits or `max_frames`
    /// is reached. Returns the final score.
    pub fn run<R, A, I, P>(
        &mut self,
        renderer: &mut R,
        audio: &mut A,
        input: &mut I,
        pacer: &mut P,
    ) -> u64
    where
        R: Renderer + ?Sized,
        A: AudioSink + ?Sized,
        I: InputSource + ?Sized,
        P: Pacer + ?Sized,
    {
        self.opening(renderer, audio, pacer);
        let limit = self.settings.max_frames;
        let mut frames = 0u64;
        while limit.is_none_or(|max| frames < max) {
            if !self.frame(renderer, audio, input, pacer) {
                break;
            }
            frames += 1;
        }
        log::info!(
            "Session over after {frames} frames: score {}, level {}",
            self.state.score,
            self.state.level
        );
        self.state.score
    }

    fn banner<R, P>(&mut self, banner: Banner, renderer: &mut R, pacer: &mut P)
    where
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.settings.banners {
            banner.play(renderer, pacer, &mut self.rng);
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::BrickDropped { pos } => log::debug!("Brick dropped to {pos}"),
        GameEvent::PaddleHit | GameEvent::BrickDestroyed { .. } => {}
        _ => log::trace!("{event:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::input::Scripted;
    use crate::renderer::ShapeBatch;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        cues: Vec<SoundCue>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }
    }

    fn quiet_settings() -> Settings {
        Settings {
            seed: Some(11),
            brick_fall: false,
            ..Settings::default()
        }
    }

    struct Rig {
        game: Game,
        batch: ShapeBatch,
        audio: Recorder,
        input: Scripted,
        pacer: NoPacer,
    }

    impl Rig {
        fn new(settings: Settings) -> Self {
            Self {
                game: Game::new(settings),
                batch: ShapeBatch::new(),
                audio: Recorder::default(),
                input: Scripted::new(Vec::new()),
                pacer: NoPacer::default(),
            }
        }

        fn frame(&mut self) -> bool {
            self.game.frame(
                &mut self.batch,
                &mut self.audio,
                &mut self.input,
                &mut self.pacer,
            )
        }
    }

    #[test]
    fn test_opening_plays_ready_and_banner() {
        let mut rig = Rig::new(quiet_settings());
        rig.game
            .opening(&mut rig.batch, &mut rig.audio, &mut rig.pacer);
        assert_eq!(rig.audio.cues, vec![SoundCue::Ready]);
        assert_eq!(rig.batch.frames_presented(), 180);
    }

    #[test]
    fn test_opening_without_banners() {
        let mut rig = Rig::new(Settings {
            banners: false,
            ..quiet_settings()
        });
        rig.game
            .opening(&mut rig.batch, &mut rig.audio, &mut rig.pacer);
        assert_eq!(rig.audio.cues, vec![SoundCue::Ready]);
        assert_eq!(rig.batch.frames_presented(), 0);
    }

    #[test]
    fn test_frame_draws_and_paces() {
        let mut rig = Rig::new(quiet_settings());
        assert!(rig.frame());
        assert_eq!(rig.batch.frames_presented(), 1);
        assert_eq!(rig.batch.texts()[0].text, "Score: 0 | Balls: 3 | Level: 1");
        assert_eq!(rig.pacer.total(), Duration::from_secs_f32(1.0 / 60.0));
        assert_eq!(rig.game.state().frame, 1);
    }

    #[test]
    fn test_clearing_last_brick_wins_and_advances() {
        let mut rig = Rig::new(quiet_settings());
        {
            let state = &mut rig.game.state;
            state.bricks.truncate(1);
            let brick = state.bricks[0].bounds();
            state.balls[0].pos = (brick.min + brick.max) / 2.0 + Vec2::new(0.0, 12.0);
            state.balls[0].vel = Vec2::new(0.0, -4.0);
        }

        assert!(rig.frame());

        assert!(rig.audio.cues.contains(&SoundCue::Score));
        assert!(rig.audio.cues.contains(&SoundCue::Win));
        let state = rig.game.state();
        assert_eq!(state.level, 2);
        assert_eq!(state.bricks.len(), 4 * BRICK_COLUMNS);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, SCORE_PER_BRICK);
        // LEVEL DONE! banner plus the frame itself
        assert_eq!(rig.batch.frames_presented(), 121);
    }

    #[test]
    fn test_lost_ball_plays_lose_cue() {
        let mut rig = Rig::new(quiet_settings());
        rig.game.state.balls[0].pos = Vec2::new(50.0, FIELD_HEIGHT + 20.0);
        rig.game.state.balls[0].vel = Vec2::new(0.0, 4.0);

        assert!(rig.frame());
        assert_eq!(rig.audio.cues, vec![SoundCue::LoseBall]);
        assert_eq!(rig.game.state().lives, START_LIVES - 1);
        assert_eq!(rig.game.state().balls.len(), 1);
    }

    #[test]
    fn test_game_over_ends_session() {
        let mut rig = Rig::new(quiet_settings());
        rig.game.state.lives = 0;
        rig.game.state.balls[0].pos = Vec2::new(50.0, FIELD_HEIGHT + 20.0);
        rig.game.state.balls[0].vel = Vec2::new(0.0, 4.0);

        assert!(!rig.frame());
        assert!(rig.game.is_over());
        assert_eq!(rig.audio.cues, vec![SoundCue::LoseBall, SoundCue::LoseBall]);
        // YOU LOSE! banner plus the final frame
        assert_eq!(rig.batch.frames_presented(), 151);
        assert!(!rig.frame());
        assert_eq!(rig.batch.frames_presented(), 151);
    }

    #[test]
    fn test_quit_stops_before_ticking() {
        let mut rig = Rig::new(quiet_settings());
        rig.input = Scripted::new(Vec::new()).quit_after(2);
        assert!(rig.frame());
        assert!(rig.frame());
        assert!(!rig.frame());
        assert_eq!(rig.game.state().frame, 2);
    }

    #[test]
    fn test_run_honours_frame_limit() {
        let mut rig = Rig::new(Settings {
            banners: false,
            max_frames: Some(30),
            ..quiet_settings()
        });
        let score = rig
            .game
            .run(&mut rig.batch, &mut rig.audio, &mut rig.input, &mut rig.pacer);
        assert_eq!(rig.game.state().frame, 30);
        assert_eq!(score, rig.game.state().score);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Rig::new(quiet_settings());
        let mut b = Rig::new(quiet_settings());
        for _ in 0..300 {
            a.frame();
            b.frame();
        }
        assert_eq!(a.game.state().score, b.game.state().score);
        assert_eq!(a.game.state().bricks.len(), b.game.state().bricks.len());
        assert_eq!(a.audio.cues, b.audio.cues);
    }
}
