//! Block-letter banner animations
//!
//! Each character of the message sits on a white square. Banners are blocking:
//! [`Banner::play`] draws and presents every frame itself and pauses between
//! frames, so gameplay is frozen while one runs.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::Pacer;
use crate::renderer::{Renderer, colors};

/// How the blocks move during the main phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerMotion {
    /// Start on the origin row and sink 1 px per frame
    Drift,
    /// Start above the field and fall at `speed` px per frame until the origin row
    DropIn { speed: f32 },
}

/// Layout and timing for a banner
#[derive(Debug, Clone, PartialEq)]
pub struct BannerStyle {
    pub block_size: f32,
    /// Gap between neighbouring blocks
    pub spacing: f32,
    /// Resting top-left corner of the first block
    pub origin: Vec2,
    pub glyph_size: f32,
    /// Glyph inset from the block corner
    pub glyph_offset: Vec2,
    /// Main phase length
    pub frames: u32,
    pub frame_delay: Duration,
    pub motion: BannerMotion,
    /// Fade-out phase length; zero skips it
    pub explode_frames: u32,
    /// Sparks thrown per block during the fade-out
    pub sparks_per_block: usize,
    /// Pause after the last frame
    pub hold: Duration,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            block_size: 30.0,
            spacing: 10.0,
            origin: Vec2::new(250.0, 250.0),
            glyph_size: 20.0,
            glyph_offset: Vec2::splat(5.0),
            frames: 120,
            frame_delay: Duration::from_millis(10),
            motion: BannerMotion::Drift,
            explode_frames: 0,
            sparks_per_block: 0,
            hold: Duration::ZERO,
        }
    }
}

impl BannerStyle {
    /// Opening banner: drop in, then burst
    pub fn ready() -> Self {
        Self {
            motion: BannerMotion::DropIn { speed: 3.0 },
            explode_frames: 60,
            sparks_per_block: 30,
            ..Self::default()
        }
    }

    /// Level clear: drift, then a short breather before the next level
    pub fn level_done() -> Self {
        Self {
            hold: Duration::from_secs(3),
            ..Self::default()
        }
    }

    pub fn game_over() -> Self {
        Self {
            spacing: 20.0,
            glyph_size: 25.0,
            glyph_offset: Vec2::splat(6.0),
            frames: 150,
            hold: Duration::from_millis(100),
            ..Self::default()
        }
    }

    /// Top edge of every block after `frame + 1` moves
    fn block_y(&self, frame: u32) -> f32 {
        let moves = (frame + 1) as f32;
        match self.motion {
            BannerMotion::Drift => self.origin.y + moves,
            BannerMotion::DropIn { speed } => {
                let start = -self.block_size;
                if speed <= 0.0 {
                    return start;
                }
                // Blocks keep stepping while still above the origin row
                let steps_needed = ((self.origin.y - start) / speed).ceil().max(0.0);
                start + speed * moves.min(steps_needed)
            }
        }
    }
}

/// One lettered block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerBlock {
    pub pos: Vec2,
    pub glyph: char,
}

/// A message plus how to animate it
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub style: BannerStyle,
}

impl Banner {
    pub fn new(text: impl Into<String>, style: BannerStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn ready() -> Self {
        Self::new("READY?", BannerStyle::ready())
    }

    pub fn level_done() -> Self {
        Self::new("LEVEL DONE!", BannerStyle::level_done())
    }

    pub fn game_over() -> Self {
        Self::new("YOU LOSE!", BannerStyle::game_over())
    }

    /// Frames presented by [`Banner::play`]
    pub fn total_frames(&self) -> u32 {
        self.style.frames + self.style.explode_frames
    }

    /// Block layout during main-phase `frame`
    pub fn blocks_at(&self, frame: u32) -> Vec<BannerBlock> {
        let style = &self.style;
        let y = style.block_y(frame);
        self.text
            .chars()
            .enumerate()
            .map(|(i, glyph)| BannerBlock {
                pos: Vec2::new(
                    style.origin.x + i as f32 * (style.block_size + style.spacing),
                    y,
                ),
                glyph,
            })
            .collect()
    }

    /// Alpha for fade-out `frame`
    pub fn fade_alpha(&self, frame: u32) -> u8 {
        let total = self.style.explode_frames.max(1);
        let frame = frame.min(total);
        (255 - frame * 255 / total) as u8
    }

    /// Run the whole animation
    pub fn play<R, P, G>(&self, renderer: &mut R, pacer: &mut P, rng: &mut G)
    where
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
        G: Rng,
    {
        log::debug!("Banner {:?} ({} frames)", self.text, self.total_frames());
        let style = &self.style;
        let block = Vec2::splat(style.block_size);

        for frame in 0..style.frames {
            renderer.clear(colors::BACKGROUND);
            for b in self.blocks_at(frame) {
                renderer.fill_rect(b.pos, block, colors::BANNER_BLOCK, 0.0);
                if !b.glyph.is_whitespace() {
                    renderer.draw_text(
                        b.glyph.encode_utf8(&mut [0; 4]),
                        b.pos + style.glyph_offset,
                        style.glyph_size,
                        colors::BANNER_GLYPH,
                    );
                }
            }
            renderer.present();
            pacer.pause(style.frame_delay);
        }

        if style.explode_frames > 0 {
            let rest = self.blocks_at(style.frames.saturating_sub(1));
            let center = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);

            for frame in 0..style.explode_frames {
                let alpha = self.fade_alpha(frame);
                let spark = colors::BANNER_SPARK.with_alpha(alpha);
                let reach = frame as f32 / style.explode_frames as f32 * 12.0;

                renderer.clear(colors::BACKGROUND);
                for b in &rest {
                    renderer.fill_rect(b.pos, block, colors::BANNER_BLOCK.with_alpha(alpha), 0.0);
                    for _ in 0..style.sparks_per_block {
                        let angle: f32 = rng.random_range(0.0..TAU);
                        renderer.fill_circle(center + Vec2::from_angle(angle) * reach, 2.0, spark);
                    }
                }
                renderer.present();
                pacer.pause(style.frame_delay);
            }
        }

        if !style.hold.is_zero() {
            pacer.pause(style.hold);
        }
    }
}
