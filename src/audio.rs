//! Sound cues and the clip player
//!
//! The simulation never plays audio itself; the frame driver maps
//! [`GameEvent`]s to [`SoundCue`]s and hands them to an [`AudioSink`].

use crate::assets::ClipBank;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types, one per clip file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Opening READY? banner
    Ready,
    /// Ball hits paddle
    Hit,
    /// Brick destroyed
    Score,
    /// Ball fell out of the field
    LoseBall,
    /// Level cleared
    Win,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Score,
        SoundCue::LoseBall,
        SoundCue::Hit,
        SoundCue::Ready,
        SoundCue::Win,
    ];

    /// Clip file name under `wav/`
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Ready => "ready3.wav",
            SoundCue::Hit => "hit_ball.wav",
            SoundCue::Score => "score.wav",
            SoundCue::LoseBall => "lose_ball.wav",
            SoundCue::Win => "win.wav",
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(SoundCue::Hit),
            GameEvent::BrickDestroyed { .. } => Some(SoundCue::Score),
            GameEvent::BallLost => Some(SoundCue::LoseBall),
            GameEvent::LevelCleared { .. } => Some(SoundCue::Win),
            GameEvent::GameOver { .. }
            | GameEvent::LifeSpent { .. }
            | GameEvent::BrickDropped { .. }
            | GameEvent::BrickFellOut { .. } => None,
        }
    }
}

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Plays cues from the loaded clip bank
///
/// No output backend is linked in, so playback is reported through the log.
pub struct ClipPlayer {
    clips: ClipBank,
    volume: f32,
    played: u64,
}

impl ClipPlayer {
    pub fn new(clips: ClipBank, settings: &Settings) -> Self {
        Self {
            clips,
            volume: settings.effective_volume(),
            played: 0,
        }
    }

    /// Set output volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Cues actually played (muted cues don't count)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for ClipPlayer {
    fn play(&mut self, cue: SoundCue) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(clip) = self.clips.get(cue) else {
            return;
        };
        self.played += 1;
        log::debug!(
            "play {} ({} bytes) at volume {:.2}",
            cue.file_name(),
            clip.len(),
            self.volume
        );
    }
}

/// Sink that drops every cue
#[derive(Debug, Default)]
pub struct Silence;

impl AudioSink for Silence {
    fn play(&mut self, _cue: SoundCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Clip;
    use crate::Color;
    use glam::Vec2;

    fn bank() -> ClipBank {
        ClipBank::from_clips(
            SoundCue::ALL
                .iter()
                .map(|&cue| Clip::new(cue, b"RIFF\0\0\0\0WAVE".to_vec()))
                .collect(),
        )
    }

    #[test]
    fn test_event_cues() {
        assert_eq!(SoundCue::for_event(&GameEvent::PaddleHit), Some(SoundCue::Hit));
        assert_eq!(
            SoundCue::for_event(&GameEvent::BrickDestroyed {
                pos: Vec2::ZERO,
                color: Color::RED
            }),
            Some(SoundCue::Score)
        );
        assert_eq!(SoundCue::for_event(&GameEvent::BallLost), Some(SoundCue::LoseBall));
        assert_eq!(
            SoundCue::for_event(&GameEvent::LevelCleared { level: 1 }),
            Some(SoundCue::Win)
        );
        assert_eq!(
            SoundCue::for_event(&GameEvent::BrickDropped { pos: Vec2::ZERO }),
            None
        );
    }

    #[test]
    fn test_clip_player_counts_and_mutes() {
        let mut player = ClipPlayer::new(bank(), &Settings::default());
        player.play(SoundCue::Hit);
        player.play(SoundCue::Win);
        assert_eq!(player.played(), 2);

        player.set_volume(0.0);
        player.play(SoundCue::Hit);
        assert_eq!(player.played(), 2);
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = SoundCue::ALL.iter().map(|c| c.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
