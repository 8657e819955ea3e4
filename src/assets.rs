//! Startup asset loading
//!
//! The font and the five sound clips are read once from fixed paths under the
//! asset directory. Any failure is fatal to the caller.

use std::error::Error;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audio::SoundCue;

/// Font path under the asset directory
pub const FONT_PATH: &str = "font/arial.ttf";
/// Clip directory under the asset directory
pub const WAV_DIR: &str = "wav";

/// Which kind of asset failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Font,
    Sound,
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Font => Display::fmt("font", f),
            AssetKind::Sound => Display::fmt("sound effect", f),
        }
    }
}

#[derive(Debug)]
pub enum AssetError {
    /// File could not be read
    Io {
        kind: AssetKind,
        path: PathBuf,
        source: io::Error,
    },
    /// File read but is not a usable TrueType face
    InvalidFont {
        path: PathBuf,
        source: ttf_parser::FaceParsingError,
    },
    /// File read but is not RIFF/WAVE
    InvalidClip { path: PathBuf },
}

impl AssetError {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetError::Io { kind, .. } => *kind,
            AssetError::InvalidFont { .. } => AssetKind::Font,
            AssetError::InvalidClip { .. } => AssetKind::Sound,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            AssetError::Io { path, .. }
            | AssetError::InvalidFont { path, .. }
            | AssetError::InvalidClip { path } => path,
        }
    }
}

impl Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io { kind, path, source } => {
                write!(f, "failed to load {kind} {}: {source}", path.display())
            }
            AssetError::InvalidFont { path, source } => {
                write!(f, "failed to load font {}: {source}", path.display())
            }
            AssetError::InvalidClip { path } => {
                write!(
                    f,
                    "failed to load sound effect {}: not a RIFF/WAVE file",
                    path.display()
                )
            }
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::InvalidFont { source, .. } => Some(source),
            AssetError::InvalidClip { .. } => None,
        }
    }
}

/// A validated TrueType font
#[derive(Debug, Clone)]
pub struct Font {
    pub data: Vec<u8>,
    pub glyph_count: u16,
    pub units_per_em: u16,
}

impl Font {
    pub fn parse(path: &Path, data: Vec<u8>) -> Result<Self, AssetError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|source| AssetError::InvalidFont {
            path: path.to_path_buf(),
            source,
        })?;
        let glyph_count = face.number_of_glyphs();
        let units_per_em = face.units_per_em();
        Ok(Self {
            data,
            glyph_count,
            units_per_em,
        })
    }
}

/// Raw clip bytes for one cue
#[derive(Debug, Clone)]
pub struct Clip {
    pub cue: SoundCue,
    pub data: Vec<u8>,
}

impl Clip {
    pub fn new(cue: SoundCue, data: Vec<u8>) -> Self {
        Self { cue, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// RIFF container with a WAVE form type
    pub fn is_wave(data: &[u8]) -> bool {
        data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE"
    }
}

/// All loaded clips
#[derive(Debug, Clone, Default)]
pub struct ClipBank {
    clips: Vec<Clip>,
}

impl ClipBank {
    pub fn from_clips(clips: Vec<Clip>) -> Self {
        Self { clips }
    }

    pub fn get(&self, cue: SoundCue) -> Option<&Clip> {
        self.clips.iter().find(|c| c.cue == cue)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Load every cue's clip from `wav_dir`
    pub fn load(wav_dir: &Path) -> Result<Self, AssetError> {
        let mut clips = Vec::with_capacity(SoundCue::ALL.len());
        for cue in SoundCue::ALL {
            let path = wav_dir.join(cue.file_name());
            let data = read(AssetKind::Sound, &path)?;
            if !Clip::is_wave(&data) {
                return Err(AssetError::InvalidClip { path });
            }
            clips.push(Clip::new(cue, data));
        }
        Ok(Self { clips })
    }
}

/// Everything loaded at startup
#[derive(Debug, Clone)]
pub struct Assets {
    pub font: Font,
    pub clips: ClipBank,
}

impl Assets {
    /// Load the font, then the clips, from `dir`
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let font_path = dir.join(FONT_PATH);
        let font = Font::parse(&font_path, read(AssetKind::Font, &font_path)?)?;
        log::info!(
            "Loaded font {} ({} glyphs)",
            font_path.display(),
            font.glyph_count
        );

        let clips = ClipBank::load(&dir.join(WAV_DIR))?;
        log::info!("Loaded {} sound effects", clips.len());

        Ok(Self { font, clips })
    }
}

fn read(kind: AssetKind, path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| AssetError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
