use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to load font '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to load font '{}': {reason}", path.display())]
    Parse { path: PathBuf, reason: &'static str },
    #[error("Invalid pixel size {0}")]
    InvalidSize(f32),
}

/// A parsed font face set to one pixel size.
pub struct TextContext {
    font: Font,
    px: f32,
}

impl TextContext {
    pub fn from_path(path: impl AsRef<Path>, px: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_owned(),
            source,
        })?;

        Self::from_bytes(&bytes, px).map_err(|e| match e {
            FontError::Parse { reason, .. } => FontError::Parse {
                path: path.to_owned(),
                reason,
            },
            e => e,
        })
    }

    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, FontError> {
        if !(px.is_finite() && px > 0.0) {
            return Err(FontError::InvalidSize(px));
        }

        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };

        let font = Font::from_bytes(bytes, settings).map_err(|reason| FontError::Parse {
            path: PathBuf::new(),
            reason,
        })?;

        Ok(Self { font, px })
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    pub fn glyph_count(&self) -> u16 {
        self.font.glyph_count()
    }

    /// Distance between two baselines at the context's size.
    pub fn line_height(&self) -> Option<f32> {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.new_line_size)
    }
}
