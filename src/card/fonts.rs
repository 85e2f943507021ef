//! Label fonts, read from disk once and shared afterwards.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusttype::Font;
use tokio::sync::RwLock;
use tracing::debug;

use crate::constants::{CAPTION_FONT_FILE, JOB_TITLE_FONT_FILE, NAME_FONT_FILE};
use crate::error::CardError;

/// The three fonts a card is drawn with.
#[derive(Clone)]
pub struct CardFonts {
    /// Font for the user's name.
    pub name: Arc<Font<'static>>,
    /// Font for the job title.
    pub job_title: Arc<Font<'static>>,
    /// Font for the caption.
    pub caption: Arc<Font<'static>>,
}

impl std::fmt::Debug for CardFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardFonts").finish_non_exhaustive()
    }
}

/// Parsed fonts keyed by their path on disk.
pub struct FontCache {
    dir: PathBuf,
    fonts: RwLock<HashMap<PathBuf, Arc<Font<'static>>>>,
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

impl FontCache {
    /// A cache resolving font file names against `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fonts: RwLock::new(HashMap::new()),
        }
    }

    /// The directory font files are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the font stored in `file_name`, reading and parsing it on first use.
    pub async fn load(&self, file_name: &str) -> Result<Arc<Font<'static>>, CardError> {
        let path = self.dir.join(file_name);
        if let Some(font) = self.fonts.read().await.get(&path) {
            return Ok(font.clone());
        }

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|err| CardError::Font(format!("failed to read {}: {err}", path.display())))?;
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| CardError::Font(format!("failed to parse {}", path.display())))?;
        debug!("Loaded font {}", path.display());

        // another request may have loaded it meanwhile, keep whichever landed first
        let mut fonts = self.fonts.write().await;
        Ok(fonts.entry(path).or_insert_with(|| Arc::new(font)).clone())
    }

    /// Loads all three card fonts.
    pub async fn card_fonts(&self) -> Result<CardFonts, CardError> {
        Ok(CardFonts {
            name: self.load(NAME_FONT_FILE).await?,
            job_title: self.load(JOB_TITLE_FONT_FILE).await?,
            caption: self.load(CAPTION_FONT_FILE).await?,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_font_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fonts"))
}
