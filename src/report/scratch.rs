//! Scoped temporary image file
//!
//! The plot is rasterized to a temporary PNG before it is embedded. The file
//! lives exactly as long as the guard; it is removed on drop, so every exit
//! path of report assembly releases it. Removal errors are not reported.

use crate::error::Result;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

const PREFIX: &str = "circle-points-";
const SUFFIX: &str = ".png";

pub struct ScratchImage {
    file: NamedTempFile,
}

impl ScratchImage {
    /// Create an empty temporary `.png` file
    pub fn new() -> Result<Self> {
        let file = Builder::new().prefix(PREFIX).suffix(SUFFIX).tempfile()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the file now, ignoring failures
    pub fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            debug!("Failed to remove temporary image {}: {}", path.display(), e);
        }
    }
}
