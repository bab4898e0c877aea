use crate::error::Result;
use crate::plot::PlotKind;
use crate::{DEFAULT_OUTPUT_DIR, FIGURE_SIZE};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Where and how big the png files are written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    /// canvas size in pixels
    pub size: (u32, u32),
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig::new(DEFAULT_OUTPUT_DIR)
    }
}

impl OutputConfig {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> OutputConfig {
        OutputConfig {
            output_dir: output_dir.as_ref().to_path_buf(),
            size: FIGURE_SIZE,
        }
    }

    /// Creates the output directory (and its parents) if missing.
    /// Calling it on an existing directory is a no-op.
    pub fn prepare(&self) -> Result<()> {
        if self.output_dir.is_dir() {
            debug!("output directory {} exists", self.output_dir.display());
        } else {
            warn!(
                "output directory {} not found, creating it",
                self.output_dir.display()
            );
        }
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// `{output_dir}/{plant}_{suffix}.png`
    pub fn path_for(&self, plant: &str, kind: PlotKind) -> PathBuf {
        self.output_dir.join(kind.file_name(plant))
    }
}
