//! Export configuration

use crate::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Options controlling one OBJ export. Immutable for the duration of a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjExportConfig {
    /// Output file name, resolved against `output_dir`. Must be a bare
    /// relative name without directory components.
    pub file_name: String,
    /// Emit per-vertex normals for chunks whose normal buffer is aligned.
    pub include_normals: bool,
    /// Bake each chunk's local-to-world transform into the output.
    pub world_space: bool,
    /// Destination directory; `None` resolves to the platform's writable
    /// data directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for ObjExportConfig {
    fn default() -> Self {
        Self {
            file_name: "RoomScan.obj".to_string(),
            include_normals: true,
            world_space: true,
            output_dir: None,
        }
    }
}

impl ObjExportConfig {
    /// Create a configuration with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file name
    pub fn with_file_name<S: Into<String>>(mut self, file_name: S) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Enable or disable normal output
    pub fn with_normals(mut self, include_normals: bool) -> Self {
        self.include_normals = include_normals;
        self
    }

    /// Export in world space (true) or chunk-local space (false)
    pub fn with_world_space(mut self, world_space: bool) -> Self {
        self.world_space = world_space;
        self
    }

    /// Override the destination directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Resolve the full destination path, validating `file_name` along the
    /// way. Absolute names and names with directory components are rejected
    /// so the output always lands inside the chosen directory.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        let name = Path::new(&self.file_name);
        let mut components = name.components();
        let valid = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !valid {
            return Err(ExportError::Configuration(format!(
                "file name must be a bare relative name, got {:?}",
                self.file_name
            )));
        }

        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir().unwrap_or_else(std::env::temp_dir),
        };
        Ok(dir.join(name))
    }
}
