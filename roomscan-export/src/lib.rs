//! Wavefront OBJ export for reconstructed AR mesh chunks
//!
//! This crate turns the mesh chunks an AR scene-reconstruction subsystem
//! produces into a single OBJ text file on local storage. The caller adapts
//! its live mesh source to the [`ChunkSource`] trait; the exporter
//! enumerates chunks fresh on every call and streams them out as distinct
//! named object groups with globally cumulative, 1-based face indices.

pub mod config;
pub mod error;
pub mod obj;

pub use config::ObjExportConfig;
pub use error::{ExportError, Result};
pub use obj::write_obj;

use log::{error, info, warn};
use roomscan_core::MeshChunk;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Adapter over a live mesh source, implemented by the caller against the
/// real reconstruction subsystem. Enumeration happens once per export; no
/// caching across calls.
pub trait ChunkSource {
    fn chunks(&self) -> Vec<MeshChunk>;
}

impl ChunkSource for Vec<MeshChunk> {
    fn chunks(&self) -> Vec<MeshChunk> {
        self.clone()
    }
}

/// The Mesh Exporter component.
///
/// Holds an optional reference to the mesh source; exporting without one is
/// a configuration error, surfaced rather than silently swallowed.
#[derive(Default)]
pub struct ObjExporter {
    source: Option<Box<dyn ChunkSource>>,
}

impl ObjExporter {
    /// Create an exporter with no mesh source assigned
    pub fn new() -> Self {
        Self { source: None }
    }

    /// Create an exporter over the given mesh source
    pub fn with_source<S: ChunkSource + 'static>(source: S) -> Self {
        Self {
            source: Some(Box::new(source)),
        }
    }

    /// Assign or replace the mesh source
    pub fn set_source<S: ChunkSource + 'static>(&mut self, source: S) {
        self.source = Some(Box::new(source));
    }

    /// Export the source's current chunks to one OBJ file.
    ///
    /// Fails with [`ExportError::Configuration`] when no source is assigned
    /// or the file name is invalid, and with [`ExportError::NoData`] when
    /// the source has produced no chunks yet; no file is created or touched
    /// in either case. Returns the resolved output path on success.
    pub fn export(&self, config: &ObjExportConfig) -> Result<PathBuf> {
        let source = match &self.source {
            Some(source) => source,
            None => {
                let err = ExportError::Configuration("no mesh source assigned".to_string());
                error!("{}", err);
                return Err(err);
            }
        };
        export_chunks(&source.chunks(), config)
    }
}

/// Convenience wrapper: export one source's chunks without building an
/// [`ObjExporter`] first.
pub fn export_to_obj<S: ChunkSource>(source: &S, config: &ObjExportConfig) -> Result<PathBuf> {
    export_chunks(&source.chunks(), config)
}

fn export_chunks(chunks: &[MeshChunk], config: &ObjExportConfig) -> Result<PathBuf> {
    if chunks.is_empty() {
        warn!("no mesh chunks available yet; scan more surface and retry");
        return Err(ExportError::NoData);
    }

    let path = match config.resolved_path() {
        Ok(path) => path,
        Err(err) => {
            error!("{}", err);
            return Err(err);
        }
    };

    match write_file(&path, chunks, config) {
        Ok(()) => {
            info!("saved OBJ to {}", path.display());
            Ok(path)
        }
        Err(err) => {
            error!("failed to save OBJ: {}", err);
            Err(err)
        }
    }
}

fn write_file(path: &Path, chunks: &[MeshChunk], config: &ObjExportConfig) -> Result<()> {
    // Truncating create; UTF-8 with no BOM. The handle is released on every
    // exit path, the explicit flush surfaces buffered write errors.
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, chunks, config)?;
    writer.flush()?;
    Ok(())
}
