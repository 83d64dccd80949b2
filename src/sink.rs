use crate::engine::Artifact;
use crate::error::AwbError;
use std::fs;
use std::path::PathBuf;

/// The destination that receives a finished artifact. The sink is the only
/// resource a render acquires, it is held for the single `persist` call, and
/// a failure is fatal for that render: nothing retries and no partial
/// artifact is left behind as valid output.
pub trait OutputSink {
    fn persist(&mut self, artifact: &Artifact) -> Result<(), AwbError>;
}

/// Writes artifacts into a directory on disk under their derived file names
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> FileSink {
        FileSink { dir: dir.into() }
    }
}

impl OutputSink for FileSink {
    fn persist(&mut self, artifact: &Artifact) -> Result<(), AwbError> {
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.bytes).map_err(|source| AwbError::Sink {
            name: artifact.file_name.clone(),
            source,
        })?;
        log::info!("persisted {} ({} bytes)", path.display(), artifact.bytes.len());
        Ok(())
    }
}
