use crate::domain::ports::StringTransport;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends each payload as one line to a file (JSON Lines when fed by `JsonSendAdapter`).
#[derive(Debug, Clone)]
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StringTransport for FileTransport {
    fn send(&self, payload: String) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // One write per line: O_APPEND keeps concurrent appenders from interleaving.
        file.write_all(format!("{}\n", payload).as_bytes())?;

        tracing::info!("📁 Payload appended to: {}", self.path.display());
        Ok(())
    }
}
