use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const HEADER: &str = "timestamp,light_level,motion";

/// Append-only CSV sink for sensor readings.
///
/// Holds only the path; the file handle is opened and closed per write so no
/// descriptor outlives a request.
#[derive(Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header line, atomically skipping creation if
    /// it already exists. Returns whether the file was created.
    pub fn ensure_header(&self) -> io::Result<bool> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                file.write_all(format!("{HEADER}\n").as_bytes())?;
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Append one reading as a single write on a scoped handle.
    pub fn append(&self, timestamp: &str, light: &str, motion: &str) -> io::Result<()> {
        let row = format!("{timestamp},{light},{motion}\n");
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(row.as_bytes())
    }
}
