//! Program-image loading.
//!
//! Program and data loading is a host concern, not part of the emulation
//! core: tests poke RAM directly, and hosts that want to run an assembled
//! binary use the small loader here.

use std::path::Path;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a program image.
#[derive(Debug)]
pub enum ProgramLoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),

    /// The image does not fit in the address space at its origin.
    TooLarge { origin: u16, size: usize },
}

impl std::fmt::Display for ProgramLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TooLarge { origin, size } => write!(
                f,
                "program of {size} bytes does not fit at origin {origin:#06X}"
            ),
        }
    }
}

impl std::error::Error for ProgramLoadError {}

impl From<std::io::Error> for ProgramLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ProgramImage
// ---------------------------------------------------------------------------

/// An assembled program: raw bytes, the address they load at, and the entry
/// address the reset vector should point at.
pub struct ProgramImage {
    data: Vec<u8>,
    origin: u16,
    entry: u16,
}

impl ProgramImage {
    /// Create an image from raw bytes. The entry address defaults to the
    /// origin.
    pub fn from_bytes(origin: u16, data: Vec<u8>) -> Result<Self, ProgramLoadError> {
        if usize::from(origin) + data.len() > 0x10000 {
            return Err(ProgramLoadError::TooLarge {
                origin,
                size: data.len(),
            });
        }
        Ok(Self {
            data,
            origin,
            entry: origin,
        })
    }

    /// Read an image from a flat binary file.
    pub fn from_file(path: &Path, origin: u16) -> Result<Self, ProgramLoadError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(origin, data)
    }

    /// Override the entry address the reset vector is pointed at.
    pub fn with_entry(mut self, entry: u16) -> Self {
        self.entry = entry;
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn origin(&self) -> u16 {
        self.origin
    }

    pub fn entry(&self) -> u16 {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
