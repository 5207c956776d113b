//! Owned byte buffers holding a module's serialized form.

use std::path::Path ;

/// An owned byte buffer containing a serialized module, together with the
/// identifier it was read from.
///
/// The identifier is a file path for buffers found on disk, or the name an
/// embedding host registered the buffer under. Either way it becomes the
/// loaded module's debug/origin label.
#[derive( Clone, Debug )]
pub struct ModuleBuffer {
    identifier: String,
    bytes: Vec<u8>,
}

impl ModuleBuffer {
    /// Wraps in-memory bytes under the given identifier.
    pub fn from_bytes( identifier: impl Into<String>, bytes: impl Into<Vec<u8>> ) -> Self {
        Self { identifier: identifier.into(), bytes: bytes.into() }
    }

    /// Reads a file into a buffer, recording the path as its identifier.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be read.
    pub fn from_file( path: &Path ) -> std::io::Result<Self> {
        let bytes = std::fs::read( path )?;
        Ok( Self { identifier: path.display().to_string(), bytes })
    }

    /// Where this buffer came from (file path or registered name).
    #[inline] pub fn identifier( &self ) -> &str { &self.identifier }

    /// The serialized module contents.
    #[inline] pub fn bytes( &self ) -> &[u8] { &self.bytes }

    /// Consumes the buffer, yielding its contents.
    pub fn into_bytes( self ) -> Vec<u8> { self.bytes }
}
