//! Source locations and the source-manager collaborator trait.
//!
//! The loader never interprets source locations itself. It only forwards them
//! to diagnostics and, for the importer-directory search step, asks the host's
//! source manager which buffer a location belongs to.

/// An opaque location inside some source buffer.
///
/// Produced by the host compiler's source manager; the loader treats it as a
/// token. Import requests carry one so diagnostics can point at the `import`
/// statement and so the search can look next to the importing file.
#[derive( Copy, Clone, Debug, Eq, Hash, PartialEq )]
pub struct SourceLoc( u32 );

impl SourceLoc {
    /// Creates a location from a source-manager offset.
    pub const fn new( offset: u32 ) -> Self { Self( offset )}
}

impl From<SourceLoc> for u32 {
    fn from( loc: SourceLoc ) -> Self { loc.0 }
}

/// Trait for resolving source locations back to their containing buffer.
///
/// Implemented by the host's source manager. The loader uses it for exactly
/// one purpose: finding the directory of the file that contains an `import`
/// statement, so that directory can be searched first.
pub trait SourceMap {
    /// Returns the identifier (typically a file path) of the buffer that
    /// contains `loc`, or `None` if the location is unknown.
    fn buffer_identifier_containing( &self, loc: SourceLoc ) -> Option<String> ;
}

/// A [`SourceMap`] that knows no buffers.
///
/// For hosts that feed the loader only pre-registered buffers or search
/// paths; the importer-directory search step is skipped entirely.
#[derive( Copy, Clone, Debug, Default )]
pub struct NoSourceMap ;

impl SourceMap for NoSourceMap {
    fn buffer_identifier_containing( &self, _loc: SourceLoc ) -> Option<String> { None }
}
