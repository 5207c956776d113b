//! Module paths and import access paths.
//!
//! An import names a module with a dotted path (`import widgets.button`).
//! Each element carries the location it was written at so failures can be
//! reported against the right `import` statement. The path is non-empty by
//! construction.

use itertools::Itertools ;
use nonempty_collections::{ NEVec, IntoNonEmptyIterator, NonEmptyIterator };

use crate::source_map::SourceLoc ;



/// One element of a module or access path: a name plus the location it was
/// written at, if any.
#[derive( Clone, Debug, Eq, PartialEq )]
pub struct ModulePathElem {
    name: String,
    loc: Option<SourceLoc>,
}

impl ModulePathElem {
    /// Creates a path element.
    pub fn new( name: impl Into<String>, loc: Option<SourceLoc> ) -> Self {
        Self { name: name.into(), loc }
    }

    /// The identifier text of this element.
    #[inline] pub fn name( &self ) -> &str { &self.name }

    /// Where this element was written, if it came from source.
    #[inline] pub fn loc( &self ) -> Option<SourceLoc> { self.loc }
}

/// A scoping filter on an import (`import widgets.Button` narrows lookups in
/// `widgets` to the single symbol `Button`).
///
/// Borrowed as a slice; an empty slice means the import is unscoped.
pub type AccessPath = [ ModulePathElem ];

/// A dotted, non-empty module path as written in an import statement.
#[derive( Clone, Debug )]
pub struct ModulePath {
    elements: NEVec<ModulePathElem>,
}

impl ModulePath {
    /// Creates a single-element path.
    pub fn new( first: ModulePathElem ) -> Self {
        Self { elements: NEVec::new( first )}
    }

    /// Appends an element, making this a submodule path.
    pub fn push( &mut self, elem: ModulePathElem ) {
        self.elements.push( elem );
    }

    /// The first (module-naming) element.
    #[inline] pub fn first( &self ) -> &ModulePathElem { self.elements.first() }

    /// Whether this path names a submodule (more than one element).
    /// Submodule paths are rejected by the loader.
    #[inline] pub fn is_submodule( &self ) -> bool { self.elements.len().get() > 1 }

    /// Joins every element's name with `separator`.
    ///
    /// This is the key format used by the registered-buffer table: an exact
    /// match on the fully dotted path string.
    pub fn joined( &self, separator: &str ) -> String {
        self.elements.nonempty_iter().into_iter().map( ModulePathElem::name ).join( separator )
    }
}

impl From<ModulePathElem> for ModulePath {
    fn from( elem: ModulePathElem ) -> Self { Self::new( elem )}
}
