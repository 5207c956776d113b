//! The module binary reader contract.
//!
//! The loader owns everything around the binary container format but not the
//! format itself. Decoding a buffer into declarations, operator tables and
//! dependency lists is the job of a [`ModuleRecord`] implementation supplied
//! by the host compiler; the loader drives it through this trait and never
//! looks inside.

use crate::buffer::ModuleBuffer ;
use crate::module_path::AccessPath ;
use crate::registry::ModuleTable ;



/// Outcome classification of parsing a module buffer.
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub enum ModuleStatus {
    /// The module parsed and can proceed to dependency association.
    Valid,
    /// The container format is newer than this reader understands.
    FormatTooNew,
    /// The buffer is not a well-formed module container.
    Malformed,
    /// One or more dependencies are unloaded.
    ///
    /// Only [`ModuleRecord::associate`] may produce this state. A reader
    /// returning it directly from [`ModuleRecord::load`] has violated its
    /// contract and the loader treats that as fatal.
    MissingDependency,
}

/// One entry of a module's declared dependency list.
///
/// The raw access path is the textual form stored in the module file, e.g.
/// `widgets` or `widgets.Button`; only its module component takes part in
/// dependency resolution.
#[derive( Clone, Debug, Eq, PartialEq )]
pub struct Dependency {
    raw_access_path: String,
}

impl Dependency {
    /// Creates a dependency from its stored textual access path.
    pub fn new( raw_access_path: impl Into<String> ) -> Self {
        Self { raw_access_path: raw_access_path.into() }
    }

    /// The textual access path exactly as stored in the module file.
    #[inline] pub fn raw_access_path( &self ) -> &str { &self.raw_access_path }

    /// The module component of the access path (text before the first `.`).
    pub fn module_name( &self ) -> &str {
        match self.raw_access_path.split_once( '.' ) {
            Some(( module, _ )) => module,
            None => &self.raw_access_path,
        }
    }
}

/// Result of attempting to bind a module's dependencies to already-loaded
/// modules.
///
/// Association reports which dependencies are still unloaded instead of
/// flagging entries of a shared list in place; the dependency list itself
/// stays immutable.
#[derive( Clone, Debug, Default )]
pub struct AssociationReport {
    missing: Vec<Dependency>,
}

impl AssociationReport {
    /// A report with every dependency satisfied.
    pub fn complete() -> Self { Self { missing: Vec::new() }}

    /// A report listing the unloaded dependencies, in declaration order.
    pub fn with_missing( missing: Vec<Dependency> ) -> Self { Self { missing }}

    /// Whether every dependency resolved to a loaded module.
    #[inline] pub fn is_complete( &self ) -> bool { self.missing.is_empty() }

    /// The dependencies that did not resolve, in declaration order.
    #[inline] pub fn missing( &self ) -> &[Dependency] { &self.missing }
}

/// Discriminates qualified from unqualified name lookups.
///
/// Opaque to the loader; it is forwarded to the record untouched.
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub enum LookupKind {
    /// Lookup through an explicit qualifier (`widgets.Button`).
    Qualified,
    /// Plain identifier lookup.
    Unqualified,
}

/// Fixity selector for operator lookups.
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub enum OperatorFixity {
    Prefix,
    Infix,
    Postfix,
}

/// A parsed serialized module, as produced by the host's binary reader.
///
/// Implement this trait to plug a container format into the loader. The
/// associated types are the host compiler's AST surface; the loader only
/// moves them around.
///
/// # Associated Types
///
/// - `Value`, `Operator`, `Decl`, `Import`, `LinkLibrary`: the host's
///   declaration-level types handed back from queries
/// - `Nominal`, `Protocol`: selectors for extension and conformance loading
/// - `VisibleDecls`, `ClassMembers`: lazy result sequences, pulled by the
///   caller instead of pushed into a callback
pub trait ModuleRecord: Sized {

    /// Value declarations returned from name lookups.
    type Value ;
    /// Operator declarations.
    type Operator ;
    /// Arbitrary declarations (visible-decl and display-decl enumeration).
    type Decl ;
    /// Entries of the module's import list.
    type Import ;
    /// Libraries the module asks its client to link against.
    type LinkLibrary ;
    /// Nominal type selector for extension loading.
    type Nominal: ?Sized ;
    /// Well-known protocol selector for conformance loading.
    type Protocol: Copy ;
    /// Lazy sequence of visible declarations.
    type VisibleDecls<'a>: IntoIterator<Item = &'a Self::Decl> where Self: 'a ;
    /// Lazy sequence of class members.
    type ClassMembers<'a>: IntoIterator<Item = &'a Self::Value> where Self: 'a ;

    /// Parses a buffer, taking ownership of it.
    ///
    /// Returns the parse status plus the record when one could be produced.
    /// `Valid` must come with a record; [`ModuleStatus::MissingDependency`]
    /// must never be returned from here (see its docs).
    fn load( buffer: ModuleBuffer ) -> ( ModuleStatus, Option<Self> ) ;

    /// The module's declared dependency list, in declaration order.
    fn dependencies( &self ) -> &[Dependency] ;

    /// Attempts to bind every declared dependency to a module already present
    /// in `modules`, returning which ones did not resolve.
    fn associate( &mut self, modules: &ModuleTable ) -> AssociationReport ;

    /// Looks up top-level value declarations named `name`.
    fn lookup_value( &self, name: &str, kind: LookupKind ) -> Vec<Self::Value> ;

    /// Looks up an operator declaration with the given fixity.
    fn lookup_operator( &self, name: &str, fixity: OperatorFixity ) -> Option<Self::Operator> ;

    /// The modules this module imports. With `include_private`, non-exported
    /// imports are listed as well.
    fn imported_modules( &self, include_private: bool ) -> Vec<Self::Import> ;

    /// Enumerates declarations visible through an import scoped by
    /// `access_path`.
    fn visible_decls<'a>( &'a self, access_path: &AccessPath, kind: LookupKind ) -> Self::VisibleDecls<'a> ;

    /// Enumerates members of all classes in this module.
    fn class_members<'a>( &'a self, access_path: &AccessPath ) -> Self::ClassMembers<'a> ;

    /// Looks up class members named `name` across all classes.
    fn lookup_class_member( &self, access_path: &AccessPath, name: &str ) -> Vec<Self::Value> ;

    /// Materializes extensions of `nominal` declared by this module.
    fn load_extensions( &mut self, nominal: &Self::Nominal ) ;

    /// Materializes declarations conforming to the given well-known protocol.
    fn load_decls_conforming_to( &mut self, protocol: Self::Protocol ) ;

    /// Calls `callback` for each library this module links against.
    fn link_libraries( &self, callback: &mut dyn FnMut( &Self::LinkLibrary )) ;

    /// Declarations shown when displaying the whole module to a user.
    fn display_decls( &self ) -> Vec<Self::Decl> ;

}
