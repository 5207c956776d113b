//! Module handles: the compiler-visible representation of an import.
//!
//! A handle exists for every import that got past the search, whether or not
//! the module is usable. Failed loads leave an inert handle behind so a
//! second import of the same name never retries; queries against an inert
//! handle quietly return nothing.

use crate::registry::RecordId ;



/// A module in the compilation's table.
///
/// The table is shared between loaders; each loader constructs and answers
/// queries for its own variant only. Matching on the variant replaces the
/// unchecked downcast a pointer-based design would need.
#[derive( Debug )]
pub enum Module {
    /// A module materialized from its binary-serialized form.
    Serialized( SerializedModule ),
    /// A module owned by the source-file loader; opaque to this crate.
    Source( SourceModule ),
}

impl Module {
    /// The module's display name.
    pub fn name( &self ) -> &str {
        match self {
            Module::Serialized( module ) => module.name(),
            Module::Source( module ) => module.name(),
        }
    }

    /// This module as a serialized one, if it is.
    pub fn as_serialized( &self ) -> Option<&SerializedModule> {
        match self {
            Module::Serialized( module ) => Some( module ),
            Module::Source( _ ) => None,
        }
    }
}

/// A handle to a binary-deserialized module.
///
/// Carries display metadata and the usability state. The parsed record
/// itself is owned by the loader; a usable handle holds only a token for it.
#[derive( Debug )]
pub struct SerializedModule {
    /// Display name, as written in the import statement.
    name: String,
    /// Origin label: the path or registered-buffer name it was read from.
    debug_name: String,
    /// Linkage component group; every serialized module forms its own.
    component: Component,
    state: ModuleState,
}

impl SerializedModule {
    pub(crate) fn new(
        name: impl Into<String>,
        debug_name: impl Into<String>,
        component: Component,
        state: ModuleState,
    ) -> Self {
        Self {
            name: name.into(),
            debug_name: debug_name.into(),
            component,
            state,
        }
    }

    /// Display name, as written in the import statement.
    #[inline] pub fn name( &self ) -> &str { &self.name }

    /// Origin label: file path or registered-buffer name.
    #[inline] pub fn debug_name( &self ) -> &str { &self.debug_name }

    /// The linkage component this module belongs to.
    #[inline] pub fn component( &self ) -> &Component { &self.component }

    /// The handle's usability state.
    #[inline] pub fn state( &self ) -> &ModuleState { &self.state }

    /// Whether symbol queries against this handle can return anything.
    #[inline] pub fn is_usable( &self ) -> bool {
        matches!( self.state, ModuleState::Usable( _ ))
    }

    /// Why this handle is inert, if it is.
    pub fn inert_reason( &self ) -> Option<InertReason> {
        match self.state {
            ModuleState::Usable( _ ) => None,
            ModuleState::Inert( reason ) => Some( reason ),
        }
    }
}

/// Usability of a [`SerializedModule`].
///
/// An explicit sum type instead of a nullable record pointer: a handle is
/// either backed by a loader-owned record or permanently inert for this
/// compilation.
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub enum ModuleState {
    /// Fully loaded; the token resolves to the record inside the loader.
    Usable( RecordId ),
    /// Located and registered, but unusable for symbol queries.
    Inert( InertReason ),
}

/// Why an inert module cannot answer queries.
#[derive( Copy, Clone, Debug, Eq, PartialEq )]
pub enum InertReason {
    /// The container format is newer than this compiler understands.
    FormatTooNew,
    /// The buffer was not a well-formed module container.
    Malformed,
    /// The module parsed but at least one dependency was not loaded.
    /// Dependencies loaded later do not revive it.
    MissingDependencies,
}

impl std::fmt::Display for InertReason {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        match self {
            InertReason::FormatTooNew => write!( f, "format too new" ),
            InertReason::Malformed => write!( f, "malformed" ),
            InertReason::MissingDependencies => write!( f, "missing dependencies" ),
        }
    }
}

/// Linkage component group.
///
/// Every serialized module gets a fresh component when its handle is
/// created; the type is opaque and exists to give modules a linkage
/// identity the rest of the compiler can group by.
#[derive( Clone, Copy, Debug, Default )]
pub struct Component ;

impl Component {
    pub(crate) fn new() -> Self { Self }
}

/// A module owned by some other loader, sharing the table with serialized
/// ones. This crate never creates these and answers no queries for them.
#[derive( Debug )]
pub struct SourceModule {
    name: String,
}

impl SourceModule {
    /// Creates a handle for a source-loader module.
    pub fn new( name: impl Into<String> ) -> Self {
        Self { name: name.into() }
    }

    /// The module's display name.
    #[inline] pub fn name( &self ) -> &str { &self.name }
}
