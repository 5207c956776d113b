//! The compilation's module table and the generation counter.
//!
//! Both live for exactly one compilation and are owned by the
//! [`CompilationContext`]( crate::context::CompilationContext ) rather than
//! sitting in process-global state.

use std::collections::HashMap ;
use std::rc::Rc ;

use crate::module::Module ;



/// Logical timestamp of module loading.
///
/// Bumped exactly once each time a module becomes usable, never for failed
/// or inert loads. Incremental callers remember the generation they last
/// queried at and ask for everything strictly newer.
#[derive( Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd )]
pub struct Generation( u32 );

impl Generation {
    /// The baseline before any module has been loaded.
    pub const fn base() -> Self { Self( 0 )}

    /// Creates a generation from its counter value.
    pub const fn new( value: u32 ) -> Self { Self( value )}

    /// The generation after this one.
    pub(crate) fn next( self ) -> Self { Self( self.0 + 1 )}
}

impl std::fmt::Display for Generation {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        std::fmt::Display::fmt( &self.0, f )
    }
}

impl From<Generation> for u32 {
    fn from( generation: Generation ) -> Self { generation.0 }
}

/// Token resolving a usable module handle to its loader-owned record.
///
/// Records are owned by the loader's arena and never dropped before the
/// compilation ends, so a token stays valid for the handle's lifetime.
#[derive( Copy, Clone, Debug, Eq, Hash, PartialEq )]
pub struct RecordId( usize );

impl RecordId {
    pub(crate) fn new( index: usize ) -> Self { Self( index )}
    pub(crate) fn index( self ) -> usize { self.0 }
}

/// The compilation-wide name → module handle table.
///
/// Every import that got past the search lands here exactly once, usable or
/// not, which is what makes loading at-most-once: a name already present is
/// returned as-is and never searched again.
#[derive( Debug, Default )]
pub struct ModuleTable {
    modules: HashMap<String, Rc<Module>>,
}

impl ModuleTable {
    /// Creates an empty table.
    pub fn new() -> Self { Self::default() }

    /// Registers `module` under `name`, replacing any previous entry.
    ///
    /// Callers enforce at-most-once loading before ever reaching this, so
    /// an overwrite only happens when a host deliberately replaces a handle.
    pub fn insert( &mut self, name: impl Into<String>, module: Rc<Module> ) {
        self.modules.insert( name.into(), module );
    }

    /// The handle registered under `name`, if any.
    pub fn get( &self, name: &str ) -> Option<Rc<Module>> {
        self.modules.get( name ).map( Rc::clone )
    }

    /// Whether a module is registered under `name`.
    pub fn contains( &self, name: &str ) -> bool {
        self.modules.contains_key( name )
    }

    /// Iterates over `( name, handle )` pairs in no particular order.
    pub fn iter( &self ) -> impl Iterator<Item = ( &str, &Rc<Module> )> {
        self.modules.iter().map(|( name, module )| ( name.as_str(), module ))
    }

    /// Number of registered modules.
    pub fn len( &self ) -> usize { self.modules.len() }

    /// Whether the table is empty.
    pub fn is_empty( &self ) -> bool { self.modules.is_empty() }
}
