//! Diagnostics emitted while loading modules, and the sink they flow into.
//!
//! The loader never fails with an error value for expected problems. Every
//! recoverable failure becomes one diagnostic plus an inert module handle;
//! callers observe the failure only through empty query results.

use std::cell::RefCell ;
use std::rc::Rc ;

use thiserror::Error ;

use crate::source_map::SourceLoc ;



/// Everything the loader can report about an import.
///
/// Each diagnostic is tagged with the importing source location when one is
/// known. Note that "module not found anywhere" is deliberately absent: a
/// failed search is silent and simply produces no handle.
#[derive( Error, Debug, Clone, Eq, PartialEq )]
pub enum LoadDiagnostic {
	/// Opening the module file failed with something other than not-found.
	#[error( "error opening module file for '{module}': {error}" )]
	OpeningImport { module: String, error: String },
	/// The module file's format is newer than this compiler understands.
	#[error( "module file format is too new for this compiler" )]
	ModuleTooNew,
	/// The module file could not be parsed at all.
	#[error( "malformed module file" )]
	MalformedModule,
	/// Exactly one dependency of the module is not loaded.
	#[error( "module file depends on '{0}', which is not loaded" )]
	MissingSingleDependency( String ),
	/// Several dependencies are not loaded; the payload is the pre-joined
	/// quoted list, in declaration order (`'A', 'B'`).
	#[error( "module file depends on modules {0}, which are not loaded" )]
	MissingDependencies( String ),
}

/// Where load diagnostics go.
///
/// Implemented by the host compiler's diagnostic engine. The loader emits at
/// most one diagnostic per failed import.
pub trait DiagnosticSink {
	/// Reports one diagnostic, tagged with the importing location if known.
	fn diagnose( &mut self, loc: Option<SourceLoc>, diagnostic: LoadDiagnostic ) ;
}

/// A [`DiagnosticSink`] that collects everything it is given.
///
/// Clones share one underlying list, so a host (or a test) can keep a handle
/// while the context owns another.
#[derive( Clone, Default )]
pub struct CollectedDiagnostics {
	entries: Rc<RefCell<Vec<( Option<SourceLoc>, LoadDiagnostic )>>>,
}

impl CollectedDiagnostics {
	/// Creates an empty sink.
	pub fn new() -> Self { Self::default() }

	/// Every collected `( location, diagnostic )` pair, in emission order.
	pub fn entries( &self ) -> Vec<( Option<SourceLoc>, LoadDiagnostic )> {
		self.entries.borrow().clone()
	}

	/// The collected diagnostics without their locations.
	pub fn diagnostics( &self ) -> Vec<LoadDiagnostic> {
		self.entries.borrow().iter().map(|( _, diagnostic )| diagnostic.clone() ).collect()
	}

	/// Whether nothing has been collected.
	pub fn is_empty( &self ) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Number of collected diagnostics.
	pub fn len( &self ) -> usize {
		self.entries.borrow().len()
	}
}

impl DiagnosticSink for CollectedDiagnostics {
	fn diagnose( &mut self, loc: Option<SourceLoc>, diagnostic: LoadDiagnostic ) {
		self.entries.borrow_mut().push(( loc, diagnostic ));
	}
}

impl std::fmt::Debug for CollectedDiagnostics {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "CollectedDiagnostics" )
			.field( "entries", &self.entries.borrow().len() )
			.finish()
	}
}
