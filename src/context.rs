//! Per-compilation context shared by every loader.
//!
//! One `CompilationContext` is created per compilation and torn down with
//! it. It owns the module table, the generation counter, the configured
//! search paths and the two host collaborators (source map and diagnostic
//! sink), so nothing in this crate touches global state.

use std::path::PathBuf ;

use crate::diagnostics::{ DiagnosticSink, LoadDiagnostic };
use crate::registry::{ Generation, ModuleTable };
use crate::source_map::{ SourceLoc, SourceMap };



/// Compilation-lifetime state shared by every module loader.
pub struct CompilationContext {
	search_paths: Vec<PathBuf>,
	source_map: Box<dyn SourceMap>,
	diagnostics: Box<dyn DiagnosticSink>,
	modules: ModuleTable,
	generation: Generation,
}

impl CompilationContext {

	/// Creates a context with no search paths and an empty module table.
	pub fn new(
		source_map: Box<dyn SourceMap>,
		diagnostics: Box<dyn DiagnosticSink>,
	) -> Self {
		Self {
			search_paths: Vec::new(),
			source_map,
			diagnostics,
			modules: ModuleTable::new(),
			generation: Generation::base(),
		}
	}

	/// Replaces the configured import search paths.
	pub fn with_search_paths( mut self, paths: impl IntoIterator<Item = PathBuf> ) -> Self {
		self.search_paths = paths.into_iter().collect();
		self
	}

	/// Appends one import search path; searched after all earlier ones.
	pub fn add_search_path( &mut self, path: PathBuf ) {
		self.search_paths.push( path );
	}

	/// The configured import search paths, in search order.
	#[inline] pub fn search_paths( &self ) -> &[PathBuf] { &self.search_paths }

	/// The compilation's module table.
	#[inline] pub fn modules( &self ) -> &ModuleTable { &self.modules }

	/// Mutable access to the module table.
	#[inline] pub fn modules_mut( &mut self ) -> &mut ModuleTable { &mut self.modules }

	/// The current generation; modules loaded so far have generations at or
	/// below this value.
	#[inline] pub fn current_generation( &self ) -> Generation { self.generation }

	/// Advances the generation counter, returning the new value.
	///
	/// Called exactly once per module that becomes usable.
	pub(crate) fn bump_generation( &mut self ) -> Generation {
		self.generation = self.generation.next();
		self.generation
	}

	pub(crate) fn source_map( &self ) -> &dyn SourceMap { self.source_map.as_ref() }

	pub(crate) fn diagnose( &mut self, loc: Option<SourceLoc>, diagnostic: LoadDiagnostic ) {
		self.diagnostics.diagnose( loc, diagnostic );
	}

}

impl std::fmt::Debug for CompilationContext {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "CompilationContext" )
			.field( "search_paths", &self.search_paths )
			.field( "modules", &self.modules )
			.field( "generation", &self.generation )
			.finish_non_exhaustive()
	}
}
