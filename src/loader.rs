//! The serialized-module loader and its query dispatcher.
//!
//! [`SerializedModuleLoader`] locates a module's binary form, hands it to
//! the reader, classifies the result, registers a handle in the
//! compilation's module table and afterwards routes every symbol query to
//! the record behind the handle. Failed loads leave an inert handle behind;
//! queries against one quietly return nothing.

use std::collections::HashMap ;
use std::rc::Rc ;

use itertools::Itertools ;
use pipe_trait::Pipe ;

use crate::buffer::ModuleBuffer ;
use crate::context::CompilationContext ;
use crate::diagnostics::LoadDiagnostic ;
use crate::module::{ Component, InertReason, Module, ModuleState, SerializedModule };
use crate::module_path::{ AccessPath, ModulePath, ModulePathElem };
use crate::record::{ Dependency, LookupKind, ModuleRecord, ModuleStatus, OperatorFixity };
use crate::registry::{ Generation, RecordId };
use crate::search ;



/// Loads binary-serialized modules and answers symbol queries against them.
///
/// One loader serves a whole compilation. It owns the records it has parsed
/// (handles in the module table carry tokens into that arena) and the table
/// of pre-registered in-memory buffers an embedding host may supply.
///
/// # Type Parameters
/// - `R`: the host's [`ModuleRecord`] implementation, i.e. the binary
///   container reader
pub struct SerializedModuleLoader<R: ModuleRecord> {
	/// Host-supplied buffers, keyed by fully dotted module path. Consumed
	/// on first match.
	registered_buffers: HashMap<String, ModuleBuffer>,
	/// Every record parsed this compilation, usable or not. Entries are
	/// never removed, which keeps [`RecordId`] tokens valid.
	records: Vec<R>,
	/// Usable records with the generation they became usable at, in
	/// registration order.
	usable: Vec<( RecordId, Generation )>,
}

impl<R: ModuleRecord> Default for SerializedModuleLoader<R> {
	fn default() -> Self { Self::new() }
}

impl<R: ModuleRecord> SerializedModuleLoader<R> {

	/// Creates a loader with no registered buffers and no loaded records.
	pub fn new() -> Self {
		Self {
			registered_buffers: HashMap::new(),
			records: Vec::new(),
			usable: Vec::new(),
		}
	}

	/// Pre-registers an in-memory buffer for `name`.
	///
	/// The next load of a path whose fully dotted form equals `name` exactly
	/// consumes this buffer instead of searching the disk. Registering the
	/// same name again replaces the pending buffer.
	pub fn register_buffer( &mut self, name: impl Into<String>, buffer: ModuleBuffer ) {
		self.registered_buffers.insert( name.into(), buffer );
	}

	/// Whether a registered buffer for `name` is still pending (i.e. has not
	/// been consumed by a load).
	pub fn has_registered_buffer( &self, name: &str ) -> bool {
		self.registered_buffers.contains_key( name )
	}

	/// Loads the module named by `path`, or returns its existing handle.
	///
	/// Returns `None` without touching the search when `path` names a
	/// submodule, and silently when the module exists nowhere. Every other
	/// failure emits one diagnostic and still produces a handle - inert, and
	/// registered under the module's name so the load is never retried.
	pub fn load_module(
		&mut self,
		ctx: &mut CompilationContext,
		path: &ModulePath,
	) -> Option<Rc<Module>> {

		// Submodules don't exist in the serialized format.
		if path.is_submodule() { return None }

		let elem = path.first().clone();
		let name = elem.name().to_string();

		// Whatever happened on the first attempt, don't repeat it.
		if let Some( existing ) = ctx.modules().get( &name ) {
			return Some( existing )
		}

		let buffer = match self.registered_buffers.remove( &path.joined( "." )) {
			Some( buffer ) => buffer,
			None => match search::find_module( ctx, &name, elem.loc() ) {
				Ok( buffer ) => buffer,
				Err( error ) => {
					if error.kind() != std::io::ErrorKind::NotFound {
						ctx.diagnose( elem.loc(), LoadDiagnostic::OpeningImport {
							module: name,
							error: error.to_string(),
						});
					}
					return None
				}
			}
		};

		let debug_name = buffer.identifier().to_string();

		let state = match R::load( buffer ) {
			( ModuleStatus::Valid, Some( mut record )) => {
				let report = record.associate( ctx.modules() );
				if report.is_complete() {
					let generation = ctx.bump_generation();
					ModuleState::Usable( self.push_usable( record, generation ))
				} else {
					Self::diagnose_missing( ctx, &elem, report.missing() );
					// Retained for the compilation's lifetime, but never
					// reachable from the handle.
					self.records.push( record );
					ModuleState::Inert( InertReason::MissingDependencies )
				}
			}
			( ModuleStatus::Valid, None ) => {
				unreachable!( "reader returned Valid without a record" )
			}
			( ModuleStatus::FormatTooNew, _ ) => {
				ctx.diagnose( elem.loc(), LoadDiagnostic::ModuleTooNew );
				ModuleState::Inert( InertReason::FormatTooNew )
			}
			( ModuleStatus::Malformed, _ ) => {
				ctx.diagnose( elem.loc(), LoadDiagnostic::MalformedModule );
				ModuleState::Inert( InertReason::Malformed )
			}
			( ModuleStatus::MissingDependency, _ ) => {
				unreachable!( "dependencies haven't been associated yet" )
			}
		};

		let module = Rc::new( Module::Serialized( SerializedModule::new(
			name.clone(),
			debug_name,
			Component::new(),
			state,
		)));
		ctx.modules_mut().insert( name, Rc::clone( &module ));
		Some( module )

	}

	fn push_usable( &mut self, record: R, generation: Generation ) -> RecordId {
		let id = RecordId::new( self.records.len() );
		self.records.push( record );
		self.usable.push(( id, generation ));
		id
	}

	fn diagnose_missing(
		ctx: &mut CompilationContext,
		elem: &ModulePathElem,
		missing: &[Dependency],
	) {
		debug_assert!( !missing.is_empty(), "unknown missing dependency?" );
		match missing {
			[ single ] => ctx.diagnose(
				elem.loc(),
				LoadDiagnostic::MissingSingleDependency( single.raw_access_path().to_string() ),
			),
			_ => missing.iter()
				.map( Dependency::raw_access_path )
				.join( "', '" )
				.pipe(| joined | format!( "'{}'", joined ))
				.pipe(| joined | ctx.diagnose( elem.loc(), LoadDiagnostic::MissingDependencies( joined ))),
		}
	}

	/// The record behind `module`, when it is a usable serialized module.
	fn record_of( &self, module: &Module ) -> Option<&R> {
		match module.as_serialized()?.state() {
			ModuleState::Usable( id ) => Some( &self.records[ id.index() ] ),
			ModuleState::Inert( _ ) => None,
		}
	}

	/// Looks up top-level value declarations named `name` in `module`.
	///
	/// An import scoped to a single other symbol filters the lookup to
	/// nothing. Access paths with more than one element are a caller
	/// contract violation.
	pub fn lookup_value(
		&self,
		module: &Module,
		access_path: &AccessPath,
		name: &str,
		kind: LookupKind,
	) -> Vec<R::Value> {
		assert!( access_path.len() <= 1, "can only refer to top-level decls" );

		// An import like `import widgets.Button` only resolves `Button`.
		if let [ scope ] = access_path {
			if scope.name() != name { return Vec::new() }
		}

		match self.record_of( module ) {
			Some( record ) => record.lookup_value( name, kind ),
			None => Vec::new(),
		}
	}

	/// Looks up an operator declaration in `module`.
	pub fn lookup_operator(
		&self,
		module: &Module,
		name: &str,
		fixity: OperatorFixity,
	) -> Option<R::Operator> {
		self.record_of( module )?.lookup_operator( name, fixity )
	}

	/// The modules `module` imports.
	pub fn imported_modules( &self, module: &Module, include_private: bool ) -> Vec<R::Import> {
		match self.record_of( module ) {
			Some( record ) => record.imported_modules( include_private ),
			None => Vec::new(),
		}
	}

	/// Lazily enumerates declarations of `module` visible through an import
	/// scoped by `access_path`.
	pub fn visible_decls<'a>(
		&'a self,
		module: &Module,
		access_path: &'a AccessPath,
		kind: LookupKind,
	) -> impl Iterator<Item = &'a R::Decl> {
		self.record_of( module )
			.into_iter()
			.flat_map( move | record | record.visible_decls( access_path, kind ))
	}

	/// Lazily enumerates members of all classes in `module`.
	pub fn lookup_class_members<'a>(
		&'a self,
		module: &Module,
		access_path: &'a AccessPath,
	) -> impl Iterator<Item = &'a R::Value> {
		self.record_of( module )
			.into_iter()
			.flat_map( move | record | record.class_members( access_path ))
	}

	/// Looks up class members named `name` across all classes of `module`.
	pub fn lookup_class_member(
		&self,
		module: &Module,
		access_path: &AccessPath,
		name: &str,
	) -> Vec<R::Value> {
		match self.record_of( module ) {
			Some( record ) => record.lookup_class_member( access_path, name ),
			None => Vec::new(),
		}
	}

	/// Calls `callback` for each library `module` links against.
	pub fn link_libraries( &self, module: &Module, callback: &mut dyn FnMut( &R::LinkLibrary )) {
		if let Some( record ) = self.record_of( module ) {
			record.link_libraries( callback );
		}
	}

	/// Declarations shown when displaying `module` to a user.
	pub fn display_decls( &self, module: &Module ) -> Vec<R::Decl> {
		match self.record_of( module ) {
			Some( record ) => record.display_decls(),
			None => Vec::new(),
		}
	}

	/// Asks every module that became usable after `previous_generation` to
	/// materialize its extensions of `nominal`, in registration order.
	pub fn load_extensions( &mut self, nominal: &R::Nominal, previous_generation: Generation ) {
		for id in self.usable_ids_since( previous_generation ) {
			self.records[ id.index() ].load_extensions( nominal );
		}
	}

	/// Asks every module that became usable after `previous_generation` to
	/// materialize its declarations conforming to `protocol`, in
	/// registration order.
	pub fn load_decls_conforming_to( &mut self, protocol: R::Protocol, previous_generation: Generation ) {
		for id in self.usable_ids_since( previous_generation ) {
			self.records[ id.index() ].load_decls_conforming_to( protocol );
		}
	}

	fn usable_ids_since( &self, generation: Generation ) -> Vec<RecordId> {
		self.usable.iter()
			.filter(|( _, usable_at )| *usable_at > generation )
			.map(|&( id, _ )| id )
			.collect()
	}

	/// The records that became usable strictly after `generation`, with the
	/// generation each one became usable at, in registration order.
	pub fn usable_records_since( &self, generation: Generation ) -> impl Iterator<Item = ( &R, Generation )> {
		self.usable.iter()
			.filter( move |( _, usable_at )| *usable_at > generation )
			.map(|&( id, usable_at )| ( &self.records[ id.index() ], usable_at ))
	}

}

impl<R: ModuleRecord> std::fmt::Debug for SerializedModuleLoader<R> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "SerializedModuleLoader" )
			.field( "registered_buffers", &self.registered_buffers.keys() )
			.field( "records", &self.records.len() )
			.field( "usable", &self.usable.len() )
			.finish_non_exhaustive()
	}
}
