//! A serialized-module loader for compiler frontends.
//!
//! `module_link` is the layer of a compiler that turns `import widgets` into
//! a queryable module: it locates the module's binary-serialized form, hands
//! the bytes to the host's container reader, checks that every dependency of
//! the module is itself loaded, registers the result in the compilation's
//! module table and afterwards routes every symbol query to it. Callers
//! never learn whether a module came from disk, from an in-memory buffer
//! supplied by an embedding host, or failed to load - a failed module simply
//! resolves no symbols.
//!
//! # Core Concepts
//!
//! - [`SerializedModuleLoader`]: the loader itself. Owns every parsed record
//! 	and the table of pre-registered buffers, and dispatches all queries.
//!
//! - [`ModuleRecord`]: the contract of the host's binary container reader.
//! 	`module_link` coordinates loading but never decodes the container
//! 	format itself.
//!
//! - [`Module`]: a handle in the compilation's table. Created for every
//! 	import that got past the search - even failed ones, so the same bad
//! 	import is never retried. An inert handle answers every query with
//! 	nothing.
//!
//! - [`CompilationContext`]: per-compilation state - module table,
//! 	generation counter, search paths and the host collaborators
//! 	([`SourceMap`], [`DiagnosticSink`]). Created per compilation, torn
//! 	down with it; nothing is global.
//!
//! - [`Generation`]: a logical timestamp bumped once per module that
//! 	becomes usable. Incremental callers ask the loader for "everything
//! 	newer than the generation I last saw" when collecting extensions and
//! 	protocol conformances.
//!
//! # Search Order
//!
//! A load consults, in order, first match wins:
//!
//! 1. the in-memory buffers registered via
//! 	[`SerializedModuleLoader::register_buffer`] (exact match on the fully
//! 	dotted path; the buffer is consumed),
//! 2. the directory of the file containing the import statement,
//! 3. the process working directory,
//! 4. each configured search path, in configured order.
//!
//! A module found nowhere is reported to the caller as `None`, without a
//! diagnostic - the caller decides whether that's fatal.
//!
//! # Example
//!
//! ```
//! use module_link::{
//! 	AccessPath, AssociationReport, CompilationContext, Dependency, DiagnosticSink,
//! 	LoadDiagnostic, LookupKind, ModuleBuffer, ModulePath, ModulePathElem, ModuleRecord,
//! 	ModuleStatus, ModuleTable, NoSourceMap, OperatorFixity, SerializedModuleLoader,
//! 	SourceLoc,
//! };
//!
//! // A toy container format: one value declaration per line of UTF-8 text.
//! struct TextRecord { values: Vec<String> }
//!
//! impl ModuleRecord for TextRecord {
//! 	type Value = String ;
//! 	type Operator = String ;
//! 	type Decl = String ;
//! 	type Import = String ;
//! 	type LinkLibrary = String ;
//! 	type Nominal = str ;
//! 	type Protocol = () ;
//! 	type VisibleDecls<'a> = std::slice::Iter<'a, String> ;
//! 	type ClassMembers<'a> = std::iter::Empty<&'a String> ;
//!
//! 	fn load( buffer: ModuleBuffer ) -> ( ModuleStatus, Option<Self> ) {
//! 		match String::from_utf8( buffer.into_bytes() ) {
//! 			Ok( text ) => ( ModuleStatus::Valid, Some( Self {
//! 				values: text.lines().map( str::to_string ).collect(),
//! 			})),
//! 			Err( _ ) => ( ModuleStatus::Malformed, None ),
//! 		}
//! 	}
//!
//! 	fn lookup_value( &self, name: &str, _kind: LookupKind ) -> Vec<String> {
//! 		self.values.iter().filter(| value | *value == name ).cloned().collect()
//! 	}
//!
//! 	/* the remaining operations are empty for this format */
//! # fn dependencies( &self ) -> &[Dependency] { &[] }
//! # fn associate( &mut self, _modules: &ModuleTable ) -> AssociationReport {
//! # 	AssociationReport::complete()
//! # }
//! # fn lookup_operator( &self, _name: &str, _fixity: OperatorFixity ) -> Option<String> { None }
//! # fn imported_modules( &self, _include_private: bool ) -> Vec<String> { Vec::new() }
//! # fn visible_decls<'a>( &'a self, _access_path: &AccessPath, _kind: LookupKind )
//! # -> Self::VisibleDecls<'a> { self.values.iter() }
//! # fn class_members<'a>( &'a self, _access_path: &AccessPath ) -> Self::ClassMembers<'a> {
//! # 	std::iter::empty()
//! # }
//! # fn lookup_class_member( &self, _access_path: &AccessPath, _name: &str ) -> Vec<String> {
//! # 	Vec::new()
//! # }
//! # fn load_extensions( &mut self, _nominal: &str ) {}
//! # fn load_decls_conforming_to( &mut self, _protocol: () ) {}
//! # fn link_libraries( &self, _callback: &mut dyn FnMut( &String )) {}
//! # fn display_decls( &self ) -> Vec<String> { self.values.clone() }
//! }
//!
//! // A host would forward these into its diagnostic engine.
//! struct IgnoreDiagnostics ;
//! impl DiagnosticSink for IgnoreDiagnostics {
//! 	fn diagnose( &mut self, _loc: Option<SourceLoc>, _diagnostic: LoadDiagnostic ) {}
//! }
//!
//! let mut ctx = CompilationContext::new(
//! 	Box::new( NoSourceMap ),
//! 	Box::new( IgnoreDiagnostics ),
//! );
//! let mut loader = SerializedModuleLoader::<TextRecord>::new();
//!
//! // Embedding hosts can hand the loader buffers directly instead of
//! // placing files on disk.
//! loader.register_buffer( "greetings", ModuleBuffer::from_bytes( "greetings", "hello\nbye" ));
//!
//! let path = ModulePath::new( ModulePathElem::new( "greetings", None ));
//! let module = loader.load_module( &mut ctx, &path ).expect( "registered module loads" );
//!
//! let values = loader.lookup_value( &module, &[], "hello", LookupKind::Unqualified );
//! assert_eq!( values, vec![ "hello".to_string() ]);
//!
//! // A second import returns the same handle without searching again.
//! let again = loader.load_module( &mut ctx, &path ).unwrap();
//! assert!( std::rc::Rc::ptr_eq( &module, &again ));
//! ```

mod buffer ;
mod context ;
mod diagnostics ;
mod loader ;
mod module ;
mod module_path ;
mod record ;
mod registry ;
mod search ;
mod source_map ;

pub use buffer::ModuleBuffer ;
pub use context::CompilationContext ;
pub use diagnostics::{ CollectedDiagnostics, DiagnosticSink, LoadDiagnostic };
pub use loader::SerializedModuleLoader ;
pub use module::{ Component, InertReason, Module, ModuleState, SerializedModule, SourceModule };
pub use module_path::{ AccessPath, ModulePath, ModulePathElem };
pub use record::{
	AssociationReport, Dependency, LookupKind, ModuleRecord, ModuleStatus, OperatorFixity,
};
pub use registry::{ Generation, ModuleTable, RecordId };
pub use search::SERIALIZED_MODULE_EXTENSION ;
pub use source_map::{ NoSourceMap, SourceLoc, SourceMap };
