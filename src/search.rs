//! The on-disk search resolver.
//!
//! Given a module name and the location of the import statement, walks the
//! candidate locations in order and returns the first buffer that reads
//! successfully. Pre-registered in-memory buffers are checked by the loader
//! before this resolver is consulted at all.

use std::path::{ Path, PathBuf };

use crate::buffer::ModuleBuffer ;
use crate::context::CompilationContext ;
use crate::source_map::SourceLoc ;



/// File extension of binary-serialized modules.
pub const SERIALIZED_MODULE_EXTENSION: &str = "modbin" ;

/// Finds `<name>.modbin` on disk.
///
/// Candidates, in order: the directory of the file containing `origin`
/// (when the source map can resolve it and it has a parent directory), the
/// process working directory, then each configured search path. The first
/// successful read wins.
///
/// # Errors
/// When every candidate fails, the error of the last one tried is returned;
/// earlier failures are dropped regardless of kind. A `NotFound` result
/// means the module simply is not there and is not worth a diagnostic.
pub(crate) fn find_module(
	ctx: &CompilationContext,
	name: &str,
	origin: Option<SourceLoc>,
) -> std::io::Result<ModuleBuffer> {

	let filename = format!( "{}.{}", name, SERIALIZED_MODULE_EXTENSION );
	let mut error = std::io::Error::from( std::io::ErrorKind::NotFound );

	// Next to the importing file first.
	if let Some( dir ) = origin
		.and_then(| loc | ctx.source_map().buffer_identifier_containing( loc ))
		.and_then(| identifier | parent_dir( &identifier ))
	{
		match ModuleBuffer::from_file( &dir.join( &filename )) {
			Ok( buffer ) => return Ok( buffer ),
			Err( err ) => error = err,
		}
	}

	// Then the working directory.
	match ModuleBuffer::from_file( Path::new( &filename )) {
		Ok( buffer ) => return Ok( buffer ),
		Err( err ) => error = err,
	}

	// Finally each import search path, in configured order.
	for dir in ctx.search_paths() {
		match ModuleBuffer::from_file( &dir.join( &filename )) {
			Ok( buffer ) => return Ok( buffer ),
			Err( err ) => error = err,
		}
	}

	Err( error )

}

fn parent_dir( buffer_identifier: &str ) -> Option<PathBuf> {
	Path::new( buffer_identifier )
		.parent()
		.filter(| parent | !parent.as_os_str().is_empty() )
		.map( Path::to_path_buf )
}
