use module_link::{ LookupKind, SerializedModuleLoader, SourceLoc };

use crate::mock::{ self, CollectedDiagnostics, MockRecord, ScriptedSourceMap };

fn found_marker(
	loader: &SerializedModuleLoader<MockRecord>,
	module: &module_link::Module,
	marker: &str,
) -> bool {
	!loader.lookup_value( module, &[], marker, LookupKind::Unqualified ).is_empty()
}

#[test]
fn registered_buffer_wins_over_every_disk_location() {

	let importer_dir = tempfile::tempdir().unwrap();
	let search_dir = tempfile::tempdir().unwrap();
	mock::write_module_file( importer_dir.path(), "widgets", "value importer" );
	mock::write_module_file( search_dir.path(), "widgets", "value search" );

	let loc = SourceLoc::new( 7 );
	let sources = ScriptedSourceMap::new()
		.with( loc, importer_dir.path().join( "main.src" ).display().to_string() );

	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context_with_sources( &diagnostics, sources )
		.with_search_paths( vec![ search_dir.path().to_path_buf() ]);

	let mut loader = SerializedModuleLoader::<MockRecord>::new();
	loader.register_buffer( "widgets", mock::text_buffer( "widgets", "value registered" ));

	let module = loader.load_module( &mut ctx, &mock::module_path_at( "widgets", loc )).unwrap();
	assert!( found_marker( &loader, &module, "registered" ));
	assert!( !found_marker( &loader, &module, "importer" ));

}

#[test]
fn importer_directory_wins_over_search_paths() {

	let importer_dir = tempfile::tempdir().unwrap();
	let search_dir = tempfile::tempdir().unwrap();
	mock::write_module_file( importer_dir.path(), "widgets", "value importer" );
	mock::write_module_file( search_dir.path(), "widgets", "value search" );

	let loc = SourceLoc::new( 11 );
	let sources = ScriptedSourceMap::new()
		.with( loc, importer_dir.path().join( "main.src" ).display().to_string() );

	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context_with_sources( &diagnostics, sources )
		.with_search_paths( vec![ search_dir.path().to_path_buf() ]);

	let mut loader = SerializedModuleLoader::<MockRecord>::new();
	let module = loader.load_module( &mut ctx, &mock::module_path_at( "widgets", loc )).unwrap();

	assert!( found_marker( &loader, &module, "importer" ));
	assert!( !found_marker( &loader, &module, "search" ));

}

#[test]
fn search_paths_are_consulted_in_configured_order() {

	let first_dir = tempfile::tempdir().unwrap();
	let second_dir = tempfile::tempdir().unwrap();
	mock::write_module_file( first_dir.path(), "widgets", "value first" );
	mock::write_module_file( second_dir.path(), "widgets", "value second" );

	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context( &diagnostics ).with_search_paths( vec![
		first_dir.path().to_path_buf(),
		second_dir.path().to_path_buf(),
	]);

	let mut loader = SerializedModuleLoader::<MockRecord>::new();
	let module = loader.load_module( &mut ctx, &mock::module_path( "widgets" )).unwrap();

	assert!( found_marker( &loader, &module, "first" ));
	assert!( !found_marker( &loader, &module, "second" ));

}
