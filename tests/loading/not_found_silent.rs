use module_link::SerializedModuleLoader ;

use crate::mock::{ self, CollectedDiagnostics, MockRecord };

#[test]
fn missing_module_yields_no_handle_and_no_diagnostic() {

	let empty_dir = tempfile::tempdir().unwrap();
	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context( &diagnostics )
		.with_search_paths( vec![ empty_dir.path().to_path_buf() ]);

	let mut loader = SerializedModuleLoader::<MockRecord>::new();
	let module = loader.load_module( &mut ctx, &mock::module_path( "nowhere" ));

	assert!( module.is_none() );
	assert!( diagnostics.is_empty() );
	assert!( ctx.modules().is_empty() );
	assert_eq!( u32::from( ctx.current_generation() ), 0 );

}
