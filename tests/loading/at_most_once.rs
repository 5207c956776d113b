use std::rc::Rc ;

use module_link::SerializedModuleLoader ;

use crate::mock::{ self, CollectedDiagnostics, MockRecord };

#[test]
fn second_import_returns_the_same_handle_without_searching() {

	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context( &diagnostics );
	let mut loader = SerializedModuleLoader::<MockRecord>::new();

	loader.register_buffer( "widgets", mock::text_buffer( "widgets", "value button" ));
	let first = loader.load_module( &mut ctx, &mock::module_path( "widgets" )).unwrap();

	// A second pending buffer under the same name: a repeated search would
	// consume it and diagnose its malformed contents.
	loader.register_buffer( "widgets", mock::text_buffer( "widgets", "malformed" ));
	let second = loader.load_module( &mut ctx, &mock::module_path( "widgets" )).unwrap();

	assert!( Rc::ptr_eq( &first, &second ));
	assert!( loader.has_registered_buffer( "widgets" ));
	assert!( diagnostics.is_empty() );
	assert_eq!( ctx.modules().len(), 1 );

}
