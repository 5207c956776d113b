use module_link::{ Generation, LookupKind, OperatorFixity, SerializedModuleLoader };

use crate::mock::{ self, CollectedDiagnostics, MockRecord };

#[test]
fn every_query_against_an_inert_module_returns_nothing() {

	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context( &diagnostics );
	let mut loader = SerializedModuleLoader::<MockRecord>::new();

	// Fully populated record whose dependency never loads.
	loader.register_buffer( "app", mock::text_buffer( "app", concat!(
		"dep core\n",
		"value main\n",
		"decl Main\n",
		"member render\n",
		"operator +\n",
		"import core\n",
		"link libapp\n",
	)));
	let module = loader.load_module( &mut ctx, &mock::module_path( "app" )).unwrap();
	assert!( !module.as_serialized().unwrap().is_usable() );

	assert!( loader.lookup_value( &module, &[], "main", LookupKind::Unqualified ).is_empty() );
	assert!( loader.lookup_operator( &module, "+", OperatorFixity::Infix ).is_none() );
	assert!( loader.imported_modules( &module, true ).is_empty() );
	assert!( loader.visible_decls( &module, &[], LookupKind::Unqualified ).next().is_none() );
	assert!( loader.lookup_class_members( &module, &[] ).next().is_none() );
	assert!( loader.lookup_class_member( &module, &[], "render" ).is_empty() );
	assert!( loader.display_decls( &module ).is_empty() );

	let mut linked = Vec::new();
	loader.link_libraries( &module, &mut | library | linked.push( library.clone() ));
	assert!( linked.is_empty() );

	// The inert record never takes part in incremental queries either.
	loader.load_extensions( "Main", Generation::base() );
	loader.load_decls_conforming_to( "Equatable", Generation::base() );
	assert_eq!( loader.usable_records_since( Generation::base() ).count(), 0 );

}
