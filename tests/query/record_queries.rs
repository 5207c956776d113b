use module_link::{ LookupKind, OperatorFixity, SerializedModuleLoader };

use crate::mock::{ self, CollectedDiagnostics, MockRecord };

fn loaded_widgets() -> ( SerializedModuleLoader<MockRecord>, std::rc::Rc<module_link::Module> ) {
	let diagnostics = CollectedDiagnostics::new();
	let mut ctx = mock::test_context( &diagnostics );
	let mut loader = SerializedModuleLoader::<MockRecord>::new();

	loader.register_buffer( "widgets", mock::text_buffer( "widgets", concat!(
		"value button\n",
		"decl Button\n",
		"decl Label\n",
		"member render\n",
		"member layout\n",
		"operator +\n",
		"import core\n",
		"import-private internals\n",
		"link libwidgets\n",
	)));
	let module = loader.load_module( &mut ctx, &mock::module_path( "widgets" )).unwrap();
	( loader, module )
}

#[test]
fn operator_lookup_finds_declared_operators() {
	let ( loader, module ) = loaded_widgets();
	assert_eq!( loader.lookup_operator( &module, "+", OperatorFixity::Infix ), Some( "+".to_string() ));
	assert!( loader.lookup_operator( &module, "-", OperatorFixity::Infix ).is_none() );
}

#[test]
fn imported_modules_respect_the_private_flag() {
	let ( loader, module ) = loaded_widgets();
	assert_eq!( loader.imported_modules( &module, false ), vec![ "core".to_string() ]);
	assert_eq!(
		loader.imported_modules( &module, true ),
		vec![ "core".to_string(), "internals".to_string() ],
	);
}

#[test]
fn visible_decls_stream_lazily_in_order() {
	let ( loader, module ) = loaded_widgets();
	let decls: Vec<&String> = loader
		.visible_decls( &module, &[], LookupKind::Unqualified )
		.collect();
	assert_eq!( decls, vec![ "Button", "Label" ]);
}

#[test]
fn class_member_queries_reach_the_record() {
	let ( loader, module ) = loaded_widgets();
	let members: Vec<&String> = loader.lookup_class_members( &module, &[] ).collect();
	assert_eq!( members, vec![ "render", "layout" ]);
	assert_eq!(
		loader.lookup_class_member( &module, &[], "render" ),
		vec![ "render".to_string() ],
	);
}

#[test]
fn link_libraries_are_streamed_through_the_callback() {
	let ( loader, module ) = loaded_widgets();
	let mut linked = Vec::new();
	loader.link_libraries( &module, &mut | library | linked.push( library.clone() ));
	assert_eq!( linked, vec![ "libwidgets".to_string() ]);
}

#[test]
fn display_decls_cover_the_whole_module() {
	let ( loader, module ) = loaded_widgets();
	assert_eq!( loader.display_decls( &module ), vec![ "Button".to_string(), "Label".to_string() ]);
}

#[test]
#[should_panic( expected = "top-level decls" )]
fn multi_element_access_paths_are_a_caller_bug() {
	let ( loader, module ) = loaded_widgets();
	let scope = [
		module_link::ModulePathElem::new( "a", None ),
		module_link::ModulePathElem::new( "b", None ),
	];
	let _ = loader.lookup_value( &module, &scope, "button", LookupKind::Unqualified );
}
