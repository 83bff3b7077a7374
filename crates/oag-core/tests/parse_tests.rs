use oag_core::parse;
use oag_core::parse::parameter::{ParameterLocation, ParameterOrRef};
use oag_core::parse::request_body::RequestBodyOrRef;
use oag_core::parse::schema::SchemaOrRef;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

#[test]
fn parse_petstore_yaml() {
    let spec = parse::from_yaml(PETSTORE).expect("should parse petstore");
    assert_eq!(spec.openapi, "3.0.3");
    assert_eq!(spec.info.title, "Petstore");
    assert_eq!(spec.info.description.as_deref(), Some("A sample pet store."));
    assert_eq!(
        spec.paths.keys().collect::<Vec<_>>(),
        ["/pets", "/pets/{petId}", "/pets/{petId}/photo", "/health"]
    );

    let pets = &spec.paths["/pets"];
    let list = pets.get.as_ref().expect("should have GET /pets");
    assert_eq!(list.operation_id.as_deref(), Some("listPets"));
    assert!(matches!(
        &list.parameters[0],
        ParameterOrRef::Ref { ref_path } if ref_path == "#/components/parameters/Limit"
    ));

    let create = pets.post.as_ref().expect("should have POST /pets");
    assert!(create.operation_id.is_none());
    assert!(matches!(
        create.request_body,
        Some(RequestBodyOrRef::Ref { .. })
    ));
}

#[test]
fn parse_path_level_parameters() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let item = &spec.paths["/pets/{petId}"];
    assert_eq!(item.parameters.len(), 1);
    match &item.parameters[0] {
        ParameterOrRef::Parameter(p) => {
            assert_eq!(p.name, "petId");
            assert_eq!(p.location, ParameterLocation::Path);
            assert!(!p.required);
        }
        ParameterOrRef::Ref { .. } => panic!("expected inline parameter"),
    }
    assert!(item.get.is_some());
    assert!(item.delete.is_some());
    assert!(item.put.is_none());
}

#[test]
fn parse_components() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let components = spec.components.expect("should have components");
    assert!(components.parameters.contains_key("Limit"));
    assert!(components.request_bodies.contains_key("PetBody"));

    match &components.schemas["Pet"] {
        SchemaOrRef::Schema(pet) => assert_eq!(pet.all_of.len(), 2),
        SchemaOrRef::Ref { .. } => panic!("Pet should be inline"),
    }
    match &components.schemas["NewPet"] {
        SchemaOrRef::Schema(new_pet) => {
            assert_eq!(new_pet.required, ["name"]);
            assert_eq!(new_pet.properties.len(), 3);
        }
        SchemaOrRef::Ref { .. } => panic!("NewPet should be inline"),
    }
}

#[test]
fn parse_json_document() {
    let json = r#"{
        "openapi": "3.1.0",
        "info": {"title": "Tiny", "version": "0.1"},
        "paths": {"/ping": {"get": {"responses": {"200": {"description": "pong"}}}}}
    }"#;
    let spec = parse::from_json(json).unwrap();
    assert_eq!(spec.info.version, "0.1");
    assert!(spec.paths["/ping"].get.is_some());
}

#[test]
fn reject_unsupported_version() {
    let err = parse::from_yaml("openapi: 2.0.0\ninfo: {title: Old, version: '1'}\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unsupported OpenAPI version 2.0.0, expected 3.x");
}
