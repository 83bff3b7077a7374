use std::path::Path;

use oag_core::CodeGenerator;
use oag_core::parse;
use oag_core::transform;
use oag_pistache_server::generator::{ApiContext, PistacheContext};
use oag_pistache_server::model::ModelContext;
use oag_pistache_server::operation::OperationContext;
use oag_pistache_server::config::CONFIG_FILE_NAME;
use oag_pistache_server::{PistacheConfig, PistacheServerGenerator, load_config};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

fn generate(config: &PistacheConfig) -> PistacheContext {
    PistacheServerGenerator
        .generate_from_yaml(PETSTORE, config)
        .expect("should build context")
}

fn model<'a>(ctx: &'a PistacheContext, name: &str) -> &'a ModelContext {
    ctx.models
        .iter()
        .find(|m| m.classname == name)
        .unwrap_or_else(|| panic!("should have model {name}"))
}

fn api<'a>(ctx: &'a PistacheContext, name: &str) -> &'a ApiContext {
    ctx.apis
        .iter()
        .find(|a| a.classname == name)
        .unwrap_or_else(|| panic!("should have api {name}"))
}

fn operation<'a>(api: &'a ApiContext, nickname: &str) -> &'a OperationContext {
    api.operations
        .iter()
        .find(|op| op.nickname == nickname)
        .unwrap_or_else(|| panic!("should have operation {nickname}"))
}

#[test]
fn pet_model_declarations_and_defaults() {
    let ctx = generate(&PistacheConfig::default());
    let pet = model(&ctx, "Pet");
    assert_eq!(pet.header_file, "model/Pet.h");
    assert_eq!(pet.source_file, "model/Pet.cpp");

    let vars: Vec<(&str, &str, &str)> = pet
        .vars
        .iter()
        .map(|v| (v.name.as_str(), v.data_type.as_str(), v.default_value.as_str()))
        .collect();
    assert_eq!(
        vars,
        [
            ("Id", "int64_t", "0L"),
            (
                "Category",
                "org::openapitools::server::model::Category",
                "std::make_shared<Category>()"
            ),
            ("Name", "std::string", "\"doggie\""),
            ("PhotoUrls", "std::vector<std::string>", "std::vector<std::string>()"),
            (
                "Tags",
                "std::vector<org::openapitools::server::model::Tag>",
                "std::vector<std::shared_ptr<Tag>>()"
            ),
            ("Status", "std::string", "\"\""),
            ("Weight", "float", "374.0f"),
            ("r_class", "std::string", "\"\""),
            (
                "Attributes",
                "std::map<std::string, std::string>",
                "std::map<std::string, std::string>()"
            ),
        ]
    );
    assert!(pet.vars[2].required);
    assert!(!pet.vars[0].required);
}

#[test]
fn model_imports_are_resolved_and_deduplicated() {
    let ctx = generate(&PistacheConfig::default());
    let pet = model(&ctx, "Pet");
    assert_eq!(
        pet.imports.iter().map(String::as_str).collect::<Vec<_>>(),
        [
            "#include \"Category.h\"",
            "#include \"Tag.h\"",
            "#include <string>",
            "#include <vector>",
            "#include <map>",
        ]
    );

    let order = model(&ctx, "Order");
    assert_eq!(
        order.imports.iter().map(String::as_str).collect::<Vec<_>>(),
        ["#include <string>"]
    );
    let defaults: Vec<&str> = order.vars.iter().map(|v| v.default_value.as_str()).collect();
    assert_eq!(defaults, ["0L", "1", "\"\"", "false"]);
}

#[test]
fn alias_schemas_declare_their_target() {
    let ctx = generate(&PistacheConfig::default());
    assert!(ctx.models.iter().all(|m| m.classname != "PetIds"));

    let adoption = model(&ctx, "Adoption");
    let ids = &adoption.vars[0];
    assert_eq!(ids.data_type, "std::vector<int64_t>");
    assert_eq!(ids.default_value, "std::vector<int64_t>()");
    assert!(ids.is_container);
    assert_eq!(
        adoption.imports.iter().map(String::as_str).collect::<Vec<_>>(),
        ["#include <vector>"]
    );
}

#[test]
fn string_enum_container_flag() {
    let ctx = generate(&PistacheConfig::default());
    assert!(model(&ctx, "ColorOrCustom").is_string_enum_container);
    assert!(!model(&ctx, "Pet").is_string_enum_container);

    let color = model(&ctx, "Color");
    assert!(color.is_enum);
    assert_eq!(color.enum_values, ["red", "green", "blue"]);

    let json = serde_json::to_value(model(&ctx, "ColorOrCustom")).unwrap();
    assert_eq!(json["x-is-string-enum-container"], true);
}

#[test]
fn api_classes_and_files() {
    let ctx = generate(&PistacheConfig::default());
    let names: Vec<&str> = ctx.apis.iter().map(|a| a.classname.as_str()).collect();
    assert_eq!(names, ["PetApi", "StoreApi"]);

    let pet = api(&ctx, "PetApi");
    assert_eq!(pet.classname_snake_upper_case, "PET_API");
    assert_eq!(pet.classname_snake_lower_case, "pet_api");
    assert_eq!(pet.files.header, "api/PetApi.h");
    assert_eq!(pet.files.source, "api/PetApi.cpp");
    assert_eq!(pet.files.impl_header, "impl/PetApiImpl.h");
    assert_eq!(pet.files.impl_source, "impl/PetApiImpl.cpp");
    assert!(pet.has_model_import);

    let nicknames: Vec<&str> = pet.operations.iter().map(|op| op.nickname.as_str()).collect();
    assert_eq!(
        nicknames,
        [
            "addPet",
            "findPetsByStatus",
            "updatePetWithForm",
            "deletePet",
            "downloadImage"
        ]
    );
}

#[test]
fn operation_extensions() {
    let ctx = generate(&PistacheConfig::default());
    let pet = api(&ctx, "PetApi");

    let add = operation(pet, "addPet");
    assert_eq!(add.http_method, "Post");
    assert!(add.extensions.consumes_json);
    assert!(add.extensions.is_parsing_supported);
    assert_eq!(
        add.extensions.response.as_deref(),
        Some("org::openapitools::server::model::Pet")
    );
    assert_eq!(add.params[0].base_name, "pet");
    assert_eq!(add.params[0].is_string_or_date, Some(false));

    let delete = operation(pet, "deletePet");
    assert_eq!(delete.http_method, "Delete");
    assert_eq!(delete.extensions.path, "/pet/:petId");
    assert!(delete.extensions.response.is_none());

    let form = operation(pet, "updatePetWithForm");
    assert!(!form.extensions.is_parsing_supported);
    assert!(!form.extensions.consumes_json);

    let image = operation(pet, "downloadImage");
    assert_eq!(image.extensions.path, "/pet/:petId/image");
    assert!(image.extensions.response_is_http_content);

    let store = api(&ctx, "StoreApi");
    let inventory = operation(store, "getInventory");
    assert_eq!(
        inventory.extensions.response.as_deref(),
        Some("std::map<std::string, int32_t>")
    );
    assert!(!inventory.requires_model_import);

    let order = operation(store, "placeOrder");
    assert!(!order.extensions.consumes_json, "parameterized media type");
    assert!(order.requires_model_import);

    let json = serde_json::to_value(delete).unwrap();
    assert_eq!(json["x-codegen-pistache-path"], "/pet/:petId");
    assert_eq!(json["x-codegen-pistache-consumes-json"], false);
    assert_eq!(json["x-codegen-response-ishttpcontent"], false);
    assert!(json.get("x-codegen-response").is_none());
}

#[test]
fn header_and_query_parameters() {
    let ctx = generate(&PistacheConfig::default());
    let pet = api(&ctx, "PetApi");

    let find = operation(pet, "findPetsByStatus");
    let status = &find.params[0];
    assert_eq!(status.data_type, "std::optional<std::vector<std::string>>");
    assert_eq!(status.base_type, "std::optional<std::string>");
    assert!(status.is_optional);
    assert!(status.required);
    let limit = &find.params[1];
    assert_eq!(limit.data_type, "std::optional<int32_t>");
    assert_eq!(limit.base_type, "int32_t");

    let delete = operation(pet, "deletePet");
    let api_key = &delete.params[1];
    assert_eq!(api_key.location, "header");
    assert_eq!(api_key.data_type, "std::optional<Pistache::Http::Header::Raw>");
    assert_eq!(api_key.base_type, "std::optional<Pistache::Http::Header::Raw>");
    let pet_id = &delete.params[0];
    assert_eq!(pet_id.data_type, "int64_t");
    assert!(!pet_id.is_optional);
}

#[test]
fn context_defaults() {
    let ctx = generate(&PistacheConfig::default());
    assert_eq!(ctx.app_name, "Pistache Petstore");
    assert_eq!(ctx.app_version, "2.1.0");
    assert!(ctx.add_external_libs);
    assert_eq!(ctx.reserved_word_prefix, "r_");
    assert_eq!(ctx.model_templates.header, "model-header");
    assert_eq!(ctx.namespaces.helpers.name, "org::openapitools::server::helpers");
    assert_eq!(
        ctx.namespaces.api.declarations,
        ["org", "openapitools", "server", "api"]
    );
    assert_eq!(ctx.supporting_files.len(), 6);
    assert_eq!(ctx.supporting_files[0].destination, "api/ApiBase.h");
}

#[test]
fn config_file_changes_context() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(CONFIG_FILE_NAME);
    let config = load_config(&path).unwrap().expect("fixture config exists");
    let ctx = generate(&config);

    assert!(!ctx.add_external_libs);
    assert_eq!(ctx.model_templates.header, "model-struct-header");
    assert_eq!(ctx.model_templates.source, "model-struct-source");

    let pet = model(&ctx, "PsPet");
    assert_eq!(pet.header_file, "generated/model/PsPet.h");
    assert_eq!(pet.vars[1].name, "category");
    assert_eq!(pet.vars[1].data_type, "petstore::model::PsCategory");
    assert_eq!(pet.vars[1].default_value, "std::make_shared<PsCategory>()");

    let pet_api = api(&ctx, "PetApi");
    assert_eq!(pet_api.files.impl_header, "generated/impl/PetApiImpl.h");
    assert!(pet_api.operations.iter().any(|op| op.nickname == "searchPets"));
    let image = operation(pet_api, "downloadImage");
    assert_eq!(
        image.extensions.response.as_deref(),
        Some("petstore::model::PsHttpContent")
    );
    assert!(image.extensions.response_is_http_content);
    assert_eq!(
        ctx.supporting_files[1].destination,
        "generated/model/PsHelpers.h"
    );
}

#[test]
fn generator_trait_on_transformed_document() {
    let spec = parse::from_yaml(PETSTORE).unwrap();
    let ir = transform::transform(&spec).unwrap();
    let ctx = PistacheServerGenerator
        .generate(&ir, &PistacheConfig::default())
        .unwrap();
    assert_eq!(ctx.models.len(), ir.models.len());
    assert_eq!(ctx.apis.len(), ir.groups.len());
}
