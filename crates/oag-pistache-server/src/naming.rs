use oag_core::transform::name_normalizer::normalize_name;
use serde::Serialize;

use crate::config::{ModelStyle, PistacheSettings};

/// C++ keywords plus identifiers that commonly collide with platform macros.
const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char16_t", "char32_t", "class", "compl", "concept", "const",
    "constexpr", "const_cast", "continue", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "linux", "long", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "NULL", "nullptr", "operator", "or", "or_eq", "private",
    "protected", "public", "register", "reinterpret_cast", "requires", "return", "short",
    "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid",
    "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
    "while", "xor", "xor_eq",
];

pub const API_FOLDER: &str = "api";
pub const IMPL_FOLDER: &str = "impl";
pub const MODEL_FOLDER: &str = "model";

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Canonical class name for a model. Target tokens (`std::string`, `int32_t`, ...)
/// come back unchanged.
pub fn to_model_name(name: &str, settings: &PistacheSettings) -> String {
    if settings.is_known_token(name) {
        return name.to_string();
    }
    let pascal = normalize_name(name).pascal_case;
    let prefixed = format!("{}{pascal}", settings.model_name_prefix);
    if prefixed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{prefixed}")
    } else {
        prefixed
    }
}

/// Member/parameter variable name.
pub fn to_var_name(name: &str, settings: &PistacheSettings) -> String {
    if is_reserved_word(name) {
        return format!("{}{name}", settings.reserved_word_prefix);
    }
    let camel = normalize_name(name).camel_case;
    if is_reserved_word(&camel) {
        return format!("{}{camel}", settings.reserved_word_prefix);
    }
    if settings.variable_name_first_character_uppercase {
        upper_first(&camel)
    } else {
        camel
    }
}

/// API class name for an operation group: `pet` → `PetApi`.
pub fn to_api_name(group: &str) -> String {
    format!("{}Api", normalize_name(group).pascal_case)
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Templates rendered once per API class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTemplate {
    Header,
    Source,
    ImplHeader,
    ImplSource,
}

impl ApiTemplate {
    fn suffix(self) -> &'static str {
        match self {
            ApiTemplate::Header | ApiTemplate::ImplHeader => ".h",
            ApiTemplate::Source | ApiTemplate::ImplSource => ".cpp",
        }
    }

    fn is_impl(self) -> bool {
        matches!(self, ApiTemplate::ImplHeader | ApiTemplate::ImplSource)
    }
}

fn join(output_folder: &str, rest: &str) -> String {
    if output_folder.is_empty() {
        rest.to_string()
    } else {
        format!("{output_folder}/{rest}")
    }
}

/// Output path for one API template. Implementation templates go through
/// [`impl_filename_from_api_filename`].
pub fn api_filename(classname: &str, template: ApiTemplate, settings: &PistacheSettings) -> String {
    let api_file = join(
        &settings.output_folder,
        &format!("{API_FOLDER}/{classname}{}", template.suffix()),
    );
    if template.is_impl() {
        impl_filename_from_api_filename(&api_file, &settings.output_folder)
    } else {
        api_file
    }
}

/// `api/PetApi.h` → `impl/PetApiImpl.h`
pub fn impl_filename_from_api_filename(api_file: &str, output_folder: &str) -> String {
    let with_marker = match api_file.rfind('.') {
        Some(dot) => format!("{}Impl{}", &api_file[..dot], &api_file[dot..]),
        None => format!("{api_file}Impl"),
    };
    let api_dir = join(output_folder, API_FOLDER);
    let impl_dir = join(output_folder, IMPL_FOLDER);
    with_marker.replacen(&api_dir, &impl_dir, 1)
}

/// Model header and source paths.
pub fn model_filenames(classname: &str, settings: &PistacheSettings) -> (String, String) {
    let stem = join(&settings.output_folder, &format!("{MODEL_FOLDER}/{classname}"));
    (format!("{stem}.h"), format!("{stem}.cpp"))
}

impl ModelStyle {
    /// Header and source template names.
    pub fn templates(self) -> (&'static str, &'static str) {
        match self {
            ModelStyle::Accessor => ("model-header", "model-source"),
            ModelStyle::Struct => ("model-struct-header", "model-struct-source"),
        }
    }
}

/// A file generated once per run rather than per model or API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportingFile {
    pub template: String,
    pub destination: String,
}

pub fn supporting_files(settings: &PistacheSettings) -> Vec<SupportingFile> {
    let prefix = &settings.model_name_prefix;
    let file = |template: &str, destination: String| SupportingFile {
        template: template.to_string(),
        destination: join(&settings.output_folder, &destination),
    };
    vec![
        file("api-base-header", format!("{API_FOLDER}/ApiBase.h")),
        file("helpers-header", format!("{MODEL_FOLDER}/{prefix}Helpers.h")),
        file("helpers-source", format!("{MODEL_FOLDER}/{prefix}Helpers.cpp")),
        file("main-api-server", format!("{prefix}main-api-server.cpp")),
        file("cmake", "CMakeLists.txt".to_string()),
        file("readme", "README.md".to_string()),
    ]
}
