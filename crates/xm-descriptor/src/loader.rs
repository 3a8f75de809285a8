//! Descriptor loading: JSON text to [`Descriptor`].
//!
//! Loading is explicit rather than serde-derived because the base path
//! comes from the caller instead of the document, library entries need
//! link-type splitting, and absent keys must land on documented defaults.
//! Unknown keys are ignored.

use crate::descriptor::{BuildSettings, Descriptor, LibraryEntry};
use crate::error::{DescriptorError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// JSON field names understood by the loader.
const FIELD_GROUP: &str = "group";
const FIELD_LIBRARIES: &str = "libs";
const FIELD_FRAMEWORKS: &str = "frameworks";
const FIELD_HEADER_PATHS: &str = "headerpaths";
const FIELD_FILES: &str = "files";
const FIELD_FOLDERS: &str = "folders";
const FIELD_EXCLUDES: &str = "excludes";
const FIELD_BUILD_SETTINGS: &str = "buildSettings";

/// Setting keys inside `buildSettings`.
const SETTING_OTHER_LDFLAGS: &str = "OTHER_LDFLAGS";
const SETTING_CPP_EXCEPTIONS: &str = "GCC_ENABLE_CPP_EXCEPTIONS";
const SETTING_OBJC_EXCEPTIONS: &str = "GCC_ENABLE_OBJC_EXCEPTIONS";

/// Load a descriptor from a file on disk.
///
/// The base path of the returned descriptor is the directory containing
/// `path`, converted lossily when not valid UTF-8, or `"."` for a bare
/// filename. A missing file is [`DescriptorError::NotFound`]; other read
/// failures surface as [`DescriptorError::Io`].
pub fn load_from_file(path: &Path) -> Result<Descriptor> {
    if !path.is_file() {
        return Err(DescriptorError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let json = fs::read_to_string(path)?;

    debug!(path = %path.display(), bytes = json.len(), "Read descriptor file");

    let descriptor = load_from_str(&base_path_of(path), &json)?;

    info!(
        path = %path.display(),
        entries = descriptor.entry_count(),
        "Descriptor loaded"
    );

    Ok(descriptor)
}

/// Parse descriptor JSON text against a caller-supplied base path.
///
/// `base_path` is carried into the result verbatim. Fails when the text
/// is not valid JSON, when the root is not an object, or when a known
/// field holds a value of the wrong type; a missing key always yields
/// that field's empty default.
pub fn load_from_str(base_path: &str, json: &str) -> Result<Descriptor> {
    let root: Value = serde_json::from_str(json)?;

    let map = root.as_object().ok_or(DescriptorError::RootNotObject {
        found: json_kind(&root),
    })?;

    let descriptor = Descriptor {
        base_path: base_path.to_string(),
        group: string_field(map, FIELD_GROUP)?,
        libraries: string_array_field(map, FIELD_LIBRARIES)?
            .into_iter()
            .map(|raw| LibraryEntry::parse(&raw))
            .collect(),
        frameworks: string_array_field(map, FIELD_FRAMEWORKS)?,
        header_paths: string_array_field(map, FIELD_HEADER_PATHS)?,
        files: string_array_field(map, FIELD_FILES)?,
        folders: string_array_field(map, FIELD_FOLDERS)?,
        excludes: string_array_field(map, FIELD_EXCLUDES)?,
        build_settings: build_settings_field(map)?,
    };

    debug!(
        libraries = descriptor.libraries.len(),
        frameworks = descriptor.frameworks.len(),
        files = descriptor.files.len(),
        folders = descriptor.folders.len(),
        "Descriptor parsed"
    );

    Ok(descriptor)
}

/// Base path derived from a descriptor file location: its containing
/// directory, or `"."` when the path is a bare filename.
fn base_path_of(path: &Path) -> String {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

/// Extract an optional single-string field; a missing key yields empty.
fn string_field(map: &Map<String, Value>, field: &str) -> Result<String> {
    match map.get(field) {
        None => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(DescriptorError::FieldType {
            field: field.to_string(),
            expected: "a string",
            found: json_kind(other),
        }),
    }
}

/// Extract an optional list-of-strings field; a missing key yields empty.
fn string_array_field(map: &Map<String, Value>, field: &str) -> Result<Vec<String>> {
    let items = match map.get(field) {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(DescriptorError::FieldType {
                field: field.to_string(),
                expected: "an array of strings",
                found: json_kind(other),
            })
        }
    };

    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(value) => values.push(value.clone()),
            other => {
                return Err(DescriptorError::FieldType {
                    field: format!("{field}[{index}]"),
                    expected: "a string",
                    found: json_kind(other),
                })
            }
        }
    }

    Ok(values)
}

/// Extract the optional `buildSettings` object; a missing key yields the
/// all-defaults value with no sub-extraction.
fn build_settings_field(map: &Map<String, Value>) -> Result<BuildSettings> {
    let settings = match map.get(FIELD_BUILD_SETTINGS) {
        None => return Ok(BuildSettings::default()),
        Some(Value::Object(settings)) => settings,
        Some(other) => {
            return Err(DescriptorError::FieldType {
                field: FIELD_BUILD_SETTINGS.to_string(),
                expected: "an object",
                found: json_kind(other),
            })
        }
    };

    Ok(BuildSettings {
        other_linker_flags: string_array_field(settings, SETTING_OTHER_LDFLAGS)?,
        gcc_enable_cpp_exceptions: string_field(settings, SETTING_CPP_EXCEPTIONS)?,
        gcc_enable_objc_exceptions: string_field(settings, SETTING_OBJC_EXCEPTIONS)?,
    })
}

/// Human-readable name of a JSON value's kind, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
