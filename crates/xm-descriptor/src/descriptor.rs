//! Parsed modification descriptor model.
//!
//! A descriptor lists the edits to merge into an Xcode project:
//! libraries (optionally weak-linked), frameworks, header search paths,
//! source files and folders, exclusion patterns, and a small set of
//! build-setting overrides. The project mutation itself happens
//! downstream; this crate only produces the typed value.

use serde::Serialize;

/// Delimiter between a library path and its trailing link-type tag.
const LINK_TYPE_DELIMITER: char = ':';

/// Link-type tag that marks a weak library reference.
const WEAK_TAG: &str = "weak";

/// A fully parsed modification descriptor.
///
/// Every collection field is an empty sequence when the corresponding key
/// is absent from the source document; no field is ever an absent marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Directory relative paths in the descriptor resolve against.
    /// Carried verbatim from the caller, never normalized.
    pub base_path: String,

    /// Project group the additions are placed under (empty = project root).
    pub group: String,

    /// Libraries to link, with their weak-link flags.
    pub libraries: Vec<LibraryEntry>,

    /// System frameworks to link.
    pub frameworks: Vec<String>,

    /// Header search paths to append.
    pub header_paths: Vec<String>,

    /// Individual source files to add.
    pub files: Vec<String>,

    /// Folder trees to add recursively.
    pub folders: Vec<String>,

    /// Patterns for paths to skip while adding folders.
    pub excludes: Vec<String>,

    /// Build-setting overrides.
    pub build_settings: BuildSettings,
}

impl Descriptor {
    /// Number of additions the descriptor carries across all collection
    /// fields. The group is a placement hint and does not count.
    pub fn entry_count(&self) -> usize {
        self.libraries.len()
            + self.frameworks.len()
            + self.header_paths.len()
            + self.files.len()
            + self.folders.len()
            + self.excludes.len()
    }

    /// Whether applying the descriptor would change nothing.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0 && self.build_settings.is_empty()
    }
}

/// One linked-library reference: its path plus how it links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    /// Library path as written in the descriptor.
    pub path: String,

    /// True when the entry carries a `weak` link-type tag.
    pub weak: bool,
}

impl LibraryEntry {
    /// Split a raw `path[:link-type]` entry into a path and a weak flag.
    ///
    /// The split happens at the last delimiter, so the tag is always the
    /// trailing token. The `weak` tag matches case-insensitively; any
    /// other tag is accepted and yields a normally-linked entry. This
    /// never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.rfind(LINK_TYPE_DELIMITER) {
            Some(pos) => LibraryEntry {
                path: raw[..pos].to_string(),
                weak: raw[pos + 1..].eq_ignore_ascii_case(WEAK_TAG),
            },
            None => LibraryEntry {
                path: raw.to_string(),
                weak: false,
            },
        }
    }
}

/// Build-setting overrides a descriptor may carry.
///
/// The exception settings hold the raw textual value from the descriptor
/// ("YES"/"NO"); empty means the setting is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BuildSettings {
    /// Extra linker flags (OTHER_LDFLAGS).
    pub other_linker_flags: Vec<String>,

    /// GCC_ENABLE_CPP_EXCEPTIONS value, empty when unset.
    pub gcc_enable_cpp_exceptions: String,

    /// GCC_ENABLE_OBJC_EXCEPTIONS value, empty when unset.
    pub gcc_enable_objc_exceptions: String,
}

impl BuildSettings {
    /// Whether no build setting is overridden.
    pub fn is_empty(&self) -> bool {
        self.other_linker_flags.is_empty()
            && self.gcc_enable_cpp_exceptions.is_empty()
            && self.gcc_enable_objc_exceptions.is_empty()
    }
}
