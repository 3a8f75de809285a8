//! Typed loading of Xcode modification descriptors.
//!
//! A modification descriptor is a small JSON document describing edits to
//! merge into an Xcode project: libraries to link (optionally weak),
//! frameworks, header search paths, source files and folders, exclusion
//! patterns, and a handful of build-setting overrides. This crate turns
//! descriptor text into a [`Descriptor`] value with defaults applied and
//! library link-type tags split out; applying the edits to a project is a
//! downstream concern.
//!
//! ```
//! use xm_descriptor::load_from_str;
//!
//! let descriptor = load_from_str(
//!     "mods/analytics",
//!     r#"{"libs": ["libz.dylib", "libsqlite3.0.dylib:weak"]}"#,
//! )?;
//!
//! assert_eq!(descriptor.base_path, "mods/analytics");
//! assert_eq!(descriptor.libraries[0].path, "libz.dylib");
//! assert!(descriptor.libraries[1].weak);
//! # Ok::<(), xm_descriptor::DescriptorError>(())
//! ```

pub mod descriptor;
pub mod error;
pub mod loader;

pub use descriptor::{BuildSettings, Descriptor, LibraryEntry};
pub use error::{DescriptorError, Result};
pub use loader::{load_from_file, load_from_str};
