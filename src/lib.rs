/*!
 * # potwriter - gettext catalog entry writer
 *
 * A Rust library for writing translation entries as gettext PO/POT catalog
 * text.
 *
 * ## Features
 *
 * - Byte-exact PO entry formatting:
 *   - extracted comments (`#.`) and source references (`#:`)
 *   - `msgctxt`, `msgid`, `msgid_plural` and `msgstr` fields
 *   - quote escaping that keeps existing escape sequences
 *   - multi-line strings split into one quoted line per source line
 * - Template (POT) and translated (PO) output from the same entries
 * - Header entry generation and duplicate entry merging
 * - LF or CRLF line endings
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `po_entry`: The translation entry value type
 * - `po_formatter`: Entry to catalog lines, the core of the crate
 * - `catalog`: Entry collections, header entry and rendering
 * - `app_config`: Configuration management
 * - `app_controller`: Entry files in, catalog files out
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code checks for the header
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod po_entry;
pub mod po_formatter;
pub mod catalog;
pub mod app_config;
pub mod app_controller;
pub mod file_utils;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use po_entry::TranslationEntry;
pub use po_formatter::{MessageField, PoFormatter};
pub use catalog::{Catalog, CatalogHeader, CatalogKind, LineEnding};
pub use app_config::Config;
pub use errors::{AppError, CatalogError};

/// Format one entry as catalog lines; see [`PoFormatter::format_entry`]
pub fn format_entry(entry: &TranslationEntry, include_translation: bool) -> Vec<String> {
    PoFormatter::format_entry(entry, include_translation)
}
