use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::file_utils::FileManager;
use crate::po_entry::TranslationEntry;
use crate::po_formatter::PoFormatter;

// @module: Catalog assembly and rendering

/// Kind of catalog file to produce
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// POT template, every msgstr left empty
    #[default]
    Template,
    /// PO file with translations embedded
    Translated,
}

impl CatalogKind {
    // @returns: Formatter flag for entry msgstr
    pub fn include_translation(&self) -> bool {
        matches!(self, Self::Translated)
    }

    // @returns: File extension without dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Template => "pot",
            Self::Translated => "po",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Translated => write!(f, "translated"),
        }
    }
}

/// Line terminator used when joining catalog lines
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Metadata written into the header entry (`msgid ""`)
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogHeader {
    pub project_id_version: String,
    pub language: Option<String>,
    pub plural_forms: Option<String>,
    pub charset: String,
    pub creation_date: DateTime<Local>,
}

impl CatalogHeader {
    /// Create a header stamped with the current local time
    pub fn new(project_id_version: impl Into<String>) -> Self {
        CatalogHeader {
            project_id_version: project_id_version.into(),
            language: None,
            plural_forms: None,
            charset: "UTF-8".to_string(),
            creation_date: Local::now(),
        }
    }

    /// Header fields in catalog order
    pub fn fields(&self, kind: CatalogKind) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Project-Id-Version", self.project_id_version.clone()),
            ("POT-Creation-Date", self.creation_date.format("%Y-%m-%d %H:%M%z").to_string()),
        ];

        // Templates are language neutral
        if kind == CatalogKind::Translated {
            if let Some(language) = &self.language {
                fields.push(("Language", language.clone()));
            }
        }

        fields.push(("MIME-Version", "1.0".to_string()));
        fields.push(("Content-Type", format!("text/plain; charset={}", self.charset)));
        fields.push(("Content-Transfer-Encoding", "8bit".to_string()));

        if let Some(plural_forms) = &self.plural_forms {
            fields.push(("Plural-Forms", plural_forms.clone()));
        }

        fields
    }

    /// Build the header entry; its msgstr holds one `Key: value\n` per field.
    ///
    /// The last field keeps its `\n` like every other one, so the rendered
    /// msgstr intentionally ends with an empty `""` segment.
    pub fn to_entry(&self, kind: CatalogKind) -> TranslationEntry {
        let translation: String = self.fields(kind)
            .into_iter()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect();

        TranslationEntry::new("").with_translation(translation)
    }
}

/// Ordered collection of entries with an optional header entry
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    /// Header entry, always rendered first with its msgstr
    header: Option<TranslationEntry>,

    /// Entries in first-extraction order
    entries: Vec<TranslationEntry>,

    /// (context, source) -> index into `entries`
    index: HashMap<(Option<String>, String), usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries, merging duplicates
    pub fn from_entries(entries: impl IntoIterator<Item = TranslationEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.push(entry);
        }
        catalog
    }

    pub fn with_header(mut self, header: &CatalogHeader, kind: CatalogKind) -> Self {
        self.header = Some(header.to_entry(kind));
        self
    }

    pub fn header(&self) -> Option<&TranslationEntry> {
        self.header.as_ref()
    }

    /// Add an entry.
    ///
    /// An entry with the same context and source as an earlier one is merged
    /// into it instead of being appended. A header entry (empty source, no
    /// context) becomes the catalog header unless one is already set.
    pub fn push(&mut self, entry: TranslationEntry) {
        if entry.is_header() {
            match &mut self.header {
                Some(existing) => existing.absorb(entry),
                None => self.header = Some(entry),
            }
            return;
        }

        let key = (entry.context().map(str::to_string), entry.source.clone());

        if let Some(&position) = self.index.get(&key) {
            debug!("Merging duplicate entry for msgid {:?}", entry.source);
            self.entries[position].absorb(entry);
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Number of entries, header excluded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All catalog lines, entries separated by one empty line
    pub fn lines(&self, kind: CatalogKind) -> Vec<String> {
        let header = self.header.iter()
            .map(|entry| PoFormatter::format_entry(entry, true));
        let body = self.entries.iter()
            .map(|entry| PoFormatter::format_entry(entry, kind.include_translation()));

        let mut lines = Vec::new();
        for (index, entry_lines) in header.chain(body).enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(entry_lines);
        }

        lines
    }

    /// Render the catalog as text, ending with a single line terminator
    pub fn render(&self, kind: CatalogKind, line_ending: LineEnding) -> String {
        let lines = self.lines(kind);
        if lines.is_empty() {
            return String::new();
        }

        let terminator = line_ending.as_str();
        let mut output = lines.join(terminator);
        output.push_str(terminator);

        debug!("Rendered {} catalog with {} entries ({} lines)", kind, self.len(), lines.len());
        output
    }

    /// Write the rendered catalog to a file, creating parent directories
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, kind: CatalogKind, line_ending: LineEnding) -> Result<()> {
        let path = path.as_ref();
        FileManager::write_to_file(path, &self.render(kind, line_ending))
            .with_context(|| format!("Failed to write catalog: {}", path.display()))
    }
}
