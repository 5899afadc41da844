use serde::{Deserialize, Deserializer, Serialize};

// @module: Translation entry value type

// @struct: Single catalog entry as supplied by the string extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    // @field: Source locations (file:line), in extraction order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub positions: Vec<String>,

    // @field: Extracted comments, in extraction order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,

    // @field: Disambiguating context (msgctxt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    // @field: Source text (msgid), empty for the header entry
    #[serde(default)]
    pub source: String,

    // @field: Plural source text (msgid_plural)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_plural: Option<String>,

    // @field: Translated text (msgstr)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

// Extractors write `null` for an empty list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TranslationEntry {
    /// Creates an entry with only the source text set
    pub fn new(source: impl Into<String>) -> Self {
        TranslationEntry {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.positions.push(position.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_plural(mut self, source_plural: impl Into<String>) -> Self {
        self.source_plural = Some(source_plural.into());
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Context if present and non-empty
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|c| !c.is_empty())
    }

    /// Plural source if present and non-empty
    pub fn source_plural(&self) -> Option<&str> {
        self.source_plural.as_deref().filter(|p| !p.is_empty())
    }

    /// Translation if present and non-empty
    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref().filter(|t| !t.is_empty())
    }

    // @returns: Whether this is the catalog header entry
    pub fn is_header(&self) -> bool {
        self.source.is_empty() && self.context().is_none()
    }

    // @returns: Identity used to merge duplicate extractions
    pub fn key(&self) -> (Option<&str>, &str) {
        (self.context(), self.source.as_str())
    }

    /// Folds a later extraction of the same message into this one.
    ///
    /// Positions and comments are appended in order, skipping values already
    /// present. An existing plural or translation is never overwritten.
    pub fn absorb(&mut self, other: TranslationEntry) {
        for position in other.positions {
            if !self.positions.contains(&position) {
                self.positions.push(position);
            }
        }

        for comment in other.comments {
            if !self.comments.contains(&comment) {
                self.comments.push(comment);
            }
        }

        if self.source_plural().is_none() && other.source_plural.as_deref().is_some_and(|p| !p.is_empty()) {
            self.source_plural = other.source_plural;
        }

        if self.translation().is_none() && other.translation.as_deref().is_some_and(|t| !t.is_empty()) {
            self.translation = other.translation;
        }
    }
}
