/*!
 * Gettext catalog line formatting.
 *
 * Turns a single `TranslationEntry` into the lines of a PO/POT entry:
 * extracted comments, source references, `msgctxt`, `msgid`,
 * `msgid_plural` and `msgstr`, in that order. Parsers and diff tools on the
 * other side rely on this order and on the escaping byte for byte.
 */

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::po_entry::TranslationEntry;

/// Either an existing escape pair (kept) or a bare double quote (escaped)
static ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)\\(.)|""#).unwrap()
});

/// Literal marker written at the end of every non-final segment line
const NEWLINE_MARKER: &str = "\\n";

/// Message field keywords that can span several lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField {
    /// `msgid`
    Id,
    /// `msgid_plural`
    IdPlural,
    /// `msgstr`
    Str,
}

impl MessageField {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Id => "msgid",
            Self::IdPlural => "msgid_plural",
            Self::Str => "msgstr",
        }
    }

    // @returns: Whether an empty value drops the field entirely
    fn omits_empty(&self) -> bool {
        matches!(self, Self::IdPlural)
    }
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Stateless PO entry formatter
pub struct PoFormatter;

impl PoFormatter {
    /// Escape unescaped double quotes.
    ///
    /// Existing backslash escapes are copied through untouched, so `\"`
    /// stays `\"` while a bare `"` becomes `\"`. A lone trailing backslash is
    /// left as is. Meant to be applied once to raw text.
    pub fn escape_quotes(text: &str) -> String {
        ESCAPE_REGEX
            .replace_all(text, |caps: &Captures| match caps.get(1) {
                Some(escaped) => format!("\\{}", escaped.as_str()),
                None => "\\\"".to_string(),
            })
            .into_owned()
    }

    /// Lines encoding one message field.
    ///
    /// Single-line values give `keyword "value"`. Values containing line
    /// breaks give a `keyword ""` header followed by one quoted line per
    /// segment, each but the last ending in a literal `\n`.
    pub fn field_lines(field: MessageField, value: &str) -> Vec<String> {
        if value.is_empty() && field.omits_empty() {
            return Vec::new();
        }

        let escaped = Self::escape_quotes(value);

        if !escaped.contains('\n') {
            return vec![format!("{} \"{}\"", field, escaped)];
        }

        let segments: Vec<&str> = escaped.split('\n').collect();
        let last = segments.len() - 1;

        let mut output = Vec::with_capacity(segments.len() + 1);
        output.push(format!("{} \"\"", field));

        for (index, segment) in segments.iter().enumerate() {
            let marker = if index == last { "" } else { NEWLINE_MARKER };
            output.push(format!("\"{}{}\"", segment, marker));
        }

        output
    }

    /// Format a whole entry.
    ///
    /// With `include_translation` false the `msgstr` is written empty, which
    /// is how template (POT) entries are produced from the same data.
    pub fn format_entry(entry: &TranslationEntry, include_translation: bool) -> Vec<String> {
        let mut output = Vec::new();

        for comment in &entry.comments {
            output.push(format!("#. {}", comment));
        }

        // Unify paths for Unix and Windows
        for position in &entry.positions {
            output.push(format!("#: {}", position.replace('\\', "/")));
        }

        if let Some(context) = entry.context() {
            output.push(format!("msgctxt \"{}\"", Self::escape_quotes(context)));
        }

        output.extend(Self::field_lines(MessageField::Id, &entry.source));
        output.extend(Self::field_lines(
            MessageField::IdPlural,
            entry.source_plural().unwrap_or_default(),
        ));

        let translation = if include_translation {
            entry.translation.as_deref().unwrap_or_default()
        } else {
            ""
        };
        output.extend(Self::field_lines(MessageField::Str, translation));

        output
    }
}
