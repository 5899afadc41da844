//! Language utilities for the catalog `Language` header
//!
//! Gettext locale names look like `fr`, `pt_BR`, `sr@latin` or
//! `de_DE.UTF-8`. Only the leading language part is checked against
//! ISO 639-1 / ISO 639-2; region, modifier and codeset are kept verbatim.

use anyhow::{Result, anyhow};
use isolang::Language;

// ISO 639-2/B codes that differ from their ISO 639-2/T form
const PART2B_ALIASES: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Language part of a gettext locale name (`pt_BR` -> `pt`)
pub fn language_part(locale: &str) -> &str {
    let trimmed = locale.trim();
    let end = trimmed.find(['_', '-', '@', '.']).unwrap_or(trimmed.len());
    &trimmed[..end]
}

fn lookup(code: &str) -> Option<Language> {
    let normalized_code = code.to_lowercase();

    match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => {
            let part2t = PART2B_ALIASES.iter()
                .find(|(part2b, _)| *part2b == normalized_code)
                .map(|(_, part2t)| *part2t)
                .unwrap_or(normalized_code.as_str());
            Language::from_639_3(part2t)
        }
        _ => None,
    }
}

/// Validate the language part of a locale name
pub fn validate_language_code(locale: &str) -> Result<()> {
    lookup(language_part(locale))
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language code: {}", locale))
}

/// Get the English language name from a locale name
pub fn get_language_name(locale: &str) -> Result<String> {
    let lang = lookup(language_part(locale))
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", locale))?;

    Ok(lang.to_name().to_string())
}
