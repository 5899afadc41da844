/*!
 * Tests for language utility functions
 */

use potwriter::language_utils::{get_language_name, language_part, validate_language_code};

/// Test splitting gettext locale names
#[test]
fn test_language_part_withLocaleNames_shouldReturnLanguage() {
    assert_eq!(language_part("fr"), "fr");
    assert_eq!(language_part("pt_BR"), "pt");
    assert_eq!(language_part("zh-Hant"), "zh");
    assert_eq!(language_part("sr@latin"), "sr");
    assert_eq!(language_part("de_DE.UTF-8"), "de");
    assert_eq!(language_part(" en "), "en");
}

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldSucceed() {
    for code in ["en", "FR", "deu", "fre", "ger", "pt_BR", "sr@latin", " es "] {
        assert!(validate_language_code(code).is_ok(), "{} should be valid", code);
    }
}

/// Test rejection of invalid codes
#[test]
fn test_validate_language_code_withInvalidCodes_shouldFail() {
    for code in ["", "x", "xx", "xyz", "123", "english"] {
        assert!(validate_language_code(code).is_err(), "{} should be invalid", code);
    }
}

/// Test language name lookup
#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("ger").unwrap(), "German");
    assert_eq!(get_language_name("es_MX").unwrap(), "Spanish");
    assert!(get_language_name("qq").is_err());
}
