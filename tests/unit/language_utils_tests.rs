/*!
 * Tests for locale utilities
 */

use capcheck::language_utils::{get_language_name, primary_subtag, validate_locale};

#[test]
fn test_primarySubtag_withRegionLocale_shouldReturnLanguagePart() {
    assert_eq!(primary_subtag("en-US"), "en");
    assert_eq!(primary_subtag("fr_FR"), "fr");
    assert_eq!(primary_subtag("deu"), "deu");
}

#[test]
fn test_validateLocale_withKnownCodes_shouldPass() {
    assert!(validate_locale("en-US").is_ok());
    assert!(validate_locale("fr").is_ok());
    assert!(validate_locale("deu").is_ok());
}

#[test]
fn test_validateLocale_withUnknownCodes_shouldFail() {
    assert!(validate_locale("q1-ZZ").is_err());
    assert!(validate_locale("english").is_err());
    assert!(validate_locale("").is_err());
}

#[test]
fn test_getLanguageName_withKnownLocale_shouldReturnEnglishName() {
    assert_eq!(get_language_name("fr-FR").unwrap(), "French");
    assert_eq!(get_language_name("en-US").unwrap(), "English");
}

#[test]
fn test_getLanguageName_withUnknownLocale_shouldFail() {
    assert!(get_language_name("zz-ZZ").is_err());
}
