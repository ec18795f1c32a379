//! Parity checks against values produced by CPython's `str`.
//!
//! Each expectation here was taken from the Python interpreter; the tests go through the public
//! API only.

use pystr_core::errors::{EMPTY_SEPARATOR_MSG, STRING_INDEX_OUT_OF_RANGE_MSG, STRING_SLICE_STEP_ZERO_MSG};
use pystr_core::{CharUnit, ErrorKind, StrConfig, StrError, Text};

fn t(s: &str) -> Text<'_> {
    Text::new(s)
}

// =============================================================================
// Indexing and slicing
// =============================================================================

#[test]
fn slices_match_python() {
    let s = t("hello");
    assert_eq!(s.slice(Some(-3), None, None).unwrap(), "llo");
    assert_eq!(s.slice(None, None, Some(-1)).unwrap(), "olleh");
    assert_eq!(s.slice(Some(10), None, None).unwrap(), "");
    assert_eq!(s.slice(Some(-10), Some(2), None).unwrap(), "he");
    assert_eq!(s.slice(Some(4), Some(0), Some(-2)).unwrap(), "ol");
    assert_eq!(s.slice(None, None, Some(2)).unwrap(), "hlo");
    assert_eq!(s.slice(None, Some(-10), Some(-1)).unwrap(), "olleh");
}

#[test]
fn slice_step_zero_is_value_error() {
    let err = t("hello").slice(None, None, Some(0)).unwrap_err();
    assert_eq!(err, StrError::SliceStepZero);
    assert_eq!(err.kind(), ErrorKind::ValueError);
    assert_eq!(err.to_string(), STRING_SLICE_STEP_ZERO_MSG);
}

#[test]
fn getitem_matches_python() {
    let s = t("héllo");
    assert_eq!(s.getitem(1).unwrap(), "é");
    assert_eq!(s.getitem(-1).unwrap(), "o");
    let err = s.getitem(5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexError);
    assert_eq!(err.to_string(), STRING_INDEX_OUT_OF_RANGE_MSG);
}

#[test]
fn grapheme_mode_indexes_clusters() {
    let config = StrConfig::new().with_unit(CharUnit::Grapheme);
    let s = Text::with_config("ae\u{301}b", config);
    assert_eq!(s.len(), 3);
    assert_eq!(s.getitem(1).unwrap(), "e\u{301}");
    assert_eq!(s.slice(None, None, Some(-1)).unwrap(), "be\u{301}a");
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn find_and_count_match_python() {
    let s = t("hello");
    assert_eq!(s.find("l", None, None), 2);
    assert_eq!(s.rfind("l", None, None), 3);
    assert_eq!(s.find("l", Some(-2), None), 3);
    assert_eq!(s.find("", Some(6), None), -1);
    assert_eq!(s.find("", Some(5), None), 5);
    assert_eq!(s.rfind("", None, None), 5);
    assert_eq!(s.rfind("", None, Some(2)), 2);

    assert_eq!(s.count("", None, None), 6);
    assert_eq!(s.count("", Some(1), Some(3)), 3);
    assert_eq!(s.count("l", None, None), 2);
    assert_eq!(t("aaaa").count("aa", None, None), 2);
}

#[test]
fn index_raises_when_missing() {
    let err = t("abc").index("z", None, None).unwrap_err();
    assert_eq!(err, StrError::SubstringNotFound);
    assert_eq!(err.kind(), ErrorKind::ValueError);
    assert_eq!(t("abcabc").rindex("b", None, None), Ok(4));
}

#[test]
fn prefix_and_suffix_tests_match_python() {
    let s = t("hello");
    assert!(s.startswith("he", Some(0), Some(2)));
    assert!(!s.startswith("", Some(6), None));
    assert!(s.endswith_any(&["x", "lo"], None, None));
}

#[test]
fn replace_matches_python() {
    assert_eq!(t("a-b-c").replace("-", "+", Some(1)), "a+b-c");
    assert_eq!(t("ab").replace("", ".", None), ".a.b.");
    assert_eq!(t("ab").replace("", ".", Some(2)), ".a.b");
}

// =============================================================================
// Partition and split
// =============================================================================

#[test]
fn split_family_matches_python() {
    assert_eq!(t("  a  b  ").split(None, None).unwrap(), vec!["a", "b"]);
    assert_eq!(t("1,2,,3").split(Some(","), None).unwrap(), vec!["1", "2", "", "3"]);
    assert_eq!(t(" a b  c ").rsplit(None, Some(1)).unwrap(), vec![" a b", "c"]);
    assert_eq!(t("a,b,c").rsplit(Some(","), Some(1)).unwrap(), vec!["a,b", "c"]);
    assert_eq!(t("a\r\nb\n").splitlines(true), vec!["a\r\n", "b\n"]);

    let err = t("a").split(Some(""), None).unwrap_err();
    assert_eq!(err.to_string(), EMPTY_SEPARATOR_MSG);
}

#[test]
fn partition_matches_python() {
    assert_eq!(t("key=value").partition("=").unwrap(), ["key", "=", "value"]);
    assert_eq!(t("noequals").partition("=").unwrap(), ["noequals", "", ""]);
    assert_eq!(t("noequals").rpartition("=").unwrap(), ["", "", "noequals"]);
}

// =============================================================================
// Transforms
// =============================================================================

#[test]
fn padding_matches_python() {
    assert_eq!(t("a").center(4, None).unwrap(), " a  ");
    assert_eq!(t("ab").center(5, Some("*")).unwrap(), "**ab*");
    assert_eq!(t("abc").center(6, None).unwrap(), " abc  ");
    assert_eq!(t("-3").zfill(5), "-0003");
    assert_eq!(t("+12").zfill(2), "+12");
    assert_eq!(t("42").zfill(5), "00042");

    let err = t("a").center(4, Some("ab")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeError);
}

#[test]
fn case_transforms_match_python() {
    assert_eq!(t("hello world").title(), "Hello World");
    assert_eq!(t("they're").title(), "They'Re");
    assert_eq!(t("Straße").casefold(), "strasse");
    assert_eq!(t("hELLO").swapcase(), "Hello");
    assert_eq!(t("hELLO wORLD").capitalize(), "Hello world");
}

#[test]
fn whitespace_transforms_match_python() {
    assert_eq!(t("a\tbc\td").expandtabs(None), "a       bc      d");
    assert_eq!(t("a\tbc\td").expandtabs(Some(4)), "a   bc  d");
    assert_eq!(t("  xx  ").strip(None), "xx");
    assert_eq!(t("xxhixx").lstrip(Some("x")), "hixx");
}

#[test]
fn repr_and_repeat_match_python() {
    assert_eq!(t("it's").repr(), "\"it's\"");
    assert_eq!(t("a\x00\n").repr(), r"'a\x00\n'");
    assert_eq!(t("é\u{200b}").repr(), r"'é\u200b'");
    assert_eq!(t("ab").mul(3), "ababab");
    assert_eq!(t("ab").mul(-1), "");
}

#[test]
fn predicates_match_python() {
    assert!(t("Hello World").istitle());
    assert!(t("ABC").isupper());
    assert!(t("abc1").islower());
    assert!(t("½").isnumeric());
    assert!(!t("½").isdigit());
    assert!(t("²").isdigit());
    assert!(!t("²").isdecimal());
    assert!(t("١٢").isdecimal());
    assert!(!t("").isalpha());
    assert!(t(" \x1f").isspace());
}
