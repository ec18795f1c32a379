//! Classification predicates (`str.isalpha()` and friends).
//!
//! ## Notes
//! - Predicates are evaluated on the base scalar of each character (the character itself in scalar
//!   mode; the first scalar of the cluster in grapheme mode).
//! - Unicode classification comes from Rust's `char` API. Python distinguishes decimal, digit, and
//!   numeric characters by the `Numeric_Type` property, which `char` does not expose; the digit
//!   and decimal tests below carve the known non-decimal numeric ranges out of `char::is_numeric`.

use crate::text::Text;

/// Python's notion of whitespace: Unicode `White_Space` plus the ASCII information separators.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Titlecase letters (e.g. `ǅ`): neither upper nor lower, but changed by both mappings.
pub(crate) fn is_titlecase(c: char) -> bool {
    !c.is_uppercase()
        && !c.is_lowercase()
        && !c.to_uppercase().eq(std::iter::once(c))
        && !c.to_lowercase().eq(std::iter::once(c))
}

pub(crate) fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase(c)
}

/// Numeric characters that are digits (`Numeric_Type=Digit`) but not decimal digits.
fn is_non_decimal_digit(c: char) -> bool {
    matches!(c,
        '\u{b2}' | '\u{b3}' | '\u{b9}'
        | '\u{2070}'..='\u{2079}'
        | '\u{2080}'..='\u{2089}'
        | '\u{2460}'..='\u{2468}'
        | '\u{2474}'..='\u{247c}'
        | '\u{2488}'..='\u{2490}'
        | '\u{24ea}'
        | '\u{24f5}'..='\u{24fd}'
        | '\u{24ff}'
        | '\u{2776}'..='\u{277e}'
        | '\u{2780}'..='\u{2788}'
        | '\u{278a}'..='\u{2792}'
    )
}

/// Numeric characters that are neither decimal digits nor digits (fractions, roman numerals, ...).
fn is_numeric_only(c: char) -> bool {
    !is_non_decimal_digit(c)
        && matches!(c,
            '\u{bc}'..='\u{be}'
            | '\u{2150}'..='\u{218b}'
            | '\u{2460}'..='\u{24ff}'
            | '\u{2776}'..='\u{2793}'
            | '\u{3007}'
            | '\u{3021}'..='\u{3029}'
            | '\u{3038}'..='\u{303a}'
            | '\u{3248}'..='\u{325f}'
            | '\u{3280}'..='\u{32bf}'
        )
}

pub(crate) fn is_decimal(c: char) -> bool {
    c.is_ascii_digit() || (c.is_numeric() && !is_non_decimal_digit(c) && !is_numeric_only(c))
}

pub(crate) fn is_digit(c: char) -> bool {
    is_decimal(c) || is_non_decimal_digit(c)
}

/// Format characters (category `Cf`) commonly found in text.
fn is_format(c: char) -> bool {
    matches!(c,
        '\u{ad}'
        | '\u{600}'..='\u{605}'
        | '\u{61c}'
        | '\u{6dd}'
        | '\u{70f}'
        | '\u{180e}'
        | '\u{200b}'..='\u{200f}'
        | '\u{202a}'..='\u{202e}'
        | '\u{2060}'..='\u{2064}'
        | '\u{2066}'..='\u{206f}'
        | '\u{feff}'
        | '\u{fff9}'..='\u{fffb}'
    )
}

/// Printable per `str.isprintable()`: not a control, format, private-use or separator character,
/// except the ASCII space.
pub(crate) fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let private_use = matches!(c, '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{ffffd}' | '\u{100000}'..='\u{10fffd}');
    !(c.is_control() || is_space(c) || is_format(c) || private_use)
}

impl Text<'_> {
    fn all_nonempty(&self, pred: impl Fn(char) -> bool) -> bool {
        !self.is_empty() && self.heads().all(pred)
    }

    /// `str.isalnum()`
    pub fn isalnum(&self) -> bool {
        self.all_nonempty(|c| c.is_alphabetic() || c.is_numeric())
    }

    /// `str.isalpha()`
    pub fn isalpha(&self) -> bool {
        self.all_nonempty(char::is_alphabetic)
    }

    /// `str.isascii()`: true for the empty string.
    pub fn isascii(&self) -> bool {
        self.as_str().is_ascii()
    }

    /// `str.isdecimal()`
    pub fn isdecimal(&self) -> bool {
        self.all_nonempty(is_decimal)
    }

    /// `str.isdigit()`
    pub fn isdigit(&self) -> bool {
        self.all_nonempty(is_digit)
    }

    /// `str.isnumeric()`
    pub fn isnumeric(&self) -> bool {
        self.all_nonempty(char::is_numeric)
    }

    /// `str.isspace()`
    pub fn isspace(&self) -> bool {
        self.all_nonempty(is_space)
    }

    /// `str.isprintable()`: true for the empty string.
    pub fn isprintable(&self) -> bool {
        self.heads().all(is_printable)
    }

    /// `str.islower()`: at least one cased character, and none uppercase or titlecase.
    pub fn islower(&self) -> bool {
        let mut cased = false;
        for c in self.heads() {
            if c.is_uppercase() || is_titlecase(c) {
                return false;
            }
            cased |= c.is_lowercase();
        }
        cased
    }

    /// `str.isupper()`: at least one cased character, and none lowercase or titlecase.
    pub fn isupper(&self) -> bool {
        let mut cased = false;
        for c in self.heads() {
            if c.is_lowercase() || is_titlecase(c) {
                return false;
            }
            cased |= c.is_uppercase();
        }
        cased
    }

    /// `str.istitle()`.
    ///
    /// Uppercase and titlecase characters may only follow uncased characters, lowercase
    /// characters may only follow cased ones. The text must contain at least one cased character.
    pub fn istitle(&self) -> bool {
        let mut cased = false;
        let mut previous_is_cased = false;
        for c in self.heads() {
            if c.is_uppercase() || is_titlecase(c) {
                if previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            } else if c.is_lowercase() {
                if !previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            } else {
                previous_is_cased = false;
            }
        }
        cased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Text<'_> {
        Text::new(s)
    }

    #[test]
    fn test_char_helpers() {
        assert!(is_space('\x1f'));
        assert!(is_space('\u{3000}'));
        assert!(!is_space('a'));
        assert!(is_titlecase('ǅ'));
        assert!(!is_titlecase('A'));
        assert!(is_cased('ǅ'));
        assert!(!is_cased('1'));
    }

    #[test]
    fn test_isalnum_isalpha() {
        assert!(t("abc123").isalnum());
        assert!(!t("abc 123").isalnum());
        assert!(!t("").isalnum());
        assert!(t("héllo").isalpha());
        assert!(!t("abc1").isalpha());
        assert!(!t("").isalpha());
    }

    #[test]
    fn test_numeric_family() {
        assert!(t("0123").isdecimal());
        assert!(t("٠١٢").isdecimal());
        assert!(!t("²").isdecimal());
        assert!(t("²").isdigit());
        assert!(t("①").isdigit());
        assert!(!t("½").isdigit());
        assert!(t("½").isnumeric());
        assert!(t("Ⅻ").isnumeric());
        assert!(!t("Ⅻ").isdecimal());
        assert!(!t("").isnumeric());
        assert!(!t("1.5").isdecimal());
    }

    #[test]
    fn test_isascii_isprintable() {
        assert!(t("").isascii());
        assert!(t("abc~").isascii());
        assert!(!t("é").isascii());
        assert!(t("").isprintable());
        assert!(t("hello world").isprintable());
        assert!(!t("a\tb").isprintable());
        assert!(!t("a\u{200b}").isprintable());
        assert!(t("héllo").isprintable());
    }

    #[test]
    fn test_isspace() {
        assert!(t(" \t\n").isspace());
        assert!(!t("").isspace());
        assert!(!t(" a ").isspace());
    }

    #[test]
    fn test_islower_isupper() {
        assert!(t("abc1").islower());
        assert!(!t("aBc").islower());
        assert!(!t("123").islower());
        assert!(t("ABC1").isupper());
        assert!(!t("AbC").isupper());
        assert!(!t("").isupper());
    }

    #[test]
    fn test_istitle() {
        assert!(t("Hello World").istitle());
        assert!(t("Hello 123 World").istitle());
        assert!(t("A").istitle());
        assert!(!t("Hello world").istitle());
        assert!(!t("HEllo").istitle());
        assert!(!t("hello").istitle());
        assert!(!t("123").istitle());
        assert!(!t("").istitle());
        assert!(t("O'Neil").istitle());
    }
}
