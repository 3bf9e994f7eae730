//! Byte classes of the generic URI grammar.
//!
//! ```abnf
//! gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
//! unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! scheme     = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! ```

use crate::constants::{
    FRAGMENT_DELIMITER, IP_LITERAL_END, IP_LITERAL_START, QUERY_DELIMITER, SCHEME_DELIMITER,
    USERINFO_DELIMITER,
};

/// Returns true for the generic delimiters that end a reg-name host.
#[must_use]
pub const fn is_reserved(b: u8) -> bool {
    matches!(b, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
}

/// Returns true for bytes that never need percent-encoding.
#[must_use]
pub const fn is_unreserved(b: u8) -> bool {
    is_alpha(b) || is_digit(b) || matches!(b, b'.' | b'_' | b'~' | b'-')
}

/// Returns true for bytes allowed after the first byte of a scheme.
#[must_use]
pub const fn is_scheme_char(b: u8) -> bool {
    is_alpha(b) || is_digit(b) || matches!(b, b'+' | b'-' | b'.')
}

/// Returns true for ASCII decimal digits.
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns true for ASCII letters.
#[must_use]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Returns true for `:`.
#[must_use]
pub const fn is_colon(b: u8) -> bool {
    b == SCHEME_DELIMITER
}

/// Returns true for `[`.
#[must_use]
pub const fn is_open_bracket(b: u8) -> bool {
    b == IP_LITERAL_START
}

/// Returns true for `]`.
#[must_use]
pub const fn is_close_bracket(b: u8) -> bool {
    b == IP_LITERAL_END
}

/// Returns true for `?`.
#[must_use]
pub const fn is_question_mark(b: u8) -> bool {
    b == QUERY_DELIMITER
}

/// Returns true for `#`.
#[must_use]
pub const fn is_hash(b: u8) -> bool {
    b == FRAGMENT_DELIMITER
}

/// Returns true for `@`.
#[must_use]
pub const fn is_at(b: u8) -> bool {
    b == USERINFO_DELIMITER
}

/// Returns true for `/`.
#[must_use]
pub const fn is_slash(b: u8) -> bool {
    b == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RESERVED;

    #[test]
    fn reserved_matches_gen_delims() {
        for b in RESERVED {
            assert!(is_reserved(b), "{} should be reserved", b as char);
        }
        let reserved_count = (0..=u8::MAX).filter(|&b| is_reserved(b)).count();
        assert_eq!(reserved_count, RESERVED.len());
    }

    #[test]
    fn unreserved_and_reserved_are_disjoint() {
        for b in 0..=u8::MAX {
            assert!(!(is_reserved(b) && is_unreserved(b)), "byte {b} is in both classes");
        }
    }

    #[test]
    fn unreserved_includes_digits() {
        assert!(is_unreserved(b'7'));
        assert!(is_unreserved(b'~'));
        assert!(!is_unreserved(b'%'));
    }

    #[test]
    fn scheme_chars() {
        for b in b"abcXYZ019+-." {
            assert!(is_scheme_char(*b));
        }
        for b in b"_~:/@ %" {
            assert!(!is_scheme_char(*b));
        }
    }

    #[test]
    fn non_ascii_is_nothing() {
        for b in 0x80..=u8::MAX {
            assert!(!is_alpha(b));
            assert!(!is_digit(b));
            assert!(!is_scheme_char(b));
            assert!(!is_reserved(b));
        }
    }

    #[test]
    fn single_byte_checks() {
        assert!(is_colon(b':'));
        assert!(is_open_bracket(b'['));
        assert!(is_close_bracket(b']'));
        assert!(is_question_mark(b'?'));
        assert!(is_hash(b'#'));
        assert!(is_at(b'@'));
        assert!(is_slash(b'/'));
        assert!(!is_slash(b'\\'));
    }
}
