//! Kani proof harnesses for parser properties.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::classify::{is_alpha, is_digit, is_reserved, is_scheme_char};
use crate::cursor::Cursor;
use crate::{ParseErrorKind, Uri};

/// Bytes that exercise every branch of the grammar
const GRAMMAR_BYTES: &[u8] = b"a1+:/?#[]@.%";

fn arbitrary_grammar_byte() -> u8 {
    let idx: usize = kani::any();
    GRAMMAR_BYTES[idx % GRAMMAR_BYTES.len()]
}

/// Generate a short ASCII string built from grammar-relevant bytes
fn arbitrary_input(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len).map(|_| arbitrary_grammar_byte() as char).collect()
}

/// Proof: Parsing never panics and always either succeeds or errors
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_never_panics() {
    let input = arbitrary_input(6);
    let _ = Uri::parse(&input);
}

/// Proof: A scheme that does not start with a letter is always rejected
#[kani::proof]
#[kani::unwind(8)]
fn proof_non_alpha_scheme_rejected() {
    let first: u8 = kani::any();
    kani::assume(!is_alpha(first) && first.is_ascii());
    let rest = arbitrary_input(4);
    let input = format!("{}{rest}", first as char);

    let result = Uri::parse(&input);
    assert!(matches!(
        result,
        Err(ref e) if matches!(e.kind, ParseErrorKind::SchemeStart { .. })
    ));
}

/// Proof: A successful parse yields a scheme made of scheme characters
#[kani::proof]
#[kani::unwind(8)]
fn proof_scheme_is_valid_on_success() {
    let input = arbitrary_input(6);
    if let Ok(uri) = Uri::parse(&input) {
        let bytes = uri.scheme().as_bytes();
        assert!(!bytes.is_empty());
        assert!(is_alpha(bytes[0]));
        assert!(bytes.iter().all(|&b| is_scheme_char(b)));
    }
}

/// Proof: A reg-name host never contains a reserved delimiter
#[kani::proof]
#[kani::unwind(8)]
fn proof_reg_name_has_no_delimiters() {
    let input = arbitrary_input(6);
    if let Ok(uri) = Uri::parse(&input) {
        if !uri.is_ip_literal() {
            assert!(uri.host().bytes().all(|b| !is_reserved(b)));
        }
    }
}

/// Proof: A parsed port always came from a digit run right after the host
#[kani::proof]
#[kani::unwind(8)]
fn proof_port_follows_colon() {
    let input = arbitrary_input(6);
    if let Ok(uri) = Uri::parse(&input) {
        if uri.port().is_some() {
            let colon = input.find(':').map_or(0, |i| i + 3);
            assert!(input[colon..].bytes().any(is_digit));
        }
    }
}

/// Proof: peek is idempotent and advance moves exactly one byte
#[kani::proof]
#[kani::unwind(8)]
fn proof_cursor_advance_is_single_step() {
    let input = arbitrary_input(4);
    let mut cursor = Cursor::new(&input);
    let first = cursor.peek();
    assert_eq!(cursor.peek(), first);
    assert_eq!(cursor.advance(), first);
    assert_eq!(cursor.position(), usize::from(first.is_some()));
}
