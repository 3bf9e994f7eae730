//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use generic_uri::prelude::*;
//!
//! let uri = Uri::parse("ftp://ftp.is.co.za/rfc/rfc1808.txt").unwrap();
//! assert_eq!(uri.host_kind(), HostKind::RegName);
//! ```
//!
//! The byte classifier in [`crate::classify`] is intentionally excluded, as
//! its short names collide easily.

pub use crate::{
    // Core types
    HostKind, Uri,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    AUTHORITY_PREFIX, FRAGMENT_DELIMITER, IP_LITERAL_END, IP_LITERAL_START, PORT_DELIMITER,
    QUERY_DELIMITER, RESERVED, SCHEME_DELIMITER, USERINFO_DELIMITER,
};
