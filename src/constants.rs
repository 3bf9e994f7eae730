//! Delimiter constants of the generic URI grammar.

/// Separates the scheme from the hierarchical part.
pub const SCHEME_DELIMITER: u8 = b':';

/// Introduces the authority (`//`) after the scheme delimiter.
pub const AUTHORITY_PREFIX: &str = "//";

/// Separates the userinfo from the host inside the authority.
pub const USERINFO_DELIMITER: u8 = b'@';

/// Separates the host from the port inside the authority.
pub const PORT_DELIMITER: u8 = b':';

/// Opens a bracketed IP-literal host.
pub const IP_LITERAL_START: u8 = b'[';

/// Closes a bracketed IP-literal host.
pub const IP_LITERAL_END: u8 = b']';

/// Introduces the query component.
pub const QUERY_DELIMITER: u8 = b'?';

/// Introduces the fragment component.
pub const FRAGMENT_DELIMITER: u8 = b'#';

/// The generic delimiters that end a reg-name host.
///
/// ```abnf
/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
/// ```
pub const RESERVED: [u8; 7] = [b':', b'/', b'?', b'#', b'[', b']', b'@'];
