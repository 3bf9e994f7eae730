//! Main URI type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::Parser;

/// How the host of a [`Uri`] was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostKind {
    /// A registered name or IPv4 token, taken up to the next delimiter
    #[default]
    RegName,
    /// A `[...]` literal; the brackets are stripped and the body is not validated
    IpLiteral,
}

/// A parsed URI.
///
/// Components are kept exactly as they appear between their delimiters:
/// nothing is percent-decoded, lowercased or otherwise normalized.
///
/// # Structure
///
/// ```text
/// scheme://[userinfo@]host[:port]path[?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use generic_uri::Uri;
///
/// let uri = Uri::parse("http://ankit@www.ietf.org/rfc/rfc2396.txt?a=d&s=d#hello").unwrap();
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.user_info(), Some("ankit"));
/// assert_eq!(uri.host(), "www.ietf.org");
/// assert_eq!(uri.port(), None);
/// assert_eq!(uri.path(), "/rfc/rfc2396.txt");
/// assert_eq!(uri.query(), Some("a=d&s=d"));
/// assert_eq!(uri.fragment(), Some("hello"));
///
/// // Bracketed hosts are returned without their brackets
/// let uri = Uri::parse("ldap://[2001:db8::7]/c=GB?objectClass?one").unwrap();
/// assert_eq!(uri.host(), "2001:db8::7");
/// assert!(uri.is_ip_literal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: String,
    user_info: Option<String>,
    host: String,
    host_kind: HostKind,
    port: Option<u64>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    /// The input exactly as parsed
    raw: String,
}

impl Uri {
    /// Parses a URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The scheme is empty, does not start with a letter, or contains a
    ///   byte outside `ALPHA / DIGIT / "+" / "-" / "."`
    /// - The scheme is not terminated by `:`
    /// - The scheme is not followed by `//` (only authority-based URIs are supported)
    /// - A `[` host literal is not closed
    /// - A `:` after the host is not followed by digits, or the port overflows `u64`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let components = Parser::new(input).parse().map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })?;

        Ok(Self {
            scheme: components.scheme.to_string(),
            user_info: components.user_info.map(str::to_string),
            host: components.host.to_string(),
            host_kind: components.host_kind,
            port: components.port,
            path: components.path.to_string(),
            query: components.query.map(str::to_string),
            fragment: components.fragment.map(str::to_string),
            raw: input.to_string(),
        })
    }

    /// Returns the scheme, without the trailing `:`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the userinfo, if an `@` appeared in the authority.
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// Returns the host, with brackets stripped from IP literals.
    ///
    /// The host is empty when the authority is empty, as in `file:///etc/hosts`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns how the host was written.
    #[must_use]
    pub const fn host_kind(&self) -> HostKind {
        self.host_kind
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u64> {
        self.port
    }

    /// Returns the path. May be empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query, without the leading `?`.
    ///
    /// `Some("")` means the URI contained a `?` with nothing after it.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment, without the leading `#`.
    ///
    /// `Some("")` means the URI ended with a bare `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true if the authority carried a userinfo component.
    #[must_use]
    pub const fn has_user_info(&self) -> bool {
        self.user_info.is_some()
    }

    /// Returns true if the host was a bracketed literal.
    #[must_use]
    pub fn is_ip_literal(&self) -> bool {
        self.host_kind == HostKind::IpLiteral
    }

    /// Returns the URI string exactly as it was parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
