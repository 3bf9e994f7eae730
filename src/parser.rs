//! Recursive-descent parser for the generic URI grammar.
//!
//! # Grammar Reference
//!
//! The supported subset of RFC 3986:
//!
//! ```abnf
//! URI         = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! hier-part   = "//" authority path
//! authority   = [ userinfo "@" ] host [ ":" port ]
//! host        = "[" *( %x00-5C / %x5E-FF ) "]" / reg-name
//! reg-name    = *( any byte except gen-delims )
//! port        = 1*DIGIT
//! path        = *( any byte except "?" / "#" )
//! query       = *( any byte except "#" )
//! fragment    = *( any byte )
//! ```
//!
//! Every production is decided from the single byte buffered in the
//! [`Cursor`]; no production re-reads consumed input.

use crate::classify::{
    is_alpha, is_at, is_close_bracket, is_colon, is_digit, is_hash, is_open_bracket,
    is_question_mark, is_reserved, is_scheme_char, is_slash,
};
use crate::cursor::Cursor;
use crate::error::ParseErrorKind;
use crate::log::{debug, trace};
use crate::uri::HostKind;

/// Component spans borrowed from the input of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) user_info: Option<&'a str>,
    pub(crate) host: &'a str,
    pub(crate) host_kind: HostKind,
    pub(crate) port: Option<u64>,
    pub(crate) path: &'a str,
    pub(crate) query: Option<&'a str>,
    pub(crate) fragment: Option<&'a str>,
}

/// Parser state: the cursor plus the components filled in so far.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    scheme: &'a str,
    user_info: Option<&'a str>,
    host: &'a str,
    host_kind: HostKind,
    port: Option<u64>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Parser<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            scheme: "",
            user_info: None,
            host: "",
            host_kind: HostKind::RegName,
            port: None,
            path: "",
            query: None,
            fragment: None,
        }
    }

    /// Runs every production and returns the captured components.
    ///
    /// Consumes the parser, so no partially filled state outlives a failure.
    pub(crate) fn parse(mut self) -> Result<Components<'a>, ParseErrorKind> {
        if let Err(kind) = self.uri() {
            debug!("rejected URI at byte {}: {kind}", self.cursor.position());
            return Err(kind);
        }

        Ok(Components {
            scheme: self.scheme,
            user_info: self.user_info,
            host: self.host,
            host_kind: self.host_kind,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
        })
    }

    fn uri(&mut self) -> Result<(), ParseErrorKind> {
        self.scheme()?;
        self.hier_part()?;
        self.query();
        self.fragment();
        Ok(())
    }

    fn scheme(&mut self) -> Result<(), ParseErrorKind> {
        let start = self.cursor.position();

        if !self.cursor.peek().is_some_and(is_alpha) {
            return Err(ParseErrorKind::SchemeStart {
                found: self.cursor.char_at(start),
            });
        }

        while let Some(b) = self.cursor.peek() {
            if is_colon(b) {
                break;
            }
            if !is_scheme_char(b) {
                let position = self.cursor.position();
                return Err(ParseErrorKind::InvalidSchemeChar {
                    char: self.cursor.char_at(position).unwrap_or(char::REPLACEMENT_CHARACTER),
                    position,
                });
            }
            self.cursor.advance();
        }

        if self.cursor.peek().is_none() {
            return Err(ParseErrorKind::ExpectedColon);
        }
        self.scheme = self.cursor.slice(start);
        trace!("scheme {:?}", self.scheme);

        self.cursor.advance();
        Ok(())
    }

    fn hier_part(&mut self) -> Result<(), ParseErrorKind> {
        if !self.cursor.peek().is_some_and(is_slash) {
            return Err(ParseErrorKind::Unsupported);
        }
        self.cursor.advance();
        if !self.cursor.peek().is_some_and(is_slash) {
            return Err(ParseErrorKind::ExpectedSlash);
        }
        self.cursor.advance();

        self.authority()?;
        self.path();
        Ok(())
    }

    fn authority(&mut self) -> Result<(), ParseErrorKind> {
        self.host()?;
        if self.cursor.peek().is_some_and(is_colon) {
            self.cursor.advance();
            self.port()?;
        }
        Ok(())
    }

    fn host(&mut self) -> Result<(), ParseErrorKind> {
        if self.cursor.peek().is_some_and(is_open_bracket) {
            return self.ip_literal();
        }

        let start = self.cursor.position();
        while let Some(b) = self.cursor.peek() {
            if is_at(b) && self.user_info.is_none() {
                self.user_info = Some(self.cursor.slice(start));
                trace!("userinfo {:?}", self.user_info);
                self.cursor.advance();
                return self.host();
            }
            if is_reserved(b) {
                break;
            }
            self.cursor.advance();
        }

        self.host = self.cursor.slice(start);
        self.host_kind = HostKind::RegName;
        trace!("host {:?}", self.host);
        Ok(())
    }

    fn ip_literal(&mut self) -> Result<(), ParseErrorKind> {
        self.cursor.advance();

        let start = self.cursor.position();
        while self.cursor.peek().is_some_and(|b| !is_close_bracket(b)) {
            self.cursor.advance();
        }
        if self.cursor.peek().is_none() {
            return Err(ParseErrorKind::UnterminatedIpLiteral);
        }

        self.host = self.cursor.slice(start);
        self.host_kind = HostKind::IpLiteral;
        trace!("ip literal {:?}", self.host);

        self.cursor.advance();
        Ok(())
    }

    fn port(&mut self) -> Result<(), ParseErrorKind> {
        let start = self.cursor.position();
        let mut port: Option<u64> = Some(0);
        while let Some(b) = self.cursor.peek() {
            if !is_digit(b) {
                break;
            }
            port = port
                .and_then(|p| p.checked_mul(10))
                .and_then(|p| p.checked_add(u64::from(b - b'0')));
            self.cursor.advance();
        }

        let digits = self.cursor.slice(start);
        if digits.is_empty() {
            return Err(ParseErrorKind::MissingPortDigits { position: start });
        }
        let port = port.ok_or_else(|| ParseErrorKind::PortOverflow {
            digits: digits.to_string(),
        })?;

        self.port = Some(port);
        trace!("port {port}");
        Ok(())
    }

    fn path(&mut self) {
        let start = self.cursor.position();
        while self
            .cursor
            .peek()
            .is_some_and(|b| !is_question_mark(b) && !is_hash(b))
        {
            self.cursor.advance();
        }
        self.path = self.cursor.slice(start);
        trace!("path {:?}", self.path);
    }

    fn query(&mut self) {
        if !self.cursor.peek().is_some_and(is_question_mark) {
            return;
        }
        self.cursor.advance();

        let start = self.cursor.position();
        while self.cursor.peek().is_some_and(|b| !is_hash(b)) {
            self.cursor.advance();
        }
        self.query = Some(self.cursor.slice(start));
        trace!("query {:?}", self.query);
    }

    fn fragment(&mut self) {
        if !self.cursor.peek().is_some_and(is_hash) {
            return;
        }
        self.cursor.advance();

        let start = self.cursor.position();
        while self.cursor.advance().is_some() {}
        self.fragment = Some(self.cursor.slice(start));
        trace!("fragment {:?}", self.fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Components<'_>, ParseErrorKind> {
        Parser::new(input).parse()
    }

    #[test]
    fn scheme_must_start_with_letter() {
        assert_eq!(
            parse("1http://x"),
            Err(ParseErrorKind::SchemeStart { found: Some('1') })
        );
        assert_eq!(parse(""), Err(ParseErrorKind::SchemeStart { found: None }));
    }

    #[test]
    fn scheme_rejects_invalid_char() {
        assert_eq!(
            parse("ht_tp://x"),
            Err(ParseErrorKind::InvalidSchemeChar {
                char: '_',
                position: 2
            })
        );
    }

    #[test]
    fn scheme_reports_multibyte_char() {
        assert_eq!(
            parse("hé://x"),
            Err(ParseErrorKind::InvalidSchemeChar {
                char: 'é',
                position: 1
            })
        );
    }

    #[test]
    fn scheme_without_colon() {
        assert_eq!(parse("http"), Err(ParseErrorKind::ExpectedColon));
        assert_eq!(parse("svn+ssh"), Err(ParseErrorKind::ExpectedColon));
    }

    #[test]
    fn hier_part_requires_double_slash() {
        assert_eq!(parse("http:/x"), Err(ParseErrorKind::ExpectedSlash));
        assert_eq!(parse("http:/"), Err(ParseErrorKind::ExpectedSlash));
        assert_eq!(parse("mailto:a@b.c"), Err(ParseErrorKind::Unsupported));
        assert_eq!(parse("http:"), Err(ParseErrorKind::Unsupported));
    }

    #[test]
    fn empty_authority() {
        let c = parse("file:///etc/hosts").unwrap();
        assert_eq!(c.host, "");
        assert_eq!(c.user_info, None);
        assert_eq!(c.path, "/etc/hosts");
    }

    #[test]
    fn userinfo_then_host() {
        let c = parse("ftp://anonymous@ftp.example.org/pub").unwrap();
        assert_eq!(c.user_info, Some("anonymous"));
        assert_eq!(c.host, "ftp.example.org");
        assert_eq!(c.path, "/pub");
    }

    #[test]
    fn second_at_ends_host() {
        let c = parse("http://a@b@c/x").unwrap();
        assert_eq!(c.user_info, Some("a"));
        assert_eq!(c.host, "b");
        assert_eq!(c.path, "@c/x");
    }

    #[test]
    fn ip_literal_after_userinfo() {
        let c = parse("ssh://git@[::1]:22/repo").unwrap();
        assert_eq!(c.user_info, Some("git"));
        assert_eq!(c.host, "::1");
        assert_eq!(c.host_kind, HostKind::IpLiteral);
        assert_eq!(c.port, Some(22));
    }

    #[test]
    fn ip_literal_body_is_not_validated() {
        let c = parse("x://[not an address]/").unwrap();
        assert_eq!(c.host, "not an address");
        assert_eq!(c.host_kind, HostKind::IpLiteral);
    }

    #[test]
    fn unterminated_ip_literal() {
        assert_eq!(
            parse("ldap://[2001:db8::7/c=GB"),
            Err(ParseErrorKind::UnterminatedIpLiteral)
        );
    }

    #[test]
    fn port_without_digits() {
        assert_eq!(
            parse("http://host:/x"),
            Err(ParseErrorKind::MissingPortDigits { position: 12 })
        );
        assert_eq!(
            parse("http://host:"),
            Err(ParseErrorKind::MissingPortDigits { position: 12 })
        );
    }

    #[test]
    fn port_has_no_range_check() {
        let c = parse("http://host:700000/").unwrap();
        assert_eq!(c.port, Some(700_000));
    }

    #[test]
    fn port_overflow() {
        assert_eq!(
            parse("http://host:99999999999999999999/"),
            Err(ParseErrorKind::PortOverflow {
                digits: "99999999999999999999".to_string()
            })
        );
    }

    #[test]
    fn port_keeps_leading_zeros_out_of_value() {
        let c = parse("http://host:0080").unwrap();
        assert_eq!(c.port, Some(80));
        assert_eq!(c.path, "");
    }

    #[test]
    fn query_may_contain_question_marks() {
        let c = parse("ldap://h/c=GB?objectClass?one").unwrap();
        assert_eq!(c.query, Some("objectClass?one"));
        assert_eq!(c.fragment, None);
    }

    #[test]
    fn empty_query_and_fragment_are_present() {
        let c = parse("http://h/p?#").unwrap();
        assert_eq!(c.query, Some(""));
        assert_eq!(c.fragment, Some(""));
    }

    #[test]
    fn fragment_keeps_delimiters() {
        let c = parse("http://h#a?b#c").unwrap();
        assert_eq!(c.path, "");
        assert_eq!(c.query, None);
        assert_eq!(c.fragment, Some("a?b#c"));
    }
}
