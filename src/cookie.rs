//! Request cookie handling

use std::fmt;

/// A single cookie attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Join cookies into a single `Cookie` header value
pub fn cookie_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_display() {
        let cookie = Cookie::new("session", "abc123");
        assert_eq!(cookie.to_string(), "session=abc123");
    }

    #[test]
    fn test_cookie_header_joins_entries() {
        let cookies = vec![Cookie::new("a", "1"), Cookie::new("b", "2")];
        assert_eq!(cookie_header(&cookies), "a=1; b=2");
    }

    #[test]
    fn test_cookie_header_empty() {
        assert_eq!(cookie_header(&[]), "");
    }
}
