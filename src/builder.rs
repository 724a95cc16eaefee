//! Request builder core
//!
//! A `Builder` exclusively owns one request descriptor and one client
//! descriptor. It is created empty, passed through an ordered sequence of
//! option mutators, and then considered finalized. Construction is
//! single-threaded and performs no I/O.

use std::collections::HashMap;
use std::io::Cursor;

use crate::config::ClientConfig;
use crate::cookie::Cookie;
use crate::error::Result;

/// An option mutator applied to a builder.
///
/// Each mutator either fully applies, is a guarded no-op, or fails with a
/// typed error; it is never partially applied.
pub type OptionFn = Box<dyn FnOnce(&mut Builder) -> Result<()>>;

/// Accumulates request and client configuration before use.
#[derive(Debug, Default)]
pub struct Builder {
    /// Absolute target URL. Never validated here; an invalid or empty
    /// address only fails when the collaborator attempts a send.
    pub address: String,
    /// Header mapping, last write per key wins.
    pub headers: HashMap<String, String>,
    /// Cookies are additive and never overwrite each other.
    pub cookies: Vec<Cookie>,
    /// Raw body bytes, if any.
    pub body: Option<Vec<u8>>,
    /// Client descriptor handed to the collaborator.
    pub client: ClientConfig,
}

impl Builder {
    /// Create a builder with an empty header mapping and default client.
    pub fn new() -> Self {
        Builder::default()
    }

    /// Build a fresh builder by applying each mutator in input order.
    ///
    /// Each mutator observes the cumulative state left by prior mutators.
    /// The first mutator error aborts construction and propagates to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`ReqoptError::Configuration`](crate::ReqoptError) when a
    /// mutator's precondition on builder state is violated.
    pub fn from_options(opts: impl IntoIterator<Item = OptionFn>) -> Result<Self> {
        let mut builder = Builder::new();
        for opt in opts {
            opt(&mut builder)?;
        }
        Ok(builder)
    }

    /// Content length derived from the body, 0 when no body is set.
    pub fn content_length(&self) -> u64 {
        self.body.as_ref().map_or(0, |b| b.len() as u64)
    }

    /// Obtain a fresh readable stream over the body bytes.
    ///
    /// Every call yields an independent reader positioned at the start, so
    /// the collaborator can re-read the body for retries or redirects.
    /// Returns `None` when no body has been set.
    pub fn body_reader(&self) -> Option<Cursor<&[u8]>> {
        self.body.as_deref().map(Cursor::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_empty_options_yield_defaults() {
        let builder = Builder::from_options([]).expect("empty build");
        assert_eq!(builder.address, "");
        assert!(builder.headers.is_empty());
        assert!(builder.cookies.is_empty());
        assert_eq!(builder.content_length(), 0);
        assert!(builder.body_reader().is_none());
        assert!(builder.client.timeout.is_none());
        assert!(builder.client.transport.is_none());
    }

    #[test]
    fn test_mutators_apply_in_order() {
        let opts: Vec<OptionFn> = vec![
            Box::new(|b: &mut Builder| {
                b.address = "first".to_string();
                Ok(())
            }),
            Box::new(|b: &mut Builder| {
                b.address.push_str("-second");
                Ok(())
            }),
        ];
        let builder = Builder::from_options(opts).expect("build");
        assert_eq!(builder.address, "first-second");
    }

    #[test]
    fn test_first_error_aborts_construction() {
        let opts: Vec<OptionFn> = vec![
            Box::new(|_: &mut Builder| {
                Err(crate::ReqoptError::Configuration("boom".to_string()))
            }),
            Box::new(|b: &mut Builder| {
                b.address = "never".to_string();
                Ok(())
            }),
        ];
        assert!(Builder::from_options(opts).is_err());
    }

    #[test]
    fn test_body_reader_is_repeatable() {
        let mut builder = Builder::new();
        builder.body = Some(b"hello".to_vec());

        for _ in 0..2 {
            let mut data = Vec::new();
            builder
                .body_reader()
                .expect("body set")
                .read_to_end(&mut data)
                .expect("read");
            assert_eq!(data, b"hello");
        }
        assert_eq!(builder.content_length(), 5);
    }
}
