//! The option mutator catalogue
//!
//! Each function constructs a boxed mutator to be applied by
//! [`Builder::from_options`](crate::Builder::from_options). Mutators for the
//! same field are last-write-wins except cookies, which are additive.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;

use crate::builder::{Builder, OptionFn};
use crate::config::{TlsConfig, Transport};
use crate::cookie::Cookie;
use crate::error::ReqoptError;

/// Set the target URL.
///
/// No validation is performed; an empty string is accepted and only fails
/// when the collaborator attempts a send.
pub fn with_address(url: impl Into<String>) -> OptionFn {
    let url = url.into();
    Box::new(move |b: &mut Builder| {
        b.address = url;
        Ok(())
    })
}

/// Set the client timeout. A zero duration means unset (collaborator
/// default applies).
pub fn with_timeout(timeout: Duration) -> OptionFn {
    Box::new(move |b: &mut Builder| {
        b.client.timeout = if timeout.is_zero() { None } else { Some(timeout) };
        Ok(())
    })
}

/// Set each header from the map, overwriting existing keys. An empty map is
/// a no-op.
pub fn with_headers(headers: HashMap<String, String>) -> OptionFn {
    Box::new(move |b: &mut Builder| {
        if !headers.is_empty() {
            for (key, value) in headers {
                b.headers.insert(key, value);
            }
        }
        Ok(())
    })
}

/// Set the `Content-Type` header, overwriting any prior value.
pub fn with_content_type(content_type: impl Into<String>) -> OptionFn {
    let content_type = content_type.into();
    Box::new(move |b: &mut Builder| {
        b.headers
            .insert("Content-Type".to_string(), content_type);
        Ok(())
    })
}

/// Append a cookie. Cookies accumulate and never overwrite each other.
pub fn with_cookie(cookie: Cookie) -> OptionFn {
    Box::new(move |b: &mut Builder| {
        b.cookies.push(cookie);
        Ok(())
    })
}

/// Install TLS settings into the current transport.
///
/// Requires a transport to be present already; apply [`with_transport`]
/// first. Note the ordering hazard the other way around: replacing the
/// transport afterwards discards these settings wholesale.
///
/// # Errors
///
/// Returns [`ReqoptError::Configuration`] when no transport is installed.
pub fn with_tls_config(tls: TlsConfig) -> OptionFn {
    Box::new(move |b: &mut Builder| {
        let transport = b.client.transport.as_mut().ok_or_else(|| {
            ReqoptError::Configuration(
                "TLS settings require a transport; apply with_transport first".to_string(),
            )
        })?;
        transport.tls = Some(tls);
        debug!("installed TLS settings into transport");
        Ok(())
    })
}

/// Replace the entire transport, including any TLS settings installed on
/// the previous one.
pub fn with_transport(transport: Transport) -> OptionFn {
    Box::new(move |b: &mut Builder| {
        b.client.transport = Some(transport);
        Ok(())
    })
}

/// Set the request body. Content length derives from the byte count and the
/// builder's [`body_reader`](Builder::body_reader) yields a fresh stream
/// over these bytes on every call.
pub fn with_body(data: Vec<u8>) -> OptionFn {
    Box::new(move |b: &mut Builder| {
        debug!("set request body ({} bytes)", data.len());
        b.body = Some(data);
        Ok(())
    })
}

/// Set the content type to XML.
///
/// The program this builder was modeled on constructed the content-type
/// mutator here and never applied it, leaving this a no-op. The intended
/// behavior is implemented instead.
pub fn with_body_xml() -> OptionFn {
    Box::new(move |b: &mut Builder| {
        b.headers.insert(
            "Content-Type".to_string(),
            "application/xml; charset=UTF-8".to_string(),
        );
        Ok(())
    })
}
