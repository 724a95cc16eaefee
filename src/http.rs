//! Finalization onto the reqwest collaborator
//!
//! This module turns the accumulated descriptors into a constructed
//! `reqwest::Client` and `reqwest::Request`. Nothing here executes a
//! request; sending is entirely the caller's business.

use log::debug;
use reqwest::{Client, ClientBuilder, Method, Request};

use crate::builder::Builder;
use crate::config::ClientConfig;
use crate::cookie::cookie_header;
use crate::error::{ReqoptError, Result};

/// Build a reqwest client from the client descriptor.
///
/// Certificate files referenced by the TLS settings are read here, not
/// during option application.
pub fn build_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = ClientBuilder::new();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(transport) = &config.transport {
        if let Some(connect_timeout) = transport.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(max_idle) = transport.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }

        if let Some(tls) = &transport.tls {
            if !tls.verify_certs {
                builder = builder.danger_accept_invalid_certs(true);
            }
            if let Some(ca_cert) = &tls.ca_cert_file {
                let pem = std::fs::read(ca_cert).map_err(ReqoptError::Io)?;
                let cert = reqwest::Certificate::from_pem(&pem).map_err(ReqoptError::Http)?;
                builder = builder.add_root_certificate(cert);
            }
            if let (Some(cert_file), Some(key_file)) =
                (&tls.client_cert_file, &tls.client_key_file)
            {
                let mut pem = std::fs::read(cert_file).map_err(ReqoptError::Io)?;
                pem.extend(std::fs::read(key_file).map_err(ReqoptError::Io)?);
                let identity = reqwest::Identity::from_pem(&pem).map_err(ReqoptError::Http)?;
                builder = builder.identity(identity);
            }
        }
    }

    builder.build().map_err(ReqoptError::Http)
}

/// Assemble an unsent request from the builder's request descriptor.
///
/// Address validation happens here, inside the collaborator; the builder
/// itself accepts any string.
pub fn build_request(client: &Client, builder: &Builder) -> Result<Request> {
    let mut request = client.request(Method::GET, &builder.address);

    for (key, value) in &builder.headers {
        request = request.header(key, value);
    }

    if !builder.cookies.is_empty() {
        request = request.header("Cookie", cookie_header(&builder.cookies));
    }

    if let Some(body) = &builder.body {
        request = request.body(body.clone());
    }

    debug!(
        "assembled request for {} ({} bytes body)",
        builder.address,
        builder.content_length()
    );
    request.build().map_err(ReqoptError::Http)
}
