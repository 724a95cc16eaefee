//! Client-side configuration descriptors
//!
//! Plain data handed to the reqwest collaborator at finalization. Nothing
//! here touches the network; certificate files are only read when a client
//! is actually built.

use std::path::PathBuf;
use std::time::Duration;

/// TLS configuration carried by a transport
#[derive(Debug, Clone)]
pub struct TlsConfig {
    pub verify_certs: bool,
    pub ca_cert_file: Option<PathBuf>,
    pub client_cert_file: Option<PathBuf>,
    pub client_key_file: Option<PathBuf>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        TlsConfig {
            verify_certs: true,
            ca_cert_file: None,
            client_cert_file: None,
            client_key_file: None,
        }
    }
}

/// Transport configuration
///
/// Connection mechanics delegated to the collaborator: connect timeout,
/// pool sizing, and optional TLS settings. Replacing the transport replaces
/// everything here, including any TLS settings installed on the previous
/// one.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    pub connect_timeout: Option<Duration>,
    pub pool_max_idle_per_host: Option<usize>,
    pub tls: Option<TlsConfig>,
}

impl Transport {
    pub fn new() -> Self {
        Transport::default()
    }
}

/// Client descriptor
///
/// `timeout` of `None` means no explicit timeout (the collaborator default
/// applies). `transport` of `None` means the collaborator's default
/// transport; TLS settings cannot be installed until a transport is present.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub transport: Option<Transport>,
}
