//! Development server configuration and the proxy route table.

use serde::{Deserialize, Serialize};

use crate::env::{keys, EnvMap};

/// Fixed upstream for the error-reporting route.
const SENTRY_UPSTREAM: &str = "http://22.50.5.134:9000";

/// Development server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevConfig {
    #[serde(default = "DevConfig::default_host")]
    pub host: String,

    #[serde(default = "DevConfig::default_port")]
    pub port: u16,

    /// Open the browser on server start
    #[serde(default)]
    pub open: bool,

    /// Fail instead of probing the next free port when the port is taken
    #[serde(default)]
    pub strict_port: bool,

    /// Ordered proxy rules; the first matching prefix wins
    #[serde(default)]
    pub proxy: Vec<ProxyRoute>,
}

impl DevConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        7788
    }

    /// The route handling an inbound path, if any.
    ///
    /// Rules are checked independently in table order and the first textual
    /// prefix match wins.
    pub fn route_for(&self, path: &str) -> Option<&ProxyRoute> {
        self.proxy.iter().find(|route| route.matches(path))
    }
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            open: false,
            strict_port: false,
            proxy: Vec::new(),
        }
    }
}

/// A dev-server rule forwarding a path prefix to an upstream target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRoute {
    /// Inbound path prefix this rule applies to
    pub prefix: String,

    /// Upstream base URL requests are forwarded to
    pub target: String,

    /// Replacement for the matched prefix (usually empty)
    #[serde(default)]
    pub rewrite_to: String,

    /// Rewrite the `Host` header to the target origin
    #[serde(default = "crate::build::helpers::default_true")]
    pub change_origin: bool,
}

impl ProxyRoute {
    fn new(prefix: &str, target: impl Into<String>) -> Self {
        Self {
            prefix: prefix.to_string(),
            target: target.into(),
            rewrite_to: String::new(),
            change_origin: true,
        }
    }

    /// Whether an inbound path starts with this rule's prefix.
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    /// Forwarded path for an inbound path.
    ///
    /// Exactly the first occurrence of the prefix at position 0 is replaced
    /// by `rewrite_to`; later occurrences of the same text are preserved. A
    /// path that does not match is returned unchanged.
    pub fn rewrite(&self, path: &str) -> String {
        match path.strip_prefix(&self.prefix) {
            Some(rest) => format!("{}{rest}", self.rewrite_to),
            None => path.to_string(),
        }
    }
}

/// The proxy table, targets read from the environment.
///
/// Six fixed rules; every target except the error-reporting upstream comes
/// from the environment, missing variables degrading to empty targets (see
/// [`EnvMap::get_or_empty`]).
pub fn route_table(env: &EnvMap) -> Vec<ProxyRoute> {
    vec![
        ProxyRoute {
            rewrite_to: "/".to_string(),
            ..ProxyRoute::new("/sentry", SENTRY_UPSTREAM)
        },
        ProxyRoute::new("/api", env.get_or_empty(keys::APP_SERVE_URL)),
        ProxyRoute::new("/wapApi", env.get_or_empty(keys::APP_WAP_SERVE_URL)),
        ProxyRoute::new("/proxy/oss", env.get_or_empty(keys::APP_PDF_URL)),
        ProxyRoute::new("/proxy/alioss", env.get_or_empty(keys::APP_PDF_ALI_URL)),
        ProxyRoute::new("/proxy/cdnoss", env.get_or_empty(keys::APP_PDF_CDN_URL)),
    ]
}
