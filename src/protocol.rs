//! Connection-string formatting.
//!
//! Reconstitutes a `"scheme://host:port"` string from a [`ParsedUrl`]'s
//! components, with one shortcut per well-known scheme. Output is direct
//! concatenation: nothing is escaped, validated, or normalized.

use crate::types::ParsedUrl;

impl ParsedUrl {
    /// Build a `"{scheme}://{host}:{port}"` string.
    ///
    /// The instance's own components take precedence: `scheme` and `port`
    /// arguments are used only when the corresponding field is unset. The
    /// host position is filled by the `host` field, falling back to the
    /// `path` field: lenient syntax parsers file a bare string like
    /// `"example.com"` under `path`, and maps built from their output reach
    /// [`Self::from_map`] that way. A segment with no value at all is
    /// rendered empty rather than rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use connurl::ParsedUrl;
    ///
    /// let url = ParsedUrl::new().set_host(Some("example.com"));
    /// assert_eq!(url.to_protocol(Some("ssl"), Some(443)), "ssl://example.com:443");
    ///
    /// // Set components win over the arguments.
    /// let url = url.set_scheme(Some("tls")).set_port(Some(8443));
    /// assert_eq!(url.to_protocol(Some("ssl"), Some(443)), "tls://example.com:8443");
    /// ```
    pub fn to_protocol(&self, scheme: Option<&str>, port: Option<u16>) -> String {
        let scheme = self.scheme.as_deref().or(scheme).unwrap_or("");
        let host = self.host.as_deref().or(self.path.as_deref()).unwrap_or("");
        let port = match self.port.or(port) {
            Some(port) => port.to_string(),
            None => String::new(),
        };

        format!("{scheme}://{host}:{port}")
    }

    /// Build an `"ssl://{host}:{port}"` string, defaulting to port 443.
    ///
    /// # Examples
    ///
    /// ```
    /// use connurl::ParsedUrl;
    ///
    /// let url = ParsedUrl::new().set_host(Some("example.com"));
    /// assert_eq!(url.to_ssl(), "ssl://example.com:443");
    /// assert_eq!(url.set_port(Some(444)).to_ssl(), "ssl://example.com:444");
    /// ```
    pub fn to_ssl(&self) -> String {
        self.to_protocol(Some("ssl"), Some(443))
    }

    /// Build an `"ftp://{host}:{port}"` string, defaulting to port 21.
    pub fn to_ftp(&self) -> String {
        self.to_protocol(Some("ftp"), Some(21))
    }

    /// Build an `"ftps://{host}:{port}"` string, defaulting to port 990.
    pub fn to_ftps(&self) -> String {
        self.to_protocol(Some("ftps"), Some(990))
    }

    /// Build an `"sftp://{host}:{port}"` string, defaulting to port 22.
    pub fn to_sftp(&self) -> String {
        self.to_protocol(Some("sftp"), Some(22))
    }

    /// Build a `"tcp://{host}:{port}"` string, defaulting to port 80.
    pub fn to_tcp(&self) -> String {
        self.to_protocol(Some("tcp"), Some(80))
    }

    /// Build a `"udp://{host}:{port}"` string, defaulting to port 53.
    pub fn to_udp(&self) -> String {
        self.to_protocol(Some("udp"), Some(53))
    }

    /// Build a `"tls://{host}:{port}"` string, defaulting to port 443.
    pub fn to_tls(&self) -> String {
        self.to_protocol(Some("tls"), Some(443))
    }

    /// Build a `"ws://{host}:{port}"` string, defaulting to port 80.
    pub fn to_ws(&self) -> String {
        self.to_protocol(Some("ws"), Some(80))
    }

    /// Build a `"wss://{host}:{port}"` string, defaulting to port 443.
    pub fn to_wss(&self) -> String {
        self.to_protocol(Some("wss"), Some(443))
    }

    /// Build a `"pop3://{host}:{port}"` string, defaulting to port 110.
    pub fn to_pop3(&self) -> String {
        self.to_protocol(Some("pop3"), Some(110))
    }

    /// Build an `"imap://{host}:{port}"` string, defaulting to port 143.
    pub fn to_imap(&self) -> String {
        self.to_protocol(Some("imap"), Some(143))
    }

    /// Build an `"smtp://{host}:{port}"` string, defaulting to port 25.
    pub fn to_smtp(&self) -> String {
        self.to_protocol(Some("smtp"), Some(25))
    }
}
