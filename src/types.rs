//! The parsed-URL value object and the component map it is built from.

use std::collections::HashMap;

/// A raw component value handed over by a URL syntax parser.
///
/// Every component is text except the port, which is numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A textual component (scheme, host, user, pass, path, query, fragment).
    Text(String),
    /// A numeric component (port).
    Number(u16),
}

/// A mapping from component names to raw values, as produced by a URL
/// syntax parser. See [`crate::split_components`].
pub type ComponentMap = HashMap<String, ComponentValue>;

/// The components of a parsed URL.
///
/// Each component is independently optional: absent means the source string
/// (or map, or setter sequence) never provided it, not that it was empty.
/// No component is derived from another; an absent `port` stays absent
/// even when the `scheme` has a well-known default. Defaulting happens only
/// in the formatting helpers ([`ParsedUrl::to_protocol`] and the named
/// shortcuts).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedUrl {
    /// The scheme component (e.g. "http" or "https").
    pub scheme: Option<String>,
    /// The host component (e.g. "www.example.com").
    pub host: Option<String>,
    /// The port component (e.g. 80 or 443).
    pub port: Option<u16>,
    /// The user component (e.g. "username" in "username:password@example.com").
    pub user: Option<String>,
    /// The password component (e.g. "password" in "username:password@example.com").
    pub pass: Option<String>,
    /// The path component (e.g. "/path/to/page").
    pub path: Option<String>,
    /// The query component (e.g. "query=string" in "?query=string").
    pub query: Option<String>,
    /// The fragment component (e.g. "section1" in "#section1").
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Map key for the scheme component.
    pub const SCHEME: &'static str = "scheme";
    /// Map key for the host component.
    pub const HOST: &'static str = "host";
    /// Map key for the port component.
    pub const PORT: &'static str = "port";
    /// Map key for the user component.
    pub const USER: &'static str = "user";
    /// Map key for the password component.
    pub const PASS: &'static str = "pass";
    /// Map key for the path component.
    pub const PATH: &'static str = "path";
    /// Map key for the query component.
    pub const QUERY: &'static str = "query";
    /// Map key for the fragment component.
    pub const FRAGMENT: &'static str = "fragment";

    /// Create a `ParsedUrl` with every component unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a `ParsedUrl` from a component map.
    ///
    /// Recognized keys ([`ParsedUrl::SCHEME`] through
    /// [`ParsedUrl::FRAGMENT`]) are assigned to the matching field;
    /// unrecognized keys are skipped without error. A [`ComponentValue::Text`]
    /// port is converted with [`str::parse`] and dropped when it is not a
    /// number; a value of the wrong kind for any other field is dropped the
    /// same way. This never fails; an empty map yields an instance with
    /// every component unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use connurl::{ComponentValue, ParsedUrl};
    ///
    /// let mut map = HashMap::new();
    /// map.insert(ParsedUrl::HOST.to_string(), ComponentValue::Text("example.com".into()));
    /// map.insert(ParsedUrl::PORT.to_string(), ComponentValue::Number(8080));
    /// map.insert("color".to_string(), ComponentValue::Text("ignored".into()));
    ///
    /// let url = ParsedUrl::from_map(map);
    /// assert_eq!(url.host.as_deref(), Some("example.com"));
    /// assert_eq!(url.port, Some(8080));
    /// assert!(url.scheme.is_none());
    /// ```
    pub fn from_map(map: ComponentMap) -> Self {
        let mut url = Self::new();

        for (key, value) in map {
            match key.as_str() {
                Self::SCHEME => url.scheme = value.into_text(),
                Self::HOST => url.host = value.into_text(),
                Self::PORT => url.port = value.into_number(),
                Self::USER => url.user = value.into_text(),
                Self::PASS => url.pass = value.into_text(),
                Self::PATH => url.path = value.into_text(),
                Self::QUERY => url.query = value.into_text(),
                Self::FRAGMENT => url.fragment = value.into_text(),
                _ => {}
            }
        }

        url
    }

    /// Set or clear the scheme component.
    ///
    /// Each setter consumes and returns the value so calls can be chained;
    /// setting a component twice overwrites it, and `None` clears it.
    ///
    /// # Examples
    ///
    /// ```
    /// use connurl::ParsedUrl;
    ///
    /// let url = ParsedUrl::new()
    ///     .set_scheme(Some("https"))
    ///     .set_host(Some("example.com"))
    ///     .set_port(Some(8080));
    ///
    /// assert_eq!(url.scheme.as_deref(), Some("https"));
    /// assert_eq!(url.clone().set_port(None).port, None);
    /// ```
    pub fn set_scheme(mut self, scheme: Option<&str>) -> Self {
        self.scheme = scheme.map(str::to_string);
        self
    }

    /// Set or clear the host component.
    pub fn set_host(mut self, host: Option<&str>) -> Self {
        self.host = host.map(str::to_string);
        self
    }

    /// Set or clear the port component.
    pub fn set_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    /// Set or clear the user component.
    pub fn set_user(mut self, user: Option<&str>) -> Self {
        self.user = user.map(str::to_string);
        self
    }

    /// Set or clear the password component.
    pub fn set_pass(mut self, pass: Option<&str>) -> Self {
        self.pass = pass.map(str::to_string);
        self
    }

    /// Set or clear the path component.
    pub fn set_path(mut self, path: Option<&str>) -> Self {
        self.path = path.map(str::to_string);
        self
    }

    /// Set or clear the query component.
    pub fn set_query(mut self, query: Option<&str>) -> Self {
        self.query = query.map(str::to_string);
        self
    }

    /// Set or clear the fragment component.
    pub fn set_fragment(mut self, fragment: Option<&str>) -> Self {
        self.fragment = fragment.map(str::to_string);
        self
    }
}

impl ComponentValue {
    fn into_text(self) -> Option<String> {
        match self {
            ComponentValue::Text(text) => Some(text),
            ComponentValue::Number(_) => None,
        }
    }

    // Text ports arrive from maps built out of string-keyed parser output;
    // an unparseable one is dropped rather than rejected.
    fn into_number(self) -> Option<u16> {
        match self {
            ComponentValue::Number(number) => Some(number),
            ComponentValue::Text(text) => text.parse().ok(),
        }
    }
}
