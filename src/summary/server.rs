//! Identity of the server that executed a query

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server address (`host:port`) and version string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerInfo {
    address: String,
    version: String,
}

impl ServerInfo {
    pub fn new(address: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            version: version.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Host part of the address, without IPv6 brackets
    pub fn host(&self) -> &str {
        let (host, _) = self.split_address();
        host
    }

    /// Port part of the address, if present and numeric
    pub fn port(&self) -> Option<u16> {
        self.split_address().1.and_then(|p| p.parse().ok())
    }

    fn split_address(&self) -> (&str, Option<&str>) {
        let addr = self.address.as_str();
        if let Some(rest) = addr.strip_prefix('[') {
            // [::1]:7687
            return match rest.split_once(']') {
                Some((host, tail)) => (host, tail.strip_prefix(':')),
                None => (addr, None),
            };
        }
        match addr.split_once(':') {
            // A second colon means a bare IPv6 literal with no port
            Some((_, port)) if port.contains(':') => (addr, None),
            Some((host, port)) => (host, Some(port)),
            None => (addr, None),
        }
    }
}

impl fmt::Display for ServerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.version, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let server = ServerInfo::new("db.example.com:7687", "Neo4j/3.4.0");
        assert_eq!(server.address(), "db.example.com:7687");
        assert_eq!(server.version(), "Neo4j/3.4.0");
        assert_eq!(server.host(), "db.example.com");
        assert_eq!(server.port(), Some(7687));
        assert_eq!(server.to_string(), "Neo4j/3.4.0@db.example.com:7687");
    }

    #[test]
    fn test_ipv6_address() {
        let server = ServerInfo::new("[::1]:7687", "5.0.0");
        assert_eq!(server.host(), "::1");
        assert_eq!(server.port(), Some(7687));

        let bare = ServerInfo::new("fe80::1", "5.0.0");
        assert_eq!(bare.host(), "fe80::1");
        assert_eq!(bare.port(), None);
    }

    #[test]
    fn test_missing_or_bad_port() {
        assert_eq!(ServerInfo::new("localhost", "1").port(), None);
        assert_eq!(ServerInfo::new("localhost:http", "1").port(), None);
        assert_eq!(ServerInfo::new("localhost:99999", "1").port(), None);
        assert_eq!(ServerInfo::new("localhost:99999", "1").host(), "localhost");
    }
}
