use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::lookup_parse;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup_parse(&lookup, "HOST").unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = lookup_parse(&lookup, "PORT").unwrap_or(5000);

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
        }
    }
}
