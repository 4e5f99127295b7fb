use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

pub const ADDR_VAR: &str = "ORDER_DESK_ADDR";
pub const STORE_BUFFER_VAR: &str = "ORDER_DESK_STORE_BUFFER";

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);
const DEFAULT_STORE_BUFFER: usize = 32;

/// Runtime settings, read from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Capacity of the order store's request channel.
    pub store_buffer: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_ADDR),
            store_buffer: DEFAULT_STORE_BUFFER,
        }
    }
}

impl ServiceConfig {
    /// Loads `.env.local` if present, then reads the environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            config.bind_addr = raw
                .trim()
                .parse()
                .with_context(|| format!("{ADDR_VAR}={raw:?} is not a socket address"))?;
        }

        if let Some(raw) = lookup(STORE_BUFFER_VAR) {
            let buffer: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("{STORE_BUFFER_VAR}={raw:?} is not a number"))?;
            if buffer == 0 {
                bail!("{STORE_BUFFER_VAR} must be at least 1");
            }
            config.store_buffer = buffer;
        }

        Ok(config)
    }
}
