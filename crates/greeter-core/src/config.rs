/// Address the listener binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the listener binds to.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP listener binds.
///
/// The server binary always uses [`ListenerConfig::default`]; tests construct
/// their own to bind loopback or ephemeral ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    pub host: String,
    pub port: u16,
}

impl ListenerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
