use crate::Client;

/// Cached copy of the client directory with a time-boxed lifetime.
///
/// Timestamps are milliseconds since the Unix epoch as reported by the caller,
/// so the cache itself never reads a clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    fetched_at_ms: Option<f64>,
    ttl_ms: f64,
}

impl ClientDirectory {
    pub fn new(ttl_secs: u32) -> Self {
        Self {
            clients: Vec::new(),
            fetched_at_ms: None,
            ttl_ms: f64::from(ttl_secs) * 1000.0,
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// A directory that was never loaded is always stale
    pub fn is_stale(&self, now_ms: f64) -> bool {
        match self.fetched_at_ms {
            Some(fetched_at) => now_ms - fetched_at >= self.ttl_ms,
            None => true,
        }
    }

    /// Store a fresh directory listing
    pub fn replace(&mut self, clients: Vec<Client>, now_ms: f64) {
        self.clients = clients;
        self.fetched_at_ms = Some(now_ms);
    }
}
