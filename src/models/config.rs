use serde::Deserialize;

/// Configuration options specific to the qiri-sync service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Base endpoint of the Qiri catalog API; the per-item SKU is appended
    /// as a query parameter.
    pub qiri_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}
