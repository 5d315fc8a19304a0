use serde::{Deserialize, Serialize};

/// One proxy entry as returned by the API.
///
/// Fields are decoded as-is; the client does not validate ranges or formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proxy {
    pub id: String,
    pub protocol: String,
    pub ip: String,
    pub port: u16,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub passwd: Option<String>,
    pub country_code: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub asn_number: Option<String>,
    #[serde(default)]
    pub asn_name: Option<String>,
    pub anonymity: String,
    /// Uptime percentage.
    pub uptime: f64,
    /// Response time in seconds.
    pub response_time: f64,
    pub last_alive_at: String,
    /// Full proxy URL including credentials when present.
    pub proxy_url: String,
    pub https: bool,
    pub google: bool,
}
