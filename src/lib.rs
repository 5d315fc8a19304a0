mod client;
mod config;
mod errors;
mod filter;
mod proxy_model;

pub use client::Client;

pub use config::Config;

pub use errors::FreeProxyError;

pub use filter::ProxyFilter;

pub use proxy_model::Proxy;
