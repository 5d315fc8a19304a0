use reqwest::Url;

pub(crate) const API_PATH: &str = "/v1/proxies";

/// Optional query constraints for a proxy listing request.
///
/// The empty filter is the default and produces a URL without a query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProxyFilter {
    pub country: Option<String>,
    pub protocol: Option<String>,
    pub page: Option<u32>,
}

impl ProxyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by country code, e.g. `US` or `GB`.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Filter by protocol, e.g. `http`, `https` or `socks5`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Page number for pagination.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("country", country.to_string()));
        }
        if let Some(protocol) = self.protocol.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("protocol", protocol.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Builds the listing URL: `{base}/v1/proxies` plus the filter's parameters
/// in the fixed order country, protocol, page. Absent fields are omitted
/// entirely, so the empty filter yields no query string at all.
pub(crate) fn build_url(base: &Url, filter: &ProxyFilter) -> Url {
    let mut url = base.clone();
    url.set_path(API_PATH);
    url.set_query(None);
    let pairs = filter.pairs();
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in &pairs {
            query.append_pair(name, value);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.getfreeproxy.com").unwrap()
    }

    #[test]
    fn test_empty_filter_has_no_query_string() {
        let url = build_url(&base(), &ProxyFilter::new());
        assert_eq!(url.as_str(), "https://api.getfreeproxy.com/v1/proxies");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_country_only() {
        let url = build_url(&base(), &ProxyFilter::new().country("US"));
        assert_eq!(url.query(), Some("country=US"));
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let filter = ProxyFilter::new().page(3).protocol("socks5").country("GB");
        let url = build_url(&base(), &filter);
        assert_eq!(url.query(), Some("country=GB&protocol=socks5&page=3"));
    }

    #[test]
    fn test_empty_string_fields_are_omitted() {
        let filter = ProxyFilter::new().country("").protocol("").page(1);
        let url = build_url(&base(), &filter);
        assert_eq!(url.query(), Some("page=1"));
    }

    #[test]
    fn test_query_round_trip() {
        let filter = ProxyFilter::new().country("DE").protocol("http").page(7);
        let url = build_url(&base(), &filter);

        let mut decoded = ProxyFilter::new();
        for (name, value) in url.query_pairs() {
            match name.as_ref() {
                "country" => decoded.country = Some(value.into_owned()),
                "protocol" => decoded.protocol = Some(value.into_owned()),
                "page" => decoded.page = value.parse().ok(),
                other => panic!("unexpected parameter: {}", other),
            }
        }
        assert_eq!(decoded, filter);
    }
}
