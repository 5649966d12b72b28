/// Host shown under a reference title, without a leading `www.`.
pub fn host_label(raw_url: &str) -> String {
    url::Url::parse(raw_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.strip_prefix("www.").unwrap_or(h).to_string()))
        .unwrap_or_else(|| "Fonte oficial".to_string())
}
