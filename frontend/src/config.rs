pub struct Config;

impl Config {
    /// Base URL prepended to every API path.
    ///
    /// Empty means relative URLs: Trunk proxies `/api/` to the backend in
    /// development and the hosting proxy does the same in production.
    pub fn api_base_url() -> String {
        option_env!("API_BASE_URL").unwrap_or_default().trim_end_matches('/').to_string()
    }
}
