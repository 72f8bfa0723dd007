pub mod auth;
pub mod leaderboard;
pub mod registrations;
pub mod tournaments;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_join_url() {
        assert_eq!(join_url("", "/api/tournaments"), "/api/tournaments");
        assert_eq!(
            join_url("https://api.spiritesports.in", "/api/tournaments"),
            "https://api.spiritesports.in/api/tournaments"
        );
    }
}
