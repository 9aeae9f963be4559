//! Client configuration: where the API lives and list/toast defaults.
//!
//! Loaded once in `App` and provided through Leptos context.

/// Backend port used when the API base is derived from `window.location`
pub const BACKEND_PORT: u16 = 3000;

pub const DEFAULT_PAGE_SIZE: usize = 50;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// e.g. "http://localhost:3000", never with a trailing slash
    pub api_base: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub toast_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            toast_timeout_ms: TOAST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// `ERP_API_BASE` at build time wins; otherwise the page's own host on
    /// the backend port.
    pub fn load() -> Self {
        let api_base = match option_env!("ERP_API_BASE") {
            Some(base) if !base.trim().is_empty() => normalize_base(base),
            _ => api_base_from_location(),
        };
        log::info!("API base: {}", api_base);
        Self::default().with_api_base(api_base)
    }

    pub fn with_api_base(mut self, base: impl AsRef<str>) -> Self {
        self.api_base = normalize_base(base.as_ref());
        self
    }

    /// Page size choices, always including the default.
    pub fn page_sizes(&self) -> Vec<usize> {
        let mut sizes = self.page_size_options.clone();
        if !sizes.contains(&self.default_page_size) {
            sizes.push(self.default_page_size);
        }
        sizes.retain(|s| *s > 0);
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn base_from_parts(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

fn api_base_from_location() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_parts(&protocol, &hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.toast_timeout_ms, 4000);
        assert_eq!(config.page_sizes(), vec![10, 25, 50, 100]);
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_api_base(" https://erp.example.com/ ");
        assert_eq!(config.api_base, "https://erp.example.com");
    }

    #[test]
    fn test_base_from_location_parts() {
        assert_eq!(base_from_parts("https:", "erp.local"), "https://erp.local:3000");
    }

    #[test]
    fn test_page_sizes_include_default() {
        let config = ClientConfig {
            default_page_size: 30,
            page_size_options: vec![100, 10, 0, 10],
            ..Default::default()
        };
        assert_eq!(config.page_sizes(), vec![10, 30, 100]);
    }
}
