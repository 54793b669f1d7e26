//! URL shortener adapter invoking a local script, with a JSON-backed cache.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::adapters::subprocess::run_with_timeout;
use crate::domain::settings::ShortenerSettings;
use crate::ports::UrlShortener;

const SHORTENER_TIMEOUT: Duration = Duration::from_secs(30);

/// Hosts that are already shortener output; such URLs pass through untouched.
const SHORTENER_DOMAINS: &[&str] = &[
    "tinyurl.com",
    "bit.ly",
    "bitly.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "short.io",
];

/// Runs the configured shortener script. Every failure degrades to the
/// original URL with a printed warning; shortening never blocks a workflow.
pub struct CommandUrlShortener {
    settings: ShortenerSettings,
    cache: BTreeMap<String, String>,
    dirty: bool,
}

impl CommandUrlShortener {
    pub fn new(settings: ShortenerSettings, cache: BTreeMap<String, String>) -> Self {
        Self { settings, cache, dirty: false }
    }

    /// The cache plus whether it gained entries since construction.
    pub fn into_cache(self) -> (BTreeMap<String, String>, bool) {
        (self.cache, self.dirty)
    }

    /// The cache, only when it gained entries since construction.
    pub fn dirty_cache(&self) -> Option<&BTreeMap<String, String>> {
        self.dirty.then_some(&self.cache)
    }

    fn script_path(&self) -> Option<PathBuf> {
        let raw = self.settings.script_path.as_deref()?;
        let expanded = match raw.strip_prefix("~/") {
            Some(rest) => PathBuf::from(std::env::var_os("HOME")?).join(rest),
            None => PathBuf::from(raw),
        };
        expanded.exists().then_some(expanded)
    }
}

pub fn is_already_shortened(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else { return false };
    let Some(host) = parsed.host_str() else { return false };
    let host = host.to_lowercase();
    SHORTENER_DOMAINS.contains(&host.as_str())
}

impl UrlShortener for CommandUrlShortener {
    fn shorten(&mut self, url: &str) -> String {
        if is_already_shortened(url) || !self.settings.enabled {
            return url.to_string();
        }

        if self.settings.cache_enabled
            && let Some(cached) = self.cache.get(url)
        {
            return cached.clone();
        }

        let Some(script) = self.script_path() else {
            eprintln!(
                "Warning: URL shortener script not found at {}",
                self.settings.script_path.as_deref().unwrap_or("(unset)")
            );
            return url.to_string();
        };

        let script = script.display().to_string();
        let args = [script.as_str(), "--no-copy", url];
        match run_with_timeout(
            &self.settings.command,
            &args,
            SHORTENER_TIMEOUT,
            "URL shortener",
            "Check url_shortener.command in settings.json.",
        ) {
            Ok(captured) if captured.success => {
                let shortened = captured.stdout.trim().to_string();
                if shortened.starts_with("http") {
                    if self.settings.cache_enabled {
                        self.cache.insert(url.to_string(), shortened.clone());
                        self.dirty = true;
                    }
                    shortened
                } else {
                    eprintln!("Warning: Unexpected shortener output: {shortened}");
                    url.to_string()
                }
            }
            Ok(captured) => {
                eprintln!("Warning: URL shortening failed: {}", captured.stderr.trim());
                url.to_string()
            }
            Err(error) => {
                eprintln!("Warning: URL shortener error: {error}");
                url.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(enabled: bool) -> ShortenerSettings {
        ShortenerSettings { enabled, ..ShortenerSettings::default() }
    }

    #[test]
    fn recognizes_known_shortener_hosts() {
        assert!(is_already_shortened("https://tinyurl.com/abc"));
        assert!(is_already_shortened("https://BIT.LY/abc"));
        assert!(!is_already_shortened("https://example.com/page"));
        assert!(!is_already_shortened("not a url"));
    }

    #[test]
    fn already_shortened_urls_pass_through() {
        let mut shortener = CommandUrlShortener::new(settings(true), BTreeMap::new());
        assert_eq!(shortener.shorten("https://tinyurl.com/abc"), "https://tinyurl.com/abc");
    }

    #[test]
    fn disabled_shortener_is_a_passthrough() {
        let mut shortener = CommandUrlShortener::new(settings(false), BTreeMap::new());
        assert_eq!(shortener.shorten("https://example.com/long"), "https://example.com/long");
        let (_, dirty) = shortener.into_cache();
        assert!(!dirty);
    }

    #[test]
    fn cache_hit_skips_the_subprocess() {
        let mut cache = BTreeMap::new();
        cache.insert("https://example.com/long".to_string(), "https://tinyurl.com/x".to_string());
        let mut shortener = CommandUrlShortener::new(settings(true), cache);
        assert_eq!(shortener.shorten("https://example.com/long"), "https://tinyurl.com/x");
    }

    #[test]
    fn missing_script_degrades_to_original() {
        let mut config = settings(true);
        config.script_path = Some("/definitely/not/here.py".to_string());
        let mut shortener = CommandUrlShortener::new(config, BTreeMap::new());
        assert_eq!(shortener.shorten("https://example.com/long"), "https://example.com/long");
    }
}
