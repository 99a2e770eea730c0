use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use regex::Regex;
use reqwest::Client;

use crate::api::response::{ColorResponse, SchemeResponse};
use crate::domain::model::{ColorInfo, ColorSpace, SchemeColor};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HuegenError, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.thecolorapi.com";
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_SCHEME_KIND: &str = "analogous";

/// Reference color the availability probe asks for.
const STATUS_PROBE_HEX: &str = "FF0000";
/// Number of colors requested per scheme.
const SCHEME_COLOR_COUNT: usize = 5;

/// Client for the remote color service.
///
/// Tracks whether the service is considered reachable and degrades every
/// lookup to `None` instead of surfacing errors. The flag goes offline on
/// any failed request and comes back online only through a successful
/// [`check_status`](Self::check_status) probe.
pub struct ColorApiClient {
    client: Client,
    base_url: String,
    online: AtomicBool,
    status_timeout: Duration,
    lookup_timeout: Duration,
}

impl ColorApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            // Assume reachable until a probe or a failed request says otherwise.
            online: AtomicBool::new(true),
            status_timeout: DEFAULT_STATUS_TIMEOUT,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::with_base_url(config.api_base_url())
            .with_timeouts(config.status_timeout(), config.lookup_timeout())
    }

    /// Override the bounded waits. Tests use short ones.
    pub fn with_timeouts(mut self, status: Duration, lookup: Duration) -> Self {
        self.status_timeout = status;
        self.lookup_timeout = lookup;
        self
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    fn mark_offline(&self) {
        self.online.store(false, Ordering::Relaxed);
    }

    /// Probe the service with the reference color and record the outcome.
    /// This is the only operation that can flip the flag back online.
    pub async fn check_status(&self) -> bool {
        let url = format!("{}/id?hex={}", self.base_url, STATUS_PROBE_HEX);
        tracing::debug!("Probing color API: {}", url);

        let online = match self
            .client
            .get(&url)
            .timeout(self.status_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::warn!("Color API unavailable: {}", err);
                false
            }
        };

        self.online.store(online, Ordering::Relaxed);
        online
    }

    /// Run one availability probe, discarding the result. The recorded
    /// liveness flag is the effect callers care about.
    pub async fn init(&self) {
        self.check_status().await;
    }

    /// Look up display-ready facts about a color. `color` is a six-digit hex
    /// code, with or without the leading `#`.
    pub async fn color_info(&self, color: &str) -> Option<ColorInfo> {
        if !self.is_online() {
            return None;
        }

        match self.fetch_color_info(color).await {
            Ok(info) => Some(info),
            Err(err) => self.absorb(err, &format!("get color info for {}", color)),
        }
    }

    /// Generate a five-color scheme derived from `base_color`, preserving
    /// the order the service returns.
    pub async fn scheme(&self, base_color: &str, kind: &str) -> Option<Vec<SchemeColor>> {
        if !self.is_online() {
            return None;
        }

        match self.fetch_scheme(base_color, kind).await {
            Ok(colors) => Some(colors),
            Err(err) => self.absorb(err, &format!("generate {} scheme for {}", kind, base_color)),
        }
    }

    /// Convert a color between representations. Supports hex to rgb and
    /// rgb to hex; an rgb input must look like `rgb(255, 0, 0)`.
    pub async fn convert(&self, color: &str, from: ColorSpace, to: ColorSpace) -> Option<String> {
        if !self.is_online() {
            return None;
        }

        let result = match (from, to) {
            (ColorSpace::Hex, ColorSpace::Rgb) => self.fetch_hex_to_rgb(color).await,
            (ColorSpace::Rgb, ColorSpace::Hex) => match parse_rgb_string(color) {
                Some((r, g, b)) => self.fetch_rgb_to_hex(r, g, b).await,
                None => Err(HuegenError::RgbParseError(color.to_string())),
            },
            (from, to) => Err(HuegenError::UnsupportedConversionError { from, to }),
        };

        match result {
            Ok(value) => Some(value),
            Err(err) => self.absorb(err, &format!("convert {} from {} to {}", color, from, to)),
        }
    }

    /// Collapse an operation error into the absence value, flipping the
    /// liveness flag when an actual request failed. Input-shape errors such
    /// as an unparsable rgb string leave the flag alone.
    fn absorb<T>(&self, err: HuegenError, what: &str) -> Option<T> {
        if err.is_request_failure() {
            self.mark_offline();
        }
        tracing::warn!("Failed to {}: {}", what, err);
        None
    }

    async fn fetch_color_info(&self, color: &str) -> Result<ColorInfo> {
        let url = format!("{}/id?hex={}", self.base_url, strip_hex_marker(color));
        let response = self.get_json::<ColorResponse>(&url).await?;
        response.into_color_info()
    }

    async fn fetch_scheme(&self, base_color: &str, kind: &str) -> Result<Vec<SchemeColor>> {
        let url = format!(
            "{}/scheme?hex={}&mode={}&count={}",
            self.base_url,
            strip_hex_marker(base_color),
            kind,
            SCHEME_COLOR_COUNT
        );
        let response = self.get_json::<SchemeResponse>(&url).await?;
        response
            .colors
            .into_iter()
            .map(ColorResponse::into_scheme_color)
            .collect()
    }

    async fn fetch_hex_to_rgb(&self, color: &str) -> Result<String> {
        let url = format!("{}/id?hex={}", self.base_url, strip_hex_marker(color));
        let response = self.get_json::<ColorResponse>(&url).await?;
        response.rgb_formatted()
    }

    async fn fetch_rgb_to_hex(&self, r: u8, g: u8, b: u8) -> Result<String> {
        let url = format!("{}/id?rgb={},{},{}", self.base_url, r, g, b);
        let response = self.get_json::<ColorResponse>(&url).await?;
        response.hex_value()
    }

    /// Issue a GET with the lookup deadline and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Requesting color API: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.lookup_timeout)
            .send()
            .await?;

        tracing::debug!("Color API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(HuegenError::ApiStatusError(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}

impl Default for ColorApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_hex_marker(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

/// Parse an `rgb(r, g, b)` string. Whitespace after the commas is optional;
/// anything else, including channels over 255 or surrounding text, is a
/// parse failure and no request is made.
fn parse_rgb_string(input: &str) -> Option<(u8, u8, u8)> {
    let pattern = Regex::new(r"^rgb\((\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})\)$").unwrap();
    let captures = pattern.captures(input)?;

    let r = captures[1].parse::<u8>().ok()?;
    let g = captures[2].parse::<u8>().ok()?;
    let b = captures[3].parse::<u8>().ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_string_accepts_spaced_and_compact_forms() {
        assert_eq!(parse_rgb_string("rgb(255, 0, 0)"), Some((255, 0, 0)));
        assert_eq!(parse_rgb_string("rgb(1,2,3)"), Some((1, 2, 3)));
        assert_eq!(parse_rgb_string("rgb(10,  20,   30)"), Some((10, 20, 30)));
    }

    #[test]
    fn test_parse_rgb_string_rejects_malformed_input() {
        assert_eq!(parse_rgb_string("rgb(10, 20)"), None);
        assert_eq!(parse_rgb_string("rgb(10, 20, 30, 40)"), None);
        assert_eq!(parse_rgb_string("rgb(256, 0, 0)"), None);
        assert_eq!(parse_rgb_string("rgb(-1, 0, 0)"), None);
        assert_eq!(parse_rgb_string("#FF0000"), None);
        assert_eq!(parse_rgb_string("prefix rgb(1, 2, 3)"), None);
        assert_eq!(parse_rgb_string("rgb(1, 2, 3) suffix"), None);
    }

    #[test]
    fn test_strip_hex_marker() {
        assert_eq!(strip_hex_marker("#FF0000"), "FF0000");
        assert_eq!(strip_hex_marker("FF0000"), "FF0000");
    }

    #[test]
    fn test_client_starts_online_with_defaults() {
        let client = ColorApiClient::new();
        assert!(client.is_online());
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.status_timeout, DEFAULT_STATUS_TIMEOUT);
        assert_eq!(client.lookup_timeout, DEFAULT_LOOKUP_TIMEOUT);
    }
}
