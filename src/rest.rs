use crate::client::{create_api_client, Config};
use crate::error::{Result, WowError};
use crate::region::{self, Region};
use crate::signer::{Credentials, SignatureMode};
use crate::time::Timestamp;
use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, DATE};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Instant;
use url::Url;

/// Query parameters of one request, serialized in key order
pub type Params = BTreeMap<String, String>;

/// Fixed path prefix of every resource
const API_PREFIX: [&str; 2] = ["api", "wow"];

/// Client for the WoW community API of one region and locale.
///
/// The value is configured with the `with_*` builders right after
/// [`ApiClient::new`] and never changes afterwards, so it can be shared
/// between threads and reused for any number of calls.
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client
    client: Client,
    /// Transport configuration
    config: Config,
    region: Region,
    locale: &'static str,
    /// Optional signing credentials
    credentials: Option<Credentials>,
    signature_mode: SignatureMode,
}

impl ApiClient {
    /// Create a client for `region` (`"US"`, `"Europe"`, ...) and `locale`.
    ///
    /// An empty locale selects the region's default locale.
    pub fn new(region: &str, locale: &str) -> Result<Self> {
        let (region, locale) = region::resolve(region, locale)?;
        let config = Config::default();
        Ok(ApiClient {
            client: create_api_client(&config)?,
            config,
            region,
            locale,
            credentials: None,
            signature_mode: SignatureMode::default(),
        })
    }

    /// Replace the transport configuration
    pub fn with_config(mut self, config: Config) -> Result<Self> {
        self.client = create_api_client(&config)?;
        self.config = config;
        Ok(self)
    }

    /// Sign every request with the given public key and secret
    pub fn with_credentials(mut self, public_key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(public_key, secret).with_mode(self.signature_mode));
        self
    }

    /// Choose how signatures are produced
    pub fn with_signature_mode(mut self, mode: SignatureMode) -> Self {
        self.signature_mode = mode;
        self.credentials = self.credentials.map(|c| c.with_mode(mode));
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Host requests are sent to, honoring the configured override
    pub fn host(&self) -> &str {
        self.config.host.as_deref().unwrap_or(self.region.host())
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build the URL of a resource.
    ///
    /// `segments` are appended to `/api/wow/` and percent-encoded one by one.
    /// The `locale` parameter is always set to the client's locale, replacing
    /// any value present in `params`; `params` itself is left untouched.
    pub fn url(&self, segments: &[&str], params: &Params) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url(self.region.host()))?;
        url.path_segments_mut()
            .map_err(|_| WowError::UrlParse(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .clear()
            .extend(API_PREFIX)
            .extend(segments);

        let mut query = params.clone();
        query.insert("locale".to_string(), self.locale.to_string());
        url.query_pairs_mut().extend_pairs(query.iter());

        Ok(url)
    }

    /// Fetch a resource and return the raw response body
    pub fn get_raw(&self, segments: &[&str], params: &Params) -> Result<Vec<u8>> {
        let url = self.url(segments, params)?;
        self.execute(url, true)
    }

    /// Fetch a resource and decode the JSON body into `T`
    pub fn get_json<T>(&self, segments: &[&str], params: &Params) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_raw(segments, params)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Perform one GET round trip and buffer the whole body.
    ///
    /// Non-2xx responses are not errors; their body is returned as is.
    pub(crate) fn execute(&self, url: Url, sign: bool) -> Result<Vec<u8>> {
        let mut request = self.client.get(url.as_str());

        if sign {
            if let Some(creds) = self.credentials.as_ref().filter(|c| c.has_secret()) {
                let date = Timestamp::new(Utc::now()).http_date();
                let authorization = creds.authorize("GET", &date, url.path())?;
                request = request.header(DATE, date).header(AUTHORIZATION, authorization);
            }
        }

        let start = Instant::now();
        let response = request.send()?;
        let status = response.status();
        let body = response.bytes()?;

        tracing::debug!(
            method = "GET",
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed = ?start.elapsed(),
            "request completed"
        );
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "non-success status, decoding body anyway");
        }

        Ok(body.to_vec())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("region", &self.region)
            .field("host", &self.host())
            .field("locale", &self.locale)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Build a parameter set from string pairs
pub fn params<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}
