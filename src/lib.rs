use std::fmt;

use reqwest::IntoUrl;

/// Header the GitHub API uses to advertise how many requests are left in the
/// current window. Lookup through [reqwest]'s header map is case-insensitive,
/// so this matches the `X-RateLimit-Remaining` spelling sent on the wire.
pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-remaining";

/// Stand-in printed when the endpoint sent no rate-limit header.
pub const RATE_LIMIT_FALLBACK: &str = "N/A";

// api.github.com answers 403 to requests that carry no user agent.
const USER_AGENT: &str = "gh-status/0.1";

pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { inner })
    }

    /// Issue a single GET and reduce the response to a [StatusReport].
    ///
    /// Non-2xx statuses are reported, not treated as errors; only transport
    /// failures (connect, DNS, TLS, malformed response) come back as `Err`.
    pub async fn fetch_status<U: IntoUrl>(&self, url: U) -> Result<StatusReport, reqwest::Error> {
        let res = self.inner.get(url).send().await?;
        Ok(StatusReport::from_response(&res))
    }
}

/// The two facts read from a response: the status code, and whatever the
/// rate-limit header said (if it was there at all). The body is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub status: u16,
    pub rate_limit_remaining: Option<String>,
}

impl StatusReport {
    pub fn from_response(res: &reqwest::Response) -> Self {
        let rate_limit_remaining = res
            .headers()
            .get(RATE_LIMIT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Self {
            status: res.status().as_u16(),
            rate_limit_remaining,
        }
    }

    /// The rate-limit value as printed, with [RATE_LIMIT_FALLBACK] standing
    /// in for "absent".
    pub fn rate_limit(&self) -> &str {
        self.rate_limit_remaining
            .as_deref()
            .unwrap_or(RATE_LIMIT_FALLBACK)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GitHub API Status: {}", self.status)?;
        write!(f, "Rate Limit: {}", self.rate_limit())
    }
}
