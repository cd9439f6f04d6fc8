//! DuckDuckGo web search over the HTML endpoint.
//!
//! Results are scraped from the `result__a` / `result__snippet` anchors and
//! rendered as `[snippet: ..., title: ..., link: ...]` entries joined by
//! `", "`.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::{ToolDefinition, ToolError};

use super::Tool;

pub const WEB_SEARCH_TOOL: &str = "web_search";
pub const NO_RESULTS: &str = "No good DuckDuckGo Search Result was found";

const USER_AGENT: &str = concat!("saathi/", env!("CARGO_PKG_VERSION"));

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a\b([^>]*\bclass="[^"]*\bresult__a\b[^"]*"[^>]*)>(.*?)</a>"#).unwrap()
});
static SNIPPET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<(a|div|td)\b[^>]*\bclass="[^"]*\bresult__snippet\b[^"]*"[^>]*>(.*?)</(?:a|div|td)>"#,
    )
    .unwrap()
});
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bhref="([^"]*)""#).unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([xX]?)([0-9a-fA-F]+);").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn render(&self) -> String {
        format!(
            "[snippet: {}, title: {}, link: {}]",
            self.snippet, self.title, self.link
        )
    }
}

pub struct WebSearchTool {
    http: reqwest::Client,
    endpoint: String,
    max_results: usize,
    api_key: Option<String>,
}

impl WebSearchTool {
    pub fn new(endpoint: impl Into<String>, max_results: usize) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ToolError::Failed {
                tool: WEB_SEARCH_TOOL.into(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            max_results: max_results.max(1),
            api_key: None,
        })
    }

    /// Sent as a bearer token, for search proxies that require one.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    async fn fetch(&self, query: &str) -> Result<String, ToolError> {
        let failed = |reason: String| ToolError::Failed {
            tool: WEB_SEARCH_TOOL.into(),
            reason,
        };

        let mut request = self.http.post(&self.endpoint).form(&[("q", query)]);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| failed(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();
        if !content_type.starts_with("text/") {
            return Err(ToolError::MalformedResult {
                tool: WEB_SEARCH_TOOL.into(),
                reason: format!("expected an HTML page, got {content_type}"),
            });
        }

        response.text().await.map_err(|e| failed(e.to_string()))
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: WEB_SEARCH_TOOL.to_string(),
            description: "Search the web with DuckDuckGo. Use this for current events, \
                          recent facts, or anything you are unsure about. Returns a short \
                          list of results with snippet, title and link."
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn invoke(&self, arguments: &serde_json::Value) -> Result<String, ToolError> {
        let query = query_from(arguments)?;
        debug!(query = %query, "web search");

        let html = self.fetch(&query).await?;
        let results = parse_results(&html, self.max_results);
        debug!(results = results.len(), "web search done");

        Ok(render_results(&results))
    }
}

/// Accepts `{"query": "..."}` or a bare JSON string.
fn query_from(arguments: &serde_json::Value) -> Result<String, ToolError> {
    let query = match arguments {
        serde_json::Value::String(s) => Some(s.as_str()),
        serde_json::Value::Object(map) => map.get("query").and_then(|q| q.as_str()),
        _ => None,
    };
    match query.map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => Err(ToolError::InvalidArguments {
            tool: WEB_SEARCH_TOOL.into(),
            reason: "expected a non-empty \"query\" string".into(),
        }),
    }
}

pub(crate) fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }
    results
        .iter()
        .map(SearchResult::render)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn parse_results(html: &str, max_results: usize) -> Vec<SearchResult> {
    let titles: Vec<_> = TITLE_RE.captures_iter(html).collect();
    let snippets: Vec<_> = SNIPPET_RE.captures_iter(html).collect();

    let mut results = Vec::new();
    for (i, caps) in titles.iter().enumerate() {
        if results.len() >= max_results {
            break;
        }
        let (Some(whole), Some(attrs), Some(inner)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(href) = HREF_RE.captures(attrs.as_str()).and_then(|c| c.get(1)) else {
            continue;
        };
        let link = decode_link(href.as_str());
        if link.contains("duckduckgo.com/y.js") {
            // sponsored result
            continue;
        }

        let next_title = titles
            .get(i + 1)
            .and_then(|c| c.get(0))
            .map_or(html.len(), |m| m.start());
        let snippet = snippets
            .iter()
            .filter_map(|c| c.get(2))
            .find(|m| m.start() > whole.end() && m.start() < next_title)
            .map(|m| clean_fragment(m.as_str()))
            .unwrap_or_default();

        results.push(SearchResult {
            title: clean_fragment(inner.as_str()),
            link,
            snippet,
        });
    }
    results
}

/// Unwrap DuckDuckGo redirect links (`//duckduckgo.com/l/?uddg=...`).
fn decode_link(href: &str) -> String {
    let href = decode_entities(href);
    let absolute = match href.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => href,
    };
    if let Some(pos) = absolute.find("uddg=") {
        let encoded = absolute[pos + 5..].split('&').next().unwrap_or("");
        if let Ok(decoded) = urlencoding::decode(encoded) {
            return decoded.into_owned();
        }
    }
    absolute
}

fn clean_fragment(fragment: &str) -> String {
    let text = TAG_RE.replace_all(fragment, "");
    let text = decode_entities(&text);
    WS_RE.replace_all(text.trim(), " ").into_owned()
}

fn decode_entities(text: &str) -> String {
    let text = NUMERIC_ENTITY_RE.replace_all(text, |caps: &regex::Captures| {
        let radix = if caps[1].is_empty() { 10 } else { 16 };
        u32::from_str_radix(&caps[2], radix)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
