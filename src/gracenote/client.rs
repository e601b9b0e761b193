//! Gracenote Web API HTTP client
//!
//! Handles communication with the Gracenote XML Web API.
//!
//! ## Protocol Notes
//!
//! ### Endpoint
//! Each client id has its own host: the part of the id before the first `-`
//! selects `https://c{prefix}.web.cddbp.net/webapi/xml/1.0/`.
//!
//! ### Requests
//! Every call is a POST of a `<QUERIES>` document. `REGISTER` trades the
//! client id for a user id; every later query must carry both in `<AUTH>`.
//!
//! ### Responses
//! The HTTP status is 200 even for failed queries. The outcome is the
//! `STATUS` attribute of `<RESPONSE>`: `OK`, `NO_MATCH` or `ERROR`.

use quick_xml::escape::escape;

use super::domain::{GracenoteError, SearchQuery};
use super::dto;

/// User agent string
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Result language and region sent with every search
const QUERY_LANG: &str = "eng";
const QUERY_COUNTRY: &str = "usa";

/// Gracenote API client
pub struct GracenoteClient {
    http_client: reqwest::Client,
    /// Overrides the per-client-id endpoint
    base_url: Option<String>,
}

impl GracenoteClient {
    /// Create a new client
    ///
    /// The client accepts gzip-compressed responses and identifies itself
    /// with a User-Agent header.
    pub fn new() -> Result<Self, GracenoteError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GracenoteError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: None,
        })
    }

    /// Create a client that sends every request to `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GracenoteError> {
        Ok(Self {
            base_url: Some(base_url.into()),
            ..Self::new()?
        })
    }

    /// Endpoint serving `client_id`
    pub fn endpoint(&self, client_id: &str) -> String {
        if let Some(ref url) = self.base_url {
            return url.clone();
        }
        let prefix = client_id.split_once('-').map_or(client_id, |(prefix, _)| prefix);
        format!("https://c{}.web.cddbp.net/webapi/xml/1.0/", prefix)
    }

    /// Exchange a client id for a user id
    pub async fn register(&self, client_id: &str) -> Result<String, GracenoteError> {
        let responses = self.send(client_id, register_query(client_id)).await?;
        register_result(first_response(responses)?)
    }

    /// Search for the single best matching album
    pub async fn search(
        &self,
        client_id: &str,
        user_id: &str,
        query: &SearchQuery,
    ) -> Result<Option<dto::Album>, GracenoteError> {
        tracing::debug!(
            artist = ?query.artist,
            album = ?query.album,
            track = ?query.track,
            "Gracenote album search"
        );

        let responses = self
            .send(client_id, search_query(client_id, user_id, query))
            .await?;
        search_result(first_response(responses)?)
    }

    /// Send the HTTP request and parse the response
    async fn send(&self, client_id: &str, body: String) -> Result<dto::Responses, GracenoteError> {
        let response = self
            .http_client
            .post(self.endpoint(client_id))
            .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GracenoteError::Http {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let text = response.text().await.map_err(network_error)?;

        dto::parse_responses(&text).map_err(|e| GracenoteError::Parse(e.to_string()))
    }
}

/// Transport failure, without the request URL.
///
/// The host name embeds the client id prefix.
fn network_error(e: reqwest::Error) -> GracenoteError {
    GracenoteError::Network(e.without_url().to_string())
}

/// The first `<RESPONSE>`, or the request-level error message
fn first_response(responses: dto::Responses) -> Result<dto::Response, GracenoteError> {
    let dto::Responses { responses, message } = responses;
    responses.into_iter().next().ok_or_else(|| {
        GracenoteError::Api(message.unwrap_or_else(|| "empty response".to_string()))
    })
}

/// User id from a REGISTER response
fn register_result(response: dto::Response) -> Result<String, GracenoteError> {
    if response.status != dto::STATUS_OK {
        return Err(GracenoteError::Registration(
            response.message.unwrap_or(response.status),
        ));
    }

    response
        .user
        .filter(|user| !user.is_empty())
        .ok_or_else(|| GracenoteError::Registration("response carried no user id".to_string()))
}

/// First album of an ALBUM_SEARCH response
fn search_result(response: dto::Response) -> Result<Option<dto::Album>, GracenoteError> {
    match response.status.as_str() {
        dto::STATUS_OK => Ok(response.albums.into_iter().next()),
        dto::STATUS_NO_MATCH => {
            tracing::debug!("Gracenote found no match");
            Ok(None)
        }
        _ => Err(GracenoteError::Api(
            response.message.unwrap_or(response.status),
        )),
    }
}

fn register_query(client_id: &str) -> String {
    format!(
        r#"<QUERIES><QUERY CMD="REGISTER"><CLIENT>{}</CLIENT></QUERY></QUERIES>"#,
        escape(client_id)
    )
}

fn search_query(client_id: &str, user_id: &str, query: &SearchQuery) -> String {
    let fields = [
        ("ARTIST", &query.artist),
        ("ALBUM_TITLE", &query.album),
        ("TRACK_TITLE", &query.track),
    ];
    let texts: String = fields
        .into_iter()
        .filter_map(|(kind, value)| {
            let value = value.as_deref()?;
            Some(format!(r#"<TEXT TYPE="{}">{}</TEXT>"#, kind, escape(value)))
        })
        .collect();

    format!(
        concat!(
            "<QUERIES>",
            "<AUTH><CLIENT>{client}</CLIENT><USER>{user}</USER></AUTH>",
            "<LANG>{lang}</LANG><COUNTRY>{country}</COUNTRY>",
            r#"<QUERY CMD="ALBUM_SEARCH"><MODE>SINGLE_BEST</MODE>{texts}</QUERY>"#,
            "</QUERIES>"
        ),
        client = escape(client_id),
        user = escape(user_id),
        lang = QUERY_LANG,
        country = QUERY_COUNTRY,
        texts = texts,
    )
}
