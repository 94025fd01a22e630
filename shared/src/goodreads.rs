//! Goodreads metadata client.
//!
//! Looks up a book by title (and optionally author) against the Goodreads
//! XML API and decodes the response into a typed [`BookMetadata`].

use reqwest::{Client, Url};
use serde::Deserialize;
use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use crate::{Config, Error, Result};

/// Errors raised while decoding the provider's XML payload.
#[derive(Error, Debug)]
pub enum MetadataDecodeError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

/// Descriptive metadata for a single book.
///
/// `title` and the first author's name are required; everything else is
/// optional because Goodreads omits or leaves fields empty for obscure
/// editions.
#[derive(Debug, Clone, PartialEq)]
pub struct BookMetadata {
    pub title: String,
    pub author_name: String,
    pub publication_year: Option<i32>,
    pub publisher: Option<String>,
    pub num_pages: Option<u32>,
    pub average_rating: Option<f32>,
    pub ratings_count: Option<u64>,
    pub description: Option<String>,
}

impl BookMetadata {
    /// Decode a Goodreads book response.
    pub fn from_xml(xml: &str) -> std::result::Result<Self, MetadataDecodeError> {
        let response: GoodreadsResponseXml = quick_xml::de::from_str(xml)?;
        let book = response
            .book
            .ok_or(MetadataDecodeError::MissingField("book"))?;

        let title = non_empty(book.title).ok_or(MetadataDecodeError::MissingField("book.title"))?;
        let author_name = book
            .authors
            .and_then(|authors| authors.author.into_iter().next())
            .and_then(|author| non_empty(author.name))
            .ok_or(MetadataDecodeError::MissingField("author.name"))?;

        Ok(Self {
            title,
            author_name,
            publication_year: parse_number(book.publication_year),
            publisher: non_empty(book.publisher),
            num_pages: parse_number(book.num_pages),
            average_rating: parse_number(book.average_rating),
            ratings_count: parse_number(book.ratings_count),
            description: non_empty(book.description),
        })
    }

    /// The sentence spoken back for a successful lookup, ending with the
    /// yes/no description prompt.
    pub fn speech_output(&self) -> String {
        format!(
            "{title} from {author} was published in {year} by publisher {publisher}. \
             It consists of {pages} pages. \
             Its average rating on Goodreads is {rating} from {count} ratings. \
             Do you want to listen to a brief description of {title}? ",
            title = self.title,
            author = self.author_name,
            year = display_or_unknown(&self.publication_year),
            publisher = display_or_unknown(&self.publisher),
            pages = display_or_unknown(&self.num_pages),
            rating = display_or_unknown(&self.average_rating),
            count = display_or_unknown(&self.ratings_count),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_number<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| s.trim().parse().ok())
}

fn display_or_unknown<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Client for the Goodreads book lookup API.
pub struct GoodreadsClient {
    http_client: Client,
    endpoint: Url,
    api_key: String,
}

impl GoodreadsClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.goodreads_endpoint)
            .map_err(|e| Error::Config(format!("Invalid Goodreads endpoint: {}", e)))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
            api_key: config.goodreads_key.clone(),
        })
    }

    /// Build the lookup URL. The author parameter, when present, goes ahead
    /// of the key and title parameters.
    fn lookup_url(&self, title: &str, author: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            if let Some(author) = author {
                query.append_pair("author", author);
            }
            query.append_pair("key", &self.api_key);
            query.append_pair("title", title);
        }
        url
    }

    /// Fetch metadata for a book. One GET, no retries.
    pub async fn fetch_book(&self, title: &str, author: Option<&str>) -> Result<BookMetadata> {
        info!("Looking up book '{}' (author: {:?})", title, author);

        let url = self.lookup_url(title, author);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Goodreads request failed with status {}", status);
            // drain the body before surfacing the failure
            let _ = response.text().await;
            return Err(Error::ProviderStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(BookMetadata::from_xml(&body)?)
    }
}

/// Raw shape of the Goodreads response envelope.
#[derive(Debug, Deserialize)]
struct GoodreadsResponseXml {
    book: Option<BookXml>,
}

#[derive(Debug, Deserialize)]
struct BookXml {
    title: Option<String>,
    publication_year: Option<String>,
    publisher: Option<String>,
    num_pages: Option<String>,
    average_rating: Option<String>,
    ratings_count: Option<String>,
    description: Option<String>,
    authors: Option<AuthorsXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorsXml {
    #[serde(default)]
    author: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    name: Option<String>,
}
