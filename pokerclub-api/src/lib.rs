pub mod bridge;
pub mod id;
pub mod rating;
pub mod tournaments;
pub mod transport;
pub mod users;

use std::borrow::Cow;

use http::StatusCode;
use serde::de::DeserializeOwned;

use thiserror::Error;

use rating::RatingClient;
use tournaments::TournamentsClient;
use transport::Transport;

/// The errors that may occur while talking to the club backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] transport::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("bad status code: {0}")]
    BadStatusCode(StatusCode),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A client for the club's read-only JSON endpoints.
///
/// The `Client` only dispatches fetches; it keeps no state other than the
/// configured base url and can be cloned freely.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    transport: Transport,
}

impl Client {
    pub fn new<T>(base_url: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            base_url: base_url.into(),
            transport: Transport::new(),
        }
    }

    /// Fetches `{base_url}{path}` and decodes the json body.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        self.transport.get(&url).await
    }

    pub fn tournaments(&self) -> TournamentsClient<'_> {
        TournamentsClient::new(self)
    }

    pub fn rating(&self) -> RatingClient<'_> {
        RatingClient::new(self)
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}
