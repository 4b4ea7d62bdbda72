//! The fetch transport behind [`Client`].
//!
//! The club backend is a handful of static JSON documents, so the transport
//! knows a single operation: GET a url and hand back the status line and the
//! raw body. Native targets go through `hyper`, wasm goes through the
//! browser fetch via `reqwasm`. Decoding is shared and lives here so both
//! backends fail with the same error shape.
//!
//! [`Client`]: crate::Client

use serde::de::DeserializeOwned;

use thiserror::Error;

use crate::Result;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[error(transparent)]
    Hyper(#[from] hyper::Error),
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[error("invalid url: {0}")]
    Url(#[from] http::uri::InvalidUri),
    #[cfg(target_family = "wasm")]
    #[error(transparent)]
    Fetch(#[from] reqwasm::Error),
    #[cfg(target_family = "wasm")]
    #[error("bad status line: {0}")]
    Status(#[from] http::status::InvalidStatusCode),
}

/// The platform fetch client.
#[derive(Clone, Debug, Default)]
pub struct Transport {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: native::Inner,
    #[cfg(target_family = "wasm")]
    inner: wasm::Inner,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches `url` and decodes the json body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, the server responds with a
    /// non-2xx status code or the body is not valid json for `T`.
    pub async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.inner.get(url).await?;

        if !status.is_success() {
            return Err(crate::Error::BadStatusCode(status));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod native {
    use http::StatusCode;
    use hyper::{body, client::HttpConnector};
    use hyper_tls::HttpsConnector;

    use super::Error;
    use crate::Result;

    #[derive(Clone, Debug)]
    pub struct Inner {
        client: hyper::Client<HttpsConnector<HttpConnector>>,
    }

    impl Inner {
        pub async fn get(&self, url: &str) -> Result<(StatusCode, Vec<u8>)> {
            let uri = url.parse().map_err(Error::from)?;

            let resp = self.client.get(uri).await.map_err(Error::from)?;
            let status = resp.status();

            let body = body::to_bytes(resp.into_body()).await.map_err(Error::from)?;

            Ok((status, body.to_vec()))
        }
    }

    impl Default for Inner {
        fn default() -> Self {
            Self {
                client: hyper::Client::builder().build(HttpsConnector::new()),
            }
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use http::StatusCode;

    use super::Error;
    use crate::Result;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct Inner;

    impl Inner {
        pub async fn get(&self, url: &str) -> Result<(StatusCode, Vec<u8>)> {
            let resp = reqwasm::http::Request::get(url)
                .send()
                .await
                .map_err(Error::from)?;

            let status = StatusCode::from_u16(resp.status()).map_err(Error::from)?;
            let body = resp.binary().await.map_err(Error::from)?;

            Ok((status, body))
        }
    }
}
