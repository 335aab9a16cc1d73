use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use tripboard_core::gateways;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] tripboard_boundary::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<Error> for gateways::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Fetch(msg) => Self::Fetch(msg),
            Error::Api(tripboard_boundary::Error { error }) => Self::Api(error),
            Error::Decode(_) => Self::Api(err.to_string()),
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;
    from_body(status, &body)
}

/// Decodes a response body.
///
/// A non-2xx status or an `error` field in a JSON object is a failure,
/// even if the status reports success.
pub fn from_body<T>(status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let ok = (200..300).contains(&status);
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) if !ok => return Err(Error::Fetch(format!("HTTP {status}"))),
        Err(err) => return Err(Error::Decode(err.to_string())),
    };
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(tripboard_boundary::Error {
            error: error.to_string(),
        }
        .into());
    }
    if !ok {
        return Err(Error::Fetch(format!("HTTP {status}")));
    }
    serde_json::from_value(value).map_err(|err| Error::Decode(err.to_string()))
}

/// Checks the reply of a mutation whose body carries no data.
pub async fn into_ack(response: Response) -> Result<()> {
    let status = response.status();
    let body = response.text().await?;
    ack_from_body(status, &body)
}

/// Like [`from_body`], but an empty body is fine on success.
pub fn ack_from_body(status: u16, body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Error::Fetch(format!("HTTP {status}")))
        };
    }
    from_body::<Value>(status, body).map(|_| ())
}
