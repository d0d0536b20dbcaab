use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;
mod url;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] act_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<act_boundary::Error>().await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_detail() {
        let err = Error::from(act_boundary::Error {
            detail: "Activity not found".into(),
        });
        assert_eq!(err.to_string(), "Activity not found");
        assert!(matches!(err, Error::Api(_)));
    }
}
