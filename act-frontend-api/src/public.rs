use gloo_net::http::Request;

use act_boundary::{Activities, SuccessMessage};

use crate::{into_json, url, Result};

/// Public activity signup API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// Fetch the full activity collection.
    pub async fn activities(&self) -> Result<Activities> {
        let url = url::activities(&self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Sign `email` up for the named activity.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<SuccessMessage> {
        let url = url::signup(&self.url, activity, email);
        let response = Request::post(&url).send().await?;
        into_json(response).await
    }

    /// Remove `email` from the named activity.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<SuccessMessage> {
        let url = url::unregister(&self.url, activity, email);
        let response = Request::delete(&url).send().await?;
        into_json(response).await
    }
}
