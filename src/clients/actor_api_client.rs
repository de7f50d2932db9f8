use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    RetryIf,
};

use crate::{
    config::Config,
    error::{ApiError, Result},
    model::{
        actor::{ActorComparison, ActorDetails, ActorSearchResult, PopularActor},
        charts_response::ChartsResponse,
    },
};

/// Typed access to the actor-analytics backend.
#[derive(Debug, Clone)]
pub struct ActorApiClient {
    client: Client,
    base_url: Url,
    retries: usize,
}

impl ActorApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = header::HeaderValue::from_static(concat!(
            "actorcharts/",
            env!("CARGO_PKG_VERSION")
        ));
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ApiError::Config(format!("Could not build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            retries: config.retries,
        })
    }

    pub async fn get_popular_actors(&self) -> Result<Vec<PopularActor>> {
        let url = self.endpoint(&["api", "popular-actors"])?;
        self.get_json(url).await
    }

    pub async fn search_actors(&self, query: &str) -> Result<Vec<ActorSearchResult>> {
        let mut url = self.endpoint(&["api", "search-actor"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }

    pub async fn get_actor_details(&self, actor_name: &str) -> Result<ActorDetails> {
        let url = self.endpoint(&["api", "actor", actor_name])?;
        self.get_json(url).await
    }

    pub async fn get_charts_data(&self, actor_name: &str) -> Result<ChartsResponse> {
        let url = self.endpoint(&["api", "charts-data", actor_name])?;
        self.get_json(url).await
    }

    pub async fn compare_actors(&self, actor_names: &[String]) -> Result<ActorComparison> {
        if actor_names.len() < 2 {
            return Err(ApiError::Application(
                "Need at least 2 actors to compare".to_string(),
            ));
        }

        let mut url = self.endpoint(&["api", "compare-actors"])?;
        {
            let mut pairs = url.query_pairs_mut();
            for name in actor_names {
                pairs.append_pair("actors", name);
            }
        }
        self.get_json(url).await
    }

    /// Appends percent-encoded path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let retry_strategy = ExponentialBackoff::from_millis(10)
            .map(jitter)
            .take(self.retries);
        let value = RetryIf::spawn(
            retry_strategy,
            || self.get_json_no_retry(&url),
            ApiError::is_transport,
        )
        .await?;

        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get_json_no_retry(&self, url: &Url) -> Result<Value> {
        log::debug!("Fetching {}", url);
        let transport_error = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                })
            }
            Err(source) => {
                return Err(ApiError::Decode {
                    url: url.to_string(),
                    source,
                })
            }
        };

        // The backend reports failures as {"error": "..."}, with 400/404/500
        // as well as with 200.
        if let Some(message) = error_message(&value) {
            log::debug!("Backend error for {}: {}", url, message);
            return Err(ApiError::Application(message));
        }

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(value)
    }
}

fn error_message(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get("error")?
        .as_str()
        .map(|message| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(base: &str) -> ActorApiClient {
        let config = Config::from_lookup(|key| match key {
            "ACTORCHARTS_API_URL" => Some(base.to_string()),
            _ => None,
        })
        .unwrap();
        ActorApiClient::new(&config).unwrap()
    }

    #[test]
    fn actor_names_are_encoded_as_one_segment() {
        let client = client_for("http://localhost:5000");
        let url = client
            .endpoint(&["api", "actor", "Emma Stone/Jr?"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/actor/Emma%20Stone%2FJr%3F"
        );
    }

    #[test]
    fn endpoints_keep_base_path() {
        let client = client_for("https://example.com/actors/");
        let url = client.endpoint(&["api", "popular-actors"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/actors/api/popular-actors");
    }

    #[test]
    fn only_top_level_string_errors_count() {
        assert_eq!(
            error_message(&json!({"error": "Actor not found"})).as_deref(),
            Some("Actor not found")
        );
        assert!(error_message(&json!({"analysis": {"error": "nested"}})).is_none());
        assert!(error_message(&json!([{"error": "in a list"}])).is_none());
        assert!(error_message(&json!({"error": 5})).is_none());
    }
}
