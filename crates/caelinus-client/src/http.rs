//! reqwest-backed `SubscriptionBackend`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use caelinus_core::{ActionResult, ClientConfig, Plan, PlanInfo, SubscriptionSnapshot};

use crate::backend::SubscriptionBackend;
use crate::error::ClientError;

#[derive(Serialize)]
struct UpgradeRequest<'a> {
    plan_type: &'a str,
}

#[derive(Serialize)]
struct RedeemRequest<'a> {
    code: &'a str,
}

/// JSON-over-HTTP client for the subscription endpoints.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.effective_timeout_secs()))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> Result<String, ClientError> {
        self.config.endpoint(path).ok_or(ClientError::MissingBaseUrl)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let response = self.authorize(self.client.get(&url)).send().await?;
        decode(response).await
    }

    /// POST for the action endpoints. A non-2xx reply that still carries an
    /// `ActionResult` body is returned as a failed result, not an error.
    async fn post_action<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<ActionResult, ClientError> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self.authorize(self.client.post(&url)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }
        match serde_json::from_str::<ActionResult>(&text) {
            Ok(result) => Ok(ActionResult {
                success: false,
                ..result
            }),
            Err(_) => Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl SubscriptionBackend for HttpBackend {
    async fn fetch_status(&self) -> Result<SubscriptionSnapshot, ClientError> {
        self.get_json(self.config.effective_status_path()).await
    }

    async fn fetch_plans(&self) -> Result<Vec<PlanInfo>, ClientError> {
        self.get_json(self.config.effective_plans_path()).await
    }

    async fn upgrade(&self, target: Plan) -> Result<ActionResult, ClientError> {
        let body = UpgradeRequest {
            plan_type: target.as_str(),
        };
        self.post_action(self.config.effective_upgrade_path(), &body).await
    }

    async fn redeem_invite(&self, code: &str) -> Result<ActionResult, ClientError> {
        self.post_action(self.config.effective_redeem_path(), &RedeemRequest { code })
            .await
    }
}
