#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ActiveSessionsResponse;
use crate::domain::models::AnswerRequest;
use crate::domain::models::AnswerResponse;
use crate::domain::models::GuessService;
use crate::domain::models::HealthResponse;
use crate::domain::models::StartRequest;
use crate::domain::models::StartResponse;

pub struct HttpGuessService {
    url: String,
    timeout: String,
    client: reqwest::Client,
}

impl Default for HttpGuessService {
    fn default() -> HttpGuessService {
        return HttpGuessService {
            url: Config::get(ConfigKey::ApiURL),
            timeout: Config::get(ConfigKey::HealthCheckTimeout),
            client: reqwest::Client::new(),
        };
    }
}

impl HttpGuessService {
    fn endpoint(&self, path: &str) -> String {
        return format!("{url}{path}", url = self.url.trim_end_matches('/'));
    }
}

#[async_trait]
impl GuessService for HttpGuessService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Guess service URL is not defined");
        }

        let res = match self
            .client
            .get(self.endpoint("/"))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await
        {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Guess service is not reachable");
                bail!("Guess service is not reachable at {}", self.url);
            }
        };

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Guess service health check failed");
            bail!("Guess service health check failed");
        }

        let json = res.json::<HealthResponse>().await?;
        if json.status != "ok" {
            tracing::error!(body = ?json, "Guess service reported unhealthy");
            bail!("Guess service health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn start(&self) -> Result<StartResponse> {
        let res = self
            .client
            .post(self.endpoint("/api/start"))
            .json(&StartRequest::default())
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Failed to start game");
            bail!("Failed to start game");
        }

        let body = res.json::<StartResponse>().await?;
        tracing::debug!(body = ?body, "Start response");

        return Ok(body);
    }

    #[allow(clippy::implicit_return)]
    async fn answer(&self, req: AnswerRequest) -> Result<AnswerResponse> {
        tracing::debug!(session_id = req.session_id.as_str(), answer = %req.answer, "Submitting answer");

        let res = self
            .client
            .post(self.endpoint("/api/answer"))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Failed to submit answer");
            bail!("Failed to submit answer");
        }

        let body = res.json::<AnswerResponse>().await?;
        tracing::debug!(body = ?body, "Answer response");

        return Ok(body);
    }

    #[allow(clippy::implicit_return)]
    async fn active_sessions(&self) -> Result<u64> {
        let res = self.client.get(self.endpoint("/api/sessions")).send().await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Failed to list sessions");
            bail!("Failed to list active sessions");
        }

        let body = res.json::<ActiveSessionsResponse>().await?;
        return Ok(body.active_sessions);
    }
}
