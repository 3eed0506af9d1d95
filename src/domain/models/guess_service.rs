use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Answer;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
    pub question: String,
    pub is_guess: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub answer: Answer,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub question: String,
    pub is_guess: bool,
    pub game_over: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSessionsResponse {
    pub active_sessions: u64,
}

#[async_trait]
pub trait GuessService {
    /// Used at startup to verify the service is reachable before a game is
    /// started.
    async fn health_check(&self) -> Result<()>;

    /// Creates a new session and returns the first question.
    async fn start(&self) -> Result<StartResponse>;

    /// Submits an answer for the current question of a session. Any
    /// non-success response is returned as an error.
    async fn answer(&self, req: AnswerRequest) -> Result<AnswerResponse>;

    /// Number of sessions the service currently holds in memory.
    async fn active_sessions(&self) -> Result<u64>;
}

pub type GuessServiceBox = Box<dyn GuessService + Send + Sync>;
