use super::AnswerRequest;

/// Requests from the UI to the actions worker. The `u64` is the session
/// generation the request was issued under, echoed back on the matching
/// `Event`.
pub enum Action {
    HealthCheck(),
    StartGame(u64),
    SubmitAnswer(u64, AnswerRequest),
}
