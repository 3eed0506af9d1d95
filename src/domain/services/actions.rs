#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GuessServiceBox;

fn request_error(err: anyhow::Error) -> String {
    return format!("{err:#}");
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs actions one at a time against the guess service, so at most one
    /// request is ever in flight. Returns once the UI drops its sender.
    pub async fn start(
        service: GuessServiceBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::HealthCheck() => {
                    if let Err(err) = service.health_check().await {
                        tx.send(Event::HealthCheckFailed(request_error(err)))?;
                    }
                }
                Action::StartGame(generation) => match service.start().await {
                    Ok(res) => {
                        tx.send(Event::StartResponse(generation, res))?;
                    }
                    Err(err) => {
                        tracing::error!(error = ?err, "Start request failed");
                        tx.send(Event::StartFailed(generation, request_error(err)))?;
                    }
                },
                Action::SubmitAnswer(generation, req) => match service.answer(req).await {
                    Ok(res) => {
                        tx.send(Event::AnswerResponse(generation, res))?;
                    }
                    Err(err) => {
                        tracing::error!(error = ?err, "Answer request failed");
                        tx.send(Event::AnswerFailed(generation, request_error(err)))?;
                    }
                },
            }
        }

        return Ok(());
    }
}
