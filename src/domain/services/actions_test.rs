use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Answer;
use crate::domain::models::AnswerRequest;
use crate::domain::models::AnswerResponse;
use crate::domain::models::Event;
use crate::domain::models::GuessService;
use crate::domain::models::StartResponse;

#[derive(Default)]
struct FakeGuessService {
    healthy: bool,
    start: Option<StartResponse>,
    answer: Option<AnswerResponse>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GuessService for FakeGuessService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.healthy {
            bail!("Guess service is not reachable");
        }
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn start(&self) -> Result<StartResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        return self
            .start
            .clone()
            .ok_or_else(|| return anyhow!("connection refused").context("Failed to start game"));
    }

    #[allow(clippy::implicit_return)]
    async fn answer(&self, req: AnswerRequest) -> Result<AnswerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if req.session_id != "abc" {
            bail!("Failed to submit answer");
        }
        return self
            .answer
            .clone()
            .ok_or_else(|| return anyhow!("Failed to submit answer"));
    }

    #[allow(clippy::implicit_return)]
    async fn active_sessions(&self) -> Result<u64> {
        return Ok(0);
    }
}

async fn run(service: FakeGuessService, actions: Vec<Action>) -> Result<Vec<Event>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    for action in actions {
        action_tx.send(action)?;
    }
    drop(action_tx);

    ActionsService::start(Box::new(service), event_tx, &mut action_rx).await?;

    let mut events = vec![];
    while let Some(event) = event_rx.recv().await {
        events.push(event);
    }

    return Ok(events);
}

#[tokio::test]
async fn it_forwards_start_response() -> Result<()> {
    let service = FakeGuessService {
        start: Some(StartResponse {
            session_id: "abc".to_string(),
            question: "Is it an animal?".to_string(),
            is_guess: false,
        }),
        ..FakeGuessService::default()
    };

    let events = run(service, vec![Action::StartGame(4)]).await?;
    assert_eq!(events.len(), 1);

    match &events[0] {
        Event::StartResponse(generation, res) => {
            assert_eq!(*generation, 4);
            assert_eq!(res.session_id, "abc");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_forwards_start_failure_with_cause() -> Result<()> {
    let events = run(FakeGuessService::default(), vec![Action::StartGame(0)]).await?;
    assert_eq!(events.len(), 1);

    match &events[0] {
        Event::StartFailed(generation, err) => {
            assert_eq!(*generation, 0);
            assert_eq!(err, "Failed to start game: connection refused");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_forwards_answers_in_order() -> Result<()> {
    let service = FakeGuessService {
        answer: Some(AnswerResponse {
            question: "Is it a cat?".to_string(),
            is_guess: true,
            game_over: false,
        }),
        ..FakeGuessService::default()
    };

    let events = run(
        service,
        vec![
            Action::SubmitAnswer(
                2,
                AnswerRequest {
                    session_id: "abc".to_string(),
                    answer: Answer::Yes,
                },
            ),
            Action::SubmitAnswer(
                2,
                AnswerRequest {
                    session_id: "stale".to_string(),
                    answer: Answer::No,
                },
            ),
        ],
    )
    .await?;

    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        Event::AnswerResponse(2, res) if res.question == "Is it a cat?"
    ));
    assert!(matches!(
        &events[1],
        Event::AnswerFailed(2, err) if err == "Failed to submit answer"
    ));

    return Ok(());
}

#[tokio::test]
async fn it_reports_health_check_failures_only() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let healthy = FakeGuessService {
        healthy: true,
        calls: calls.clone(),
        ..FakeGuessService::default()
    };
    let events = run(healthy, vec![Action::HealthCheck()]).await?;
    assert!(events.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let events = run(FakeGuessService::default(), vec![Action::HealthCheck()]).await?;
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::HealthCheckFailed(err) if err == "Guess service is not reachable"
    ));

    return Ok(());
}
