#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::mem;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Notifications;
use crate::domain::models::Action;
use crate::domain::models::Answer;
use crate::domain::models::AnswerRequest;
use crate::domain::models::AnswerResponse;
use crate::domain::models::Loading;
use crate::domain::models::Notification;
use crate::domain::models::Session;
use crate::domain::models::SessionEvent;
use crate::domain::models::StartResponse;

pub struct AppState {
    pub session: Session,
    pub generation: u64,
    pub notifications: Notifications,
    pub loading: Loading,
}

impl AppState {
    pub fn new(notification_duration: Duration) -> AppState {
        return AppState {
            session: Session::default(),
            generation: 0,
            notifications: Notifications::new(notification_duration),
            loading: Loading::default(),
        };
    }

    fn apply(&mut self, event: SessionEvent) {
        let transition = mem::take(&mut self.session).reduce(event);
        self.session = transition.session;
        if let Some(notification) = transition.notification {
            self.notifications.push(notification);
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation = generation,
                current = self.generation,
                "Dropping response from before reset"
            );
            return false;
        }

        return true;
    }

    /// Requests a new session. Returns false when the guard rejected it.
    pub fn start_game(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if !self.session.can_start() {
            return Ok(false);
        }

        self.apply(SessionEvent::StartRequested);
        tx.send(Action::StartGame(self.generation))?;

        return Ok(true);
    }

    /// Submits an answer for the active session. Ignored while a request is
    /// in flight, once the game is over, or before a session exists.
    pub fn submit_answer(
        &mut self,
        answer: Answer,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if !self.session.can_answer() || !self.session.game_started {
            return Ok(false);
        }

        let req = AnswerRequest {
            session_id: self.session.session_id.to_string(),
            answer,
        };

        self.apply(SessionEvent::AnswerRequested);
        tx.send(Action::SubmitAnswer(self.generation, req))?;

        return Ok(true);
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.apply(SessionEvent::Reset);
    }

    pub fn handle_start_response(&mut self, generation: u64, res: StartResponse) {
        if self.is_current(generation) {
            self.apply(SessionEvent::StartSucceeded(res));
        }
    }

    pub fn handle_start_failed(&mut self, generation: u64, err: String) {
        if self.is_current(generation) {
            self.apply(SessionEvent::StartFailed(err));
        }
    }

    pub fn handle_answer_response(&mut self, generation: u64, res: AnswerResponse) {
        if self.is_current(generation) {
            self.apply(SessionEvent::AnswerSucceeded(res));
        }
    }

    pub fn handle_answer_failed(&mut self, generation: u64, err: String) {
        if self.is_current(generation) {
            self.apply(SessionEvent::AnswerFailed(err));
        }
    }

    pub fn handle_health_check_failed(&mut self, err: String) {
        self.notifications
            .push(Notification::error("Guess service unavailable", &err));
    }

    /// Routes a character keypress. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: char, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if key == 'q' {
            return Ok(true);
        }

        if !self.session.game_started {
            if key == 's' {
                self.start_game(tx)?;
            }
            return Ok(false);
        }

        if key == 'r' || (key == 'p' && self.session.game_over) {
            self.reset();
            return Ok(false);
        }

        if let Some(answer) = Answer::from_key(key) {
            self.submit_answer(answer, tx)?;
        }

        return Ok(false);
    }

    pub fn handle_enter(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if !self.session.game_started {
            self.start_game(tx)?;
        } else if self.session.game_over {
            self.reset();
        }

        return Ok(());
    }

    pub fn tick(&mut self, now: Instant) {
        self.loading.tick();
        self.notifications.prune(now);
    }
}
