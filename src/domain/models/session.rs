#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::AnswerResponse;
use super::Notification;
use super::StartResponse;

/// Client side view of one game. Held in memory only, and only ever replaced
/// wholesale through `Session::reduce`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub current_question: String,
    pub questions_asked: u32,
    pub is_guess: bool,
    pub game_over: bool,
    pub is_loading: bool,
    pub game_started: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    StartRequested,
    StartSucceeded(StartResponse),
    StartFailed(String),
    AnswerRequested,
    AnswerSucceeded(AnswerResponse),
    AnswerFailed(String),
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub notification: Option<Notification>,
}

impl Transition {
    fn quiet(session: Session) -> Transition {
        return Transition {
            session,
            notification: None,
        };
    }
}

impl Session {
    pub fn can_start(&self) -> bool {
        return !self.is_loading && !self.game_started;
    }

    pub fn can_answer(&self) -> bool {
        return !self.is_loading && !self.game_over;
    }

    /// Produces the next session for an event. Requests that fail their guard
    /// return the session unchanged.
    pub fn reduce(self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::StartRequested => {
                if !self.can_start() {
                    return Transition::quiet(self);
                }

                return Transition::quiet(Session {
                    is_loading: true,
                    game_started: true,
                    game_over: false,
                    questions_asked: 0,
                    ..self
                });
            }
            SessionEvent::StartSucceeded(res) => {
                return Transition::quiet(Session {
                    session_id: res.session_id,
                    current_question: res.question,
                    is_guess: res.is_guess,
                    questions_asked: 1,
                    is_loading: false,
                    ..self
                });
            }
            SessionEvent::StartFailed(err) => {
                // Back to the start screen so the user can retry.
                return Transition {
                    session: Session::default(),
                    notification: Some(Notification::error("Error starting game", &err)),
                };
            }
            SessionEvent::AnswerRequested => {
                if !self.can_answer() {
                    return Transition::quiet(self);
                }

                return Transition::quiet(Session {
                    is_loading: true,
                    ..self
                });
            }
            SessionEvent::AnswerSucceeded(res) => {
                let mut notification = None;
                if res.game_over && !self.game_over {
                    if res.is_guess {
                        notification = Some(Notification::success(
                            "I guessed correctly!",
                            "Thanks for playing!",
                        ));
                    } else {
                        notification = Some(Notification::success("Game over", &res.question));
                    }
                }

                return Transition {
                    session: Session {
                        current_question: res.question,
                        questions_asked: self.questions_asked + 1,
                        is_guess: res.is_guess,
                        game_over: self.game_over || res.game_over,
                        is_loading: false,
                        ..self
                    },
                    notification,
                };
            }
            SessionEvent::AnswerFailed(err) => {
                return Transition {
                    session: Session {
                        is_loading: false,
                        ..self
                    },
                    notification: Some(Notification::error("Error submitting answer", &err)),
                };
            }
            SessionEvent::Reset => {
                return Transition::quiet(Session::default());
            }
        }
    }
}
