use super::Session;
use super::SessionEvent;
use crate::domain::models::AnswerResponse;
use crate::domain::models::NotificationLevel;
use crate::domain::models::StartResponse;

fn started() -> Session {
    let session = Session::default()
        .reduce(SessionEvent::StartRequested)
        .session;

    return session
        .reduce(SessionEvent::StartSucceeded(StartResponse {
            session_id: "abc".to_string(),
            question: "Is it an animal?".to_string(),
            is_guess: false,
        }))
        .session;
}

fn answered(session: Session, question: &str, is_guess: bool, game_over: bool) -> Session {
    return session
        .reduce(SessionEvent::AnswerRequested)
        .session
        .reduce(SessionEvent::AnswerSucceeded(AnswerResponse {
            question: question.to_string(),
            is_guess,
            game_over,
        }))
        .session;
}

mod start {
    use super::*;

    #[test]
    fn it_marks_loading_on_request() {
        let res = Session::default().reduce(SessionEvent::StartRequested);

        assert!(res.session.is_loading);
        assert!(res.session.game_started);
        assert_eq!(res.session.questions_asked, 0);
        assert_eq!(res.notification, None);
    }

    #[test]
    fn it_stores_first_question() {
        let session = started();

        assert_eq!(
            session,
            Session {
                session_id: "abc".to_string(),
                current_question: "Is it an animal?".to_string(),
                questions_asked: 1,
                is_guess: false,
                game_over: false,
                is_loading: false,
                game_started: true,
            }
        );
    }

    #[test]
    fn it_ignores_request_while_loading() {
        let loading = Session::default()
            .reduce(SessionEvent::StartRequested)
            .session;
        let res = loading.clone().reduce(SessionEvent::StartRequested);

        assert_eq!(res.session, loading);
    }

    #[test]
    fn it_ignores_request_when_already_started() {
        let session = started();
        let res = session.clone().reduce(SessionEvent::StartRequested);

        assert_eq!(res.session, session);
    }

    #[test]
    fn it_rolls_back_on_failure() {
        let res = Session::default()
            .reduce(SessionEvent::StartRequested)
            .session
            .reduce(SessionEvent::StartFailed("connection refused".to_string()));

        assert_eq!(res.session, Session::default());
        assert!(!res.session.is_loading);

        let notification = res.notification.unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.title, "Error starting game");
        assert_eq!(notification.description, "connection refused");
    }
}

mod answer {
    use super::*;

    #[test]
    fn it_updates_question_and_count() {
        let res = started()
            .reduce(SessionEvent::AnswerRequested)
            .session
            .reduce(SessionEvent::AnswerSucceeded(AnswerResponse {
                question: "Is it a cat?".to_string(),
                is_guess: true,
                game_over: false,
            }));

        assert_eq!(res.session.current_question, "Is it a cat?");
        assert!(res.session.is_guess);
        assert_eq!(res.session.questions_asked, 2);
        assert!(!res.session.game_over);
        assert!(!res.session.is_loading);
        assert_eq!(res.notification, None);
    }

    #[test]
    fn it_counts_sequential_answers() {
        let mut session = started();
        for idx in 0..7 {
            session = answered(session, &format!("Question {idx}"), false, false);
        }

        assert_eq!(session.questions_asked, 8);
    }

    #[test]
    fn it_notifies_once_on_game_over() {
        let res = started()
            .reduce(SessionEvent::AnswerRequested)
            .session
            .reduce(SessionEvent::AnswerSucceeded(AnswerResponse {
                question: "Garfield!".to_string(),
                is_guess: true,
                game_over: true,
            }));

        assert!(res.session.game_over);

        let notification = res.notification.unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.title, "I guessed correctly!");

        let again = res.session.reduce(SessionEvent::AnswerSucceeded(AnswerResponse {
            question: "Garfield!".to_string(),
            is_guess: true,
            game_over: true,
        }));
        assert_eq!(again.notification, None);
    }

    #[test]
    fn it_keeps_game_over_sticky() {
        let over = answered(started(), "Garfield!", true, true);
        let res = over.reduce(SessionEvent::AnswerSucceeded(AnswerResponse {
            question: "Something else".to_string(),
            is_guess: false,
            game_over: false,
        }));

        assert!(res.session.game_over);
    }

    #[test]
    fn it_ignores_request_while_loading() {
        let loading = started().reduce(SessionEvent::AnswerRequested).session;
        let res = loading.clone().reduce(SessionEvent::AnswerRequested);

        assert_eq!(res.session, loading);
    }

    #[test]
    fn it_ignores_request_after_game_over() {
        let over = answered(started(), "Garfield!", true, true);
        let res = over.clone().reduce(SessionEvent::AnswerRequested);

        assert_eq!(res.session, over);
        assert!(!res.session.is_loading);
    }

    #[test]
    fn it_leaves_session_on_failure() {
        let session = started();
        let res = session
            .clone()
            .reduce(SessionEvent::AnswerRequested)
            .session
            .reduce(SessionEvent::AnswerFailed("Failed to submit answer".to_string()));

        assert_eq!(res.session, session);

        let notification = res.notification.unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.title, "Error submitting answer");
        assert_eq!(notification.description, "Failed to submit answer");
    }
}

mod reset {
    use super::*;

    #[test]
    fn it_restores_initial_state_from_any_state() {
        let states = vec![
            Session::default(),
            Session::default()
                .reduce(SessionEvent::StartRequested)
                .session,
            started(),
            started().reduce(SessionEvent::AnswerRequested).session,
            answered(started(), "Garfield!", true, true),
        ];

        for state in states {
            let res = state.reduce(SessionEvent::Reset);
            assert_eq!(res.session, Session::default());
            assert_eq!(res.notification, None);
        }
    }
}
