use serde_json::json;

pub fn start_body_fixture() -> String {
    return json!({
        "session_id": "abc",
        "question": "Is it an animal?",
        "is_guess": false,
        "game_over": false
    })
    .to_string();
}

pub fn answer_body_fixture(question: &str, is_guess: bool, game_over: bool) -> String {
    return json!({
        "session_id": "abc",
        "question": question,
        "is_guess": is_guess,
        "game_over": game_over
    })
    .to_string();
}

pub fn health_body_fixture() -> String {
    return json!({
        "status": "ok",
        "message": "Akinator API is running"
    })
    .to_string();
}
