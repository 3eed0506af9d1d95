use tui_textarea::Input;

use super::AnswerResponse;
use super::StartResponse;

pub enum Event {
    AnswerFailed(u64, String),
    AnswerResponse(u64, AnswerResponse),
    HealthCheckFailed(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    StartFailed(u64, String),
    StartResponse(u64, StartResponse),
    UIResize(),
    UITick(),
}
