#[cfg(test)]
#[path = "answer_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;

/// The closed set of replies the guess service understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display, Serialize, Deserialize)]
pub enum Answer {
    #[strum(serialize = "Yes")]
    #[serde(rename = "Yes")]
    Yes,
    #[strum(serialize = "No")]
    #[serde(rename = "No")]
    No,
    #[strum(serialize = "Don't Know")]
    #[serde(rename = "Don't Know")]
    DontKnow,
    #[strum(serialize = "Maybe")]
    #[serde(rename = "Maybe")]
    Maybe,
}

impl Answer {
    /// Maps a keypress on the game screen to an answer. Letters mirror the
    /// button labels, digits follow the button order.
    pub fn from_key(key: char) -> Option<Answer> {
        match key.to_ascii_lowercase() {
            'y' | '1' => return Some(Answer::Yes),
            'n' | '2' => return Some(Answer::No),
            'd' | '3' => return Some(Answer::DontKnow),
            'm' | '4' => return Some(Answer::Maybe),
            _ => return None,
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Answer::Yes => return 'y',
            Answer::No => return 'n',
            Answer::DontKnow => return 'd',
            Answer::Maybe => return 'm',
        }
    }
}
