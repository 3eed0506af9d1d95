pub mod http;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GuessServiceBox;

pub struct GuessServiceManager {}

impl GuessServiceManager {
    pub fn get() -> Result<GuessServiceBox> {
        let url = Config::get(ConfigKey::ApiURL);
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(format!(
                "Guess service URL must start with http:// or https://, got '{url}'"
            ));
        }

        return Ok(Box::<http::HttpGuessService>::default());
    }
}
