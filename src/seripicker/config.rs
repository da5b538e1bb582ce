use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub discord_bot_token: String,

    /// Remote feed with the weighted series list.
    #[serde(default = "default_series_url")]
    pub series_url: String,

    /// Number of draws per `select` run.
    #[serde(default = "default_draws")]
    pub draws: u32,
}

fn default_series_url() -> String {
    "https://api.myjson.com/bins/pi4b3".into()
}

fn default_draws() -> u32 {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_bot_token: Default::default(),
            series_url: default_series_url(),
            draws: default_draws(),
        }
    }
}
