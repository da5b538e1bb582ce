use anyhow::{Context, Result};
use seripicker_model::Series;

use config::Config;

pub(crate) mod command_handler;
pub(crate) mod config;
mod fetch;
mod format;
pub(crate) mod seridisco;
pub(crate) mod store;

/// The two chat-facing operations: the full weighted list and the Top 5
/// lottery. Every call re-fetches the feed; nothing is cached between
/// requests.
pub struct SeriPicker {
    config: Config,
    client: reqwest::Client,
}

impl SeriPicker {
    pub fn new(config: Config) -> Self {
        SeriPicker {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn show_list(&self) -> Result<String> {
        let mut series = self.fetch_series().await.context("show_list")?;
        if series.is_empty() {
            return Ok(String::from("No series loaded :["));
        }
        series.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Ok(format::format_list(&series))
    }

    pub async fn show_top_five(&self) -> Result<String> {
        let series = self.fetch_series().await.context("show_top_five")?;
        let total_weight = ruletka::total_weight(&series);
        let ranked = ruletka::rank(
            &series,
            total_weight,
            self.config.draws,
            &mut rand::thread_rng(),
        )
        .context("show_top_five")?;
        Ok(format::format_top_five(&ranked))
    }

    async fn fetch_series(&self) -> Result<Vec<Series>, fetch::FetchError> {
        fetch::fetch_series(&self.client, &self.config.series_url).await
    }
}
