use anyhow::{Context, Result};
use log::info;
use serenity::futures;
use std::future::Future;
use std::pin::Pin;
use tokio::signal;

use crate::seripicker::seridisco::start_seridisco;
use crate::seripicker::SeriPicker;
use crate::utils::{print_err, unwrap_or_def_verbose, ResultExt as _};

mod logging;
mod seripicker;
mod utils;

async fn terminate_on_signal() -> Result<()> {
    let interrupt_signal: Pin<Box<dyn Future<Output = _>>> = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::interrupt())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    let terminate_signal = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    futures::future::select_all([interrupt_signal, terminate_signal])
        .await
        .0
}

#[tokio::main]
async fn main() {
    logging::init();
    let config = unwrap_or_def_verbose(seripicker::store::load_config());
    let token = config.discord_bot_token.clone();
    let picker = SeriPicker::new(config);
    tokio::spawn(async move {
        start_seridisco(token, picker)
            .await
            .context("Failed to start serenity")
            .print_err();
    });

    info!("Running");
    let _ = terminate_on_signal().await.inspect_err(print_err);
    info!("Terminating.");
}
