use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use serenity::all::{ChannelId, Context, EventHandler, GatewayIntents, Message, Ready};

use crate::seripicker::command_handler::{parse_command, CommandDescription};
use crate::seripicker::SeriPicker;
use crate::utils::print_err;

/// Discord adapter: turns `/commands` into picker calls and relays the
/// replies to the originating channel.
#[derive(Clone)]
pub struct SeriDisco(Arc<SeriPicker>);

enum SeriCommand {
    List,
    Select,
    Ayaya,
    Waifu,
    Help,
}

impl SeriCommand {
    fn from_keyword(keyword: &str) -> Option<SeriCommand> {
        match keyword {
            "list" => Some(SeriCommand::List),
            "select" => Some(SeriCommand::Select),
            "ayaya" => Some(SeriCommand::Ayaya),
            "waifu" => Some(SeriCommand::Waifu),
            "help" => Some(SeriCommand::Help),
            _ => None,
        }
    }
}

fn supported_commands() -> Vec<CommandDescription> {
    vec![
        CommandDescription {
            keyword: "list".into(),
            description: "Show all series sorted by weight".into(),
        },
        CommandDescription {
            keyword: "select".into(),
            description: "Run the weighted lottery and show the Top 5".into(),
        },
        CommandDescription {
            keyword: "ayaya".into(),
            description: "AYAYA".into(),
        },
        CommandDescription {
            keyword: "waifu".into(),
            description: "The only correct waifu opinion".into(),
        },
    ]
}

fn dispatch_help() -> String {
    supported_commands()
        .into_iter()
        .map(|c| format!(" - `/{}` {}", c.keyword, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

impl SeriDisco {
    pub fn new(picker: SeriPicker) -> Self {
        SeriDisco(Arc::new(picker))
    }

    async fn dispatch_command(&self, message: &str) -> String {
        let keyword = parse_command(message);
        debug!("Received command: {}", keyword);
        let result = match SeriCommand::from_keyword(keyword) {
            Some(SeriCommand::List) => self.0.show_list().await,
            Some(SeriCommand::Select) => self.0.show_top_five().await,
            Some(SeriCommand::Ayaya) => Ok(String::from("AYAYA!")),
            Some(SeriCommand::Waifu) => Ok(String::from("Rei is trash")),
            Some(SeriCommand::Help) => Ok(dispatch_help()),
            None => return format!("Unknown command {}", keyword),
        };
        // A failed command answers with its error; the bot keeps serving.
        result.unwrap_or_else(|e| {
            error!("Command {} failed: {:#}", keyword, e);
            format!("{e:#}")
        })
    }

    async fn respond(&self, ctx: &Context, channel_id: ChannelId, response: &str) {
        let _ = channel_id
            .say(&ctx.http, response)
            .await
            .inspect_err(print_err);
    }
}

#[serenity::async_trait]
impl EventHandler for SeriDisco {
    async fn message(&self, context: Context, msg: Message) {
        // Don't answer own messages
        if msg.author.bot {
            return;
        }
        if !msg.content.starts_with('/') {
            return;
        }
        let response = self.dispatch_command(&msg.content).await;
        self.respond(&context, msg.channel_id, &response).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

pub async fn start_seridisco(token: String, picker: SeriPicker) -> Result<()> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::Client::builder(token, intents)
        .event_handler(SeriDisco::new(picker))
        .await?;

    info!("Discord: Starting Discord client");
    Ok(client.start().await?)
}
