//! Plugin system for command handlers.
//!
//! Add new plugins by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding the handler to `command_handler()`

pub mod admin;
pub mod ban;
pub mod info;
pub mod log;
pub mod mute;
pub mod pin;
pub mod purge;
pub mod start;
pub mod warn;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::dispatcher::AppState;

/// All bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Check that the bot is alive")]
    Start,

    // Removal commands
    #[command(description = "Ban the replied-to user")]
    Ban,

    #[command(description = "Unban the replied-to user")]
    Unban,

    #[command(description = "Kick the replied-to user")]
    Kick,

    // Mute commands
    #[command(description = "Mute the replied-to user")]
    Mute,

    #[command(description = "Unmute the replied-to user")]
    Unmute,

    #[command(description = "Mute the replied-to user for N minutes")]
    Tmute,

    // Warning commands
    #[command(description = "Warn the replied-to user")]
    Warn,

    #[command(description = "Clear the replied-to user's warns")]
    Unwarn,

    #[command(description = "Set the warn limit for this group")]
    Setwarn,

    // Cleanup commands
    #[command(description = "Delete messages from the reply down to here")]
    Purge,

    #[command(description = "Delete every logged message of the replied-to user")]
    Delall,

    // Pin commands
    #[command(description = "Pin the replied-to message")]
    Pin,

    #[command(description = "Unpin all pinned messages")]
    Unpin,

    // Info commands
    #[command(description = "List group administrators")]
    Admins,

    #[command(description = "Mention users seen in this group")]
    Tagall,

    #[command(description = "Show info about the replied-to user")]
    Info,

    #[command(description = "Show group statistics")]
    Stats,

    // Logging commands
    #[command(description = "Record this message in the log")]
    Log,

    #[command(description = "Record this message in the log")]
    Message,
}

/// Build the combined command handler.
pub fn command_handler() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start::start_command))
        // Removal
        .branch(case![Command::Ban].endpoint(ban::ban_command))
        .branch(case![Command::Unban].endpoint(ban::unban_command))
        .branch(case![Command::Kick].endpoint(ban::kick_command))
        // Mute
        .branch(case![Command::Mute].endpoint(mute::mute_command))
        .branch(case![Command::Unmute].endpoint(mute::unmute_command))
        .branch(case![Command::Tmute].endpoint(mute::tmute_command))
        // Warnings
        .branch(case![Command::Warn].endpoint(warn::warn_command))
        .branch(case![Command::Unwarn].endpoint(warn::unwarn_command))
        .branch(case![Command::Setwarn].endpoint(warn::setwarn_command))
        // Cleanup
        .branch(case![Command::Purge].endpoint(purge::purge_command))
        .branch(case![Command::Delall].endpoint(purge::delall_command))
        // Pins
        .branch(case![Command::Pin].endpoint(pin::pin_command))
        .branch(case![Command::Unpin].endpoint(pin::unpin_command))
        // Info
        .branch(case![Command::Admins].endpoint(admin::admins_command))
        .branch(case![Command::Tagall].endpoint(admin::tagall_command))
        .branch(case![Command::Info].endpoint(info::info_command))
        .branch(case![Command::Stats].endpoint(info::stats_command))
        // Logging
        .branch(case![Command::Log].endpoint(log::log_command))
        .branch(case![Command::Message].endpoint(log::log_command))
}

/// Whether the sender may run moderation commands here.
///
/// True only in groups and supergroups, for senders that currently hold
/// admin or owner status (or are bot owners). Callers answer a false with
/// silence: no reply, fail closed.
pub(crate) async fn is_authorized(msg: &Message, state: &AppState) -> bool {
    if !msg.chat.is_group() && !msg.chat.is_supergroup() {
        return false;
    }

    let Some(from) = msg.from.as_ref() else {
        return false;
    };

    state
        .permissions
        .is_admin(msg.chat.id, from.id)
        .await
        .unwrap_or(false)
}
