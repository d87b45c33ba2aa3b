//! `k9` - command-line front end for the k9crypt messaging API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use k9client::{
    ApiClient, Config, PocketBase, RoomType, anonymous_user_id,
    notifications::{fetch_all_notifications, get_notification},
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "k9")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether a URL answers with a 2xx status
    Check { url: String },

    /// Create a one-off message and print its id
    Create { message: String },

    /// Print the content of a message by id
    View { id: String },

    /// Send a message into a room
    Send {
        #[arg(short, long)]
        room: String,

        /// Sender id; an anonymous one is generated when omitted
        #[arg(short, long)]
        user: Option<String>,

        message: String,
    },

    /// Print a room's message history
    Messages { room: String },

    /// Create, join or leave rooms
    Room {
        #[command(subcommand)]
        action: RoomAction,
    },

    /// List notifications, or show one by id
    Notifications { id: Option<String> },
}

#[derive(Debug, Subcommand)]
enum RoomAction {
    Create {
        #[arg(short, long)]
        user: Option<String>,

        /// public or private
        #[arg(short = 't', long = "type", default_value = "public")]
        room_type: RoomType,

        /// Required by the server for private rooms
        #[arg(short, long)]
        password: Option<String>,
    },
    Join {
        room: String,

        #[arg(short, long)]
        user: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },
    Leave {
        room: String,

        #[arg(short, long)]
        user: Option<String>,
    },
}

fn user_or_anonymous(user: Option<String>) -> String {
    user.unwrap_or_else(|| {
        let user = anonymous_user_id();
        info!(%user, "using anonymous id");
        user
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env();
    let api = ApiClient::from_config(&config);

    match cli.command {
        Commands::Check { url } => {
            let reachable = api.check_link(&url).await;
            println!("{reachable}");
            if !reachable {
                std::process::exit(1);
            }
        }

        Commands::Create { message } => println!("{}", api.create_message(&message).await?),

        Commands::View { id } => println!("{}", api.view_message(&id).await?),

        Commands::Send { room, user, message } => {
            let user = user_or_anonymous(user);
            println!("{}", api.send_message(&room, &user, &message).await?);
        }

        Commands::Messages { room } => {
            for msg in api.get_messages(&room).await? {
                println!("{}: {}", msg.sender, msg.message);
            }
        }

        Commands::Room { action } => match action {
            RoomAction::Create { user, room_type, password } => {
                let user = user_or_anonymous(user);
                let room_id = api.create_room(&user, room_type, password.as_deref()).await?;
                println!("{room_id}");
            }
            RoomAction::Join { room, user, password } => {
                let user = user_or_anonymous(user);
                println!("{}", api.join_room(&room, &user, password.as_deref()).await?);
            }
            RoomAction::Leave { room, user } => {
                let user = user_or_anonymous(user);
                println!("{}", api.leave_room(&room, &user).await?);
            }
        },

        Commands::Notifications { id } => {
            let store = PocketBase::new(config.store_url()?);
            let json = match id {
                Some(id) => serde_json::to_string_pretty(&get_notification(&store, &id).await?),
                None => serde_json::to_string_pretty(&fetch_all_notifications(&store).await?),
            }
            .context("encoding notifications")?;
            println!("{json}");
        }
    }

    Ok(())
}
