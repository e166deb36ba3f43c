//! Hypnos - AFK bot for Telegram groups.
//!
//! `/afk [reason]` marks you away; anyone who mentions you gets a
//! notice, and your next message clears the status.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `afk` - AFK registry and notice logic (transport-independent)
//! - `users` - In-memory user index for @username resolution
//! - `bot` - Core bot functionality (with Throttle for API rate limiting)
//! - `plugins` - Command handlers (extensible)
//! - `events` - Event handlers (extensible)
//! - `utils` - Utility functions

mod afk;
mod bot;
mod config;
mod events;
mod plugins;
mod users;
mod utils;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hypnos=info,teloxide=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Hypnos bot...");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);

    // Initialize bot with Throttle for automatic rate limiting
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    // Get bot info
    let me = bot.get_me().await?;

    // Get bot username from config or fallback to get_me()
    let bot_username = config
        .bot_username
        .clone()
        .unwrap_or_else(|| me.username().to_string());
    info!("Bot username: @{}", bot_username);

    // Build dispatcher
    let dispatcher = bot::build_dispatcher(bot.clone());

    // Run the bot
    bot::run(&config, dispatcher, bot).await;

    Ok(())
}
