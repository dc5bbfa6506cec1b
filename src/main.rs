use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use spotify_web::{config, model::TimeRange};
use tracing_subscriber::{EnvFilter, fmt};

#[macro_use]
mod cli;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Request an application token (client credentials)
    Token,

    /// Open the Spotify consent page for the configured scopes
    Authorize(AuthorizeOptions),

    /// Exchange an authorization code for access and refresh tokens
    Exchange(ExchangeOptions),

    /// Show the user's top artists or tracks
    Top(TopOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthorizeOptions {
    /// Force the consent dialog even if access was granted before
    #[clap(long)]
    pub show_dialog: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExchangeOptions {
    /// Authorization code returned to the redirect URI
    #[clap(long)]
    pub code: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    #[command(subcommand)]
    pub kind: TopKind,

    /// Authorization code granting `user-top-read`
    #[clap(long, global = true)]
    pub code: Option<String>,

    /// Number of items to return (1-50)
    #[clap(long, global = true)]
    pub limit: Option<u32>,

    /// Index of the first item
    #[clap(long, global = true)]
    pub offset: Option<u32>,

    /// short_term, medium_term or long_term
    #[clap(long, global = true, value_parser = parse_time_range)]
    pub time_range: Option<TimeRange>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TopKind {
    Artists,
    Tracks,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn parse_time_range(value: &str) -> Result<TimeRange, String> {
    value.parse().map_err(|e: spotify_web::Error| e.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // a second subscriber only fails in tests, nothing to report
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(e) = config::load_env() {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Token => cli::token().await,
        Command::Authorize(opt) => cli::authorize(opt.show_dialog).await,
        Command::Exchange(opt) => cli::exchange(&opt.code).await,
        Command::Top(opt) => {
            let Some(code) = opt.code else {
                error!("Missing --code, run `authorize` first to obtain one");
            };
            match opt.kind {
                TopKind::Artists => {
                    cli::top_artists(&code, opt.limit, opt.offset, opt.time_range).await
                }
                TopKind::Tracks => {
                    cli::top_tracks(&code, opt.limit, opt.offset, opt.time_range).await
                }
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
