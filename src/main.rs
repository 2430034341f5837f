use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use taskdeck::{cli, config, types::IdAssignment, utils, warning};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the to-do REST API
    Serve(ServeOptions),

    /// Run the Spotify top artists demo
    Spotify(SpotifyOptions),

    /// Show the GitHub profile of the GITHUB_TOKEN owner
    Github,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to listen on, e.g. 127.0.0.1:8080 or :8080 [env: SERVER_ADDRESS]
    #[clap(long)]
    pub addr: Option<String>,

    /// JSON file holding the tasks [env: TASKS_DATA_FILE]
    #[clap(long)]
    pub data_file: Option<PathBuf>,

    /// How new task ids are assigned: length or max [env: TASKS_ID_ASSIGNMENT]
    #[clap(long, value_parser = utils::parse_id_assignment)]
    pub ids: Option<IdAssignment>,
}

#[derive(Parser, Debug, Clone)]
pub struct SpotifyOptions {
    /// Address to listen on [env: SERVER_ADDRESS]
    #[clap(long)]
    pub addr: Option<String>,

    /// Do not open the landing page in the browser
    #[clap(long)]
    pub no_browser: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => cli::serve(opt.addr, opt.data_file, opt.ids).await,
        Command::Spotify(opt) => cli::spotify(opt.addr, !opt.no_browser).await,
        Command::Github => cli::github().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
