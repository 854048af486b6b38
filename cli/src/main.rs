use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::process::ExitCode;
use tally_cli::render::RenderOptions;
use tally_cli::{CliContext, commands, logging};
use tally_core::context::{AppConfig, AppConfigExt};

#[derive(Parser)]
#[command(version, about = "Live damage meter for World of Warcraft combat logs")]
struct Cli {
    /// Show a per-ability breakdown under each player
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Plain bars without terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow the newest combat log and redraw the meter as it grows
    Watch(WatchArgs),
    /// Parse one log file and print a single report
    Parse {
        #[arg(short, long)]
        path: String,
    },
    /// Print the effective configuration
    Config,
    /// List combat logs in the configured directory
    ListFiles,
    /// Persist a new log directory
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
}

/// Overrides for a single run; nothing here is saved.
#[derive(Args, Default)]
struct WatchArgs {
    /// Log directory to watch instead of the configured one
    #[arg(short, long)]
    dir: Option<String>,
    #[arg(long)]
    refresh_ms: Option<u64>,
    #[arg(long)]
    idle_ms: Option<u64>,
}

impl WatchArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(dir) = self.dir {
            config.log_directory = dir;
        }
        if let Some(ms) = self.refresh_ms {
            config.refresh_interval_ms = ms;
        }
        if let Some(ms) = self.idle_ms {
            config.idle_interval_ms = ms;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = logging::init();
    let cli = Cli::parse();

    let opts = RenderOptions {
        verbose: cli.verbose,
        color: !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal(),
    };

    let result = match cli.command {
        None => run_watch(WatchArgs::default(), opts).await,
        Some(Commands::Watch(args)) => run_watch(args, opts).await,
        Some(Commands::Parse { path }) => commands::parse(&path, &CliContext::new(), opts).await,
        Some(Commands::Config) => commands::show_settings(&CliContext::new()).await,
        Some(Commands::ListFiles) => commands::list_files(&CliContext::new()).await,
        Some(Commands::SetDirectory { path }) => {
            commands::set_directory(&path, &CliContext::new()).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_watch(args: WatchArgs, opts: RenderOptions) -> Result<(), String> {
    let mut config = AppConfig::load();
    args.apply(&mut config);
    commands::watch(&CliContext::with_config(config), opts).await
}
