use std::io;
use std::net::SocketAddr;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pwd_check::{AppError, config, console, web};

#[derive(Parser)]
#[command(name = "pwd-check")]
#[command(about = "Check password strength from the console or a web form")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check passwords interactively (default)
    Console,
    /// Serve the password form over HTTP
    Serve {
        /// Listen address (defaults to $PWD_CHECK_ADDR or 127.0.0.1:5000)
        #[arg(short, long)]
        addr: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Console);

    let default_filter = match command {
        Commands::Console => "warn",
        Commands::Serve { .. } => "info",
    };
    init_tracing(default_filter);

    let result = match command {
        Commands::Console => cmd_console(),
        Commands::Serve { addr } => cmd_serve(addr.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with console output.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_console() -> Result<(), AppError> {
    let stdin = io::stdin();
    console::run(stdin.lock(), io::stdout().lock())?;
    Ok(())
}

fn cmd_serve(addr: Option<&str>) -> Result<(), AppError> {
    let addr: SocketAddr = match addr {
        Some(value) => config::parse_addr(value)?,
        None => config::listen_addr()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(web::serve(addr))
}
