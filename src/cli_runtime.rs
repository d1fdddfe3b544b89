use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ripple_console::config::{ConfigFile, Overrides, Settings};
use ripple_console::present::{Clock, IssuerDirectory, Presenter};
use ripple_console::remote::{Gateway, RemoteClient};
use ripple_console::session::{LineSource, PipedInput, Session, TerminalInput};

#[derive(Parser)]
#[command(name = "ripple-console")]
#[command(about = "Interactive console for a single Ripple account", long_about = None)]
pub(crate) struct Cli {
    /// Account address to operate on
    #[arg(long, env = "RIPPLE_ACCOUNT")]
    account: Option<String>,

    /// Account secret used to sign submissions
    #[arg(long, env = "RIPPLE_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Base URL of the REST API (default http://localhost:5990)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Base URL of the name service (default https://id.ripple.com)
    #[arg(long, value_name = "URL")]
    names_url: Option<String>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Delay before follow-up queries after a submission (default 3000)
    #[arg(long, value_name = "MS")]
    retry_delay_ms: Option<u64>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // The local offset can only be read while the process is single-threaded.
    let clock = Clock::local();

    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let settings = Settings::resolve(
        Overrides {
            account: cli.account,
            secret: cli.secret,
            api_url: cli.api_url,
            names_url: cli.names_url,
            retry_delay_ms: cli.retry_delay_ms,
        },
        file,
    );
    let identity = settings.identity()?;
    tracing::info!(
        account = identity.account(),
        api_url = %settings.api_url,
        names_url = %settings.names_url,
        "starting console"
    );

    let gateway = RemoteClient::new(&settings.api_url, &settings.names_url)?;
    let presenter = Presenter::new(IssuerDirectory::with_extra(settings.issuers), clock);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if interactive {
        let input = TerminalInput::new()?;
        let session = Session::new(identity, gateway, input, presenter)
            .with_retry_delay(settings.retry_delay);
        drive(&runtime, session)
    } else {
        let input = PipedInput::new(std::io::stdin().lock());
        let session = Session::new(identity, gateway, input, presenter)
            .with_retry_delay(settings.retry_delay);
        drive(&runtime, session)
    }
}

fn drive<G: Gateway, L: LineSource>(
    runtime: &tokio::runtime::Runtime,
    mut session: Session<G, L>,
) -> Result<()> {
    runtime.block_on(session.run())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
