//! number-lookup - look up phone number metadata from the command line
//!
//! Single number, batch file or interactive prompt; see `--help`.

mod cli;

use clap::Parser;
use is_terminal::IsTerminal;
use number_lookup::{
    Config, Error, LookupClient, Painter, Session, Tone, banner::load_banner,
};
use std::io::stdout;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Mode};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let painter = Painter::new(!cli.no_color && stdout().is_terminal());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            println!("{}", painter.tone(&format!("[SYSTEM FAILURE] {}", e), Tone::Alert));
            return ExitCode::FAILURE;
        }
    };

    let code = runtime.block_on(async {
        let interactive = cli.mode() == Mode::Interactive;
        // The Ctrl+C handler is polled first so it is installed before any output
        tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C signal");
                let message = if interactive {
                    "[SESSION TERMINATED]"
                } else {
                    "[OPERATION ABORTED]"
                };
                println!("\n{}", painter.tone(message, Tone::Alert));
                ExitCode::SUCCESS
            }
            code = run(cli, painter) => code,
        }
    });

    // A pending stdin read must not hold up exit
    runtime.shutdown_background();
    code
}

async fn run(cli: Cli, painter: Painter) -> ExitCode {
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return fail(painter, &e),
    };

    println!("{}", load_banner(&config.banner_path));

    let client = match LookupClient::new(&config) {
        Ok(client) => client,
        Err(e) => return fail(painter, &e),
    };
    tracing::debug!(endpoint = %client.endpoint(), "lookup client ready");

    let mut session = Session::new(client, stdout(), painter, &config);
    let outcome = match cli.mode() {
        Mode::Batch(path) => session.run_batch(&path).await.map(|_| ()),
        Mode::Single(number) => session.run_single(&number).await.map(|_| ()),
        Mode::Interactive => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            session.run_interactive(input).await.map(|_| ())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(painter, &e),
    }
}

fn load_config(cli: &Cli) -> number_lookup::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn fail(painter: Painter, error: &Error) -> ExitCode {
    let message = if error.is_file_error() {
        format!("[FILE ERROR] {}", error)
    } else {
        format!("[SYSTEM FAILURE] {}", error)
    };
    println!("{}", painter.tone(&message, Tone::Alert));
    ExitCode::FAILURE
}
