use clap::Parser;
use std::io;
use std::path::PathBuf;
use wellbeing_core::*;

#[derive(Parser)]
#[command(name = "wellbeing")]
#[command(version)]
#[command(about = "Personal wellbeing journal: mood log, self-care tips, guided breathing", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    wellbeing_core::logging::init(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog = TipCatalog::from_config(&config.tips);
    let delay = SleepDelay::new(config.breathing.unit());

    // Console handles are held for the whole session and released when it ends
    let stdin = io::stdin();
    let stdout = io::stdout();
    let history = Session::new(stdin.lock(), stdout.lock(), catalog)
        .with_delay(delay)
        .run()?;

    tracing::debug!("Discarding {} mood record(s) on exit", history.len());
    Ok(())
}
