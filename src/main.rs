use clap::Parser;
use sci_calc::utils::logger;
use sci_calc::{
    evaluate, CalcError, Calculation, CliConfig, Command, InteractiveShell, Number, OutputFormat,
    Settings,
};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // The subscriber is not installed yet, so config problems go straight to stderr.
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    logger::init_logger(&settings.logging)?;
    tracing::info!("Starting sci-calc");
    tracing::debug!("Resolved settings: {:?}", settings);

    match &cli.command {
        Some(command) => run_once(command, &settings),
        None => run_interactive(&settings),
    }
}

fn run_interactive(settings: &Settings) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = InteractiveShell::new(stdin.lock(), stdout.lock(), settings.clone());

    match shell.run() {
        Ok(summary) => {
            tracing::info!(
                "Session finished: {} calculations, {} errors",
                summary.calculations,
                summary.errors
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Session aborted: {}", e);
            exit_with(&e)
        }
    }
}

fn run_once(command: &Command, settings: &Settings) -> anyhow::Result<()> {
    let inputs: Vec<Number> = match *command {
        Command::Sqrt { x } | Command::Ln { x } => vec![x.into()],
        Command::Factorial { n } => vec![n.into()],
        Command::Pow { base, exponent } => vec![base.into(), exponent.into()],
    };

    match evaluate(command.operation(), &inputs) {
        Ok(calculation) => {
            println!("{}", format_output(&calculation, settings)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ {} failed: {} (Severity: {:?})",
                command.operation(),
                e,
                e.severity()
            );
            exit_with(&e)
        }
    }
}

fn format_output(calculation: &Calculation, settings: &Settings) -> Result<String, CalcError> {
    match settings.format {
        OutputFormat::Text => Ok(calculation.render(settings.precision)),
        OutputFormat::Json => Ok(serde_json::to_string(calculation)?),
    }
}

fn exit_with(e: &CalcError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
