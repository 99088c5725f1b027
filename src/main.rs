use colored::Colorize;
use tulsigen::{
    arguments::OperationMode,
    cli,
    error::CliError,
    logging::init_logging,
};

fn main() -> anyhow::Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    let parsed = match cli::parse(&raw) {
        Ok(parsed) => parsed,
        Err(CliError::HelpRequested) => {
            println!("{}", cli::usage());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    init_logging(parsed.arguments.verbose);

    if !parsed.commandline_sentinel_found {
        // No leading "--": a plain application launch. The GUI shell takes
        // over from here with default options.
        log::info!("No command-line sentinel found, launching with default options");
        return Ok(());
    }

    log::info!("{} version {}", env!("CARGO_PKG_NAME"), tulsigen::version());

    for option in &parsed.unknown_options {
        println!("{} ignoring unknown option \"{option}\"", "Warning:".yellow());
    }

    log::debug!("Parsed arguments: {:?}", parsed.arguments);

    let arguments = &parsed.arguments;
    match arguments.operation_mode() {
        OperationMode::ProjectCreator => {
            // ProjectCreator implies tulsiproj_name is set.
            if let Some(name) = &arguments.tulsiproj_name {
                log::info!("Creating project bundle {}", name.display());
            }
        }
        OperationMode::ProjectGenerator => {
            if let Some(config) = &arguments.generator_config {
                log::info!("Generating Xcode project from config {config}");
            }
        }
        OperationMode::Invalid => {
            anyhow::bail!(
                "exactly one of --genconfig or --create-tulsiproj must be given; \
                 run with -- --help for usage"
            );
        }
    }

    Ok(())
}
