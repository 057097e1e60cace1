use clap::Parser;

use craftlogic::cli::{handle_config_action, Args, Command};
use craftlogic::config::{default_path, Config};
use craftlogic::logging;
use craftlogic::wizard::Wizard;

/// Exit status after Ctrl+C, as a shell would report SIGINT.
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let settings = config.resolve(args.style.map(Into::into), args.unit.map(Into::into));
    log::debug!("settings: {:?}", settings);

    if let Some(Command::Config { action }) = args.command {
        let path = args.config.clone().unwrap_or_else(default_path);
        if let Err(message) = handle_config_action(action, &settings, &path) {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        return;
    }

    // A blocking read can't observe a flag, so exit straight from the handler.
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nReceived Ctrl+C. Goodbye!");
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        log::warn!("could not set up Ctrl+C handler: {}", e);
    }

    let stdin = std::io::stdin();
    let mut wizard = Wizard::new(stdin.lock(), std::io::stdout(), settings);
    if let Err(e) = wizard.run() {
        log::error!("session aborted: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
