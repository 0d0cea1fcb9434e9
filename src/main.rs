use atk_inventory::cli::{run_command, Cli, Command};
use atk_inventory::{
    AppConfig, AutoConfirm, ConfirmationProvider, InventoryController, StdinConfirmation,
};
use clap::Parser;

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=debug, RUST_LOG=atk_inventory=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match AppConfig::new(&cli.api_url) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        None => {
            log::info!("Starting ATK inventory dashboard");
            atk_inventory::ui::launch_gui(config).map_err(|e| e.to_string())
        }
        Some(command) => run_headless(config, command),
    };

    if let Err(e) = result {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_headless(config: AppConfig, command: Command) -> Result<(), String> {
    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    let confirmer: Box<dyn ConfirmationProvider> = match command {
        Command::Delete { yes: true, .. } => Box::new(AutoConfirm(true)),
        _ => Box::new(StdinConfirmation),
    };

    let mut controller = InventoryController::new(config.api(), config.api_base_url());
    let output = runtime
        .block_on(run_command(&mut controller, command, confirmer.as_ref()))
        .map_err(|e| e.to_string())?;
    print!("{output}");
    Ok(())
}
