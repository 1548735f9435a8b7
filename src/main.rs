use clap::Parser;
use divstrip::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use divstrip::adapter::inbound::cli::output::{self, OutputConfig};
use divstrip::adapter::inbound::cli::{config, scan, upcoming};
use divstrip::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => owo_colors::unset_override(),
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = run(cli.command).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Scan(args) => {
            // JSON mode prints the scan document and nothing else.
            if !output::is_json() {
                output::header(env!("CARGO_PKG_VERSION"));
            }
            scan::execute(&args).await
        }
        Commands::Upcoming(args) => upcoming::execute_upcoming(&args).await,
        Commands::Tickers(args) => upcoming::execute_tickers(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}
