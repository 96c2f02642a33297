mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "storedesk",
    version,
    about = "Inspect how a Storedesk admin dashboard is assembled",
    long_about = "Loads the dashboard config and every extension manifest, assembles the core and \
                  settings route trees, and reports what the admin shell would render."
)]
pub struct Cli {
    /// Dashboard config file (JSON). Defaults apply when omitted.
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of extension manifests, overriding `extensions_dir` from the config
    #[arg(short, long, global = true, value_name = "DIR")]
    pub extensions: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every registered page
    Routes {
        /// Show the settings tree instead of the core tree
        #[arg(long)]
        settings: bool,

        /// Print the nested router configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which page a concrete path resolves to
    Resolve {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// List the widgets mounted in each injection zone
    Widgets,
    /// Print the JSON schema of the config file
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = storedesk_runtime::load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.extensions {
        config.extensions_dir = Some(dir);
    }
    let _guard = storedesk_runtime::init_logging("cli", &config.logging);

    match cli.command {
        Commands::Routes { settings, json } => inspect::routes(&config, settings, json),
        Commands::Resolve { path } => inspect::resolve(&config, &path),
        Commands::Widgets => inspect::widgets(&config),
        Commands::Schema => {
            let schema = storedesk_core::DashboardConfig::schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}
