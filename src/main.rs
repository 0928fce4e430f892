use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use retrobus::frontend::{run_null, CliFrontend};
use retrobus::{default_specs, init_logging, Config, Frontend, SettingStore, UiBus};

#[derive(Parser, Debug)]
#[command(name = "retrobus", version, about = "Emulator state bus with a command line front-end")]
struct Args {
    /// Configuration file (.toml or .json); defaults to the platform config directory
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Front-end to run, overriding the configuration
    #[arg(long, value_parser = parse_frontend)]
    frontend: Option<Frontend>,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
    /// Write the final settings back to the configuration file on exit
    #[arg(long)]
    save: bool,
}

fn parse_frontend(s: &str) -> Result<Frontend, String> {
    match s {
        "cli" => Ok(Frontend::Cli),
        "null" => Ok(Frontend::Null),
        other => Err(format!("unknown front-end '{}' (expected cli or null)", other)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    })?;
    tracing::info!("retrobus {} (built {})", retrobus::VERSION, retrobus::BUILD_DATE);

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(frontend) = args.frontend {
        config.ui.frontend = frontend;
    }

    let bus = Rc::new(UiBus::new());
    let store = SettingStore::attach(&bus, default_specs());

    match config.ui.frontend {
        Frontend::Cli => {
            let cli = CliFrontend::attach(bus.clone(), config.ui.echo_changes);
            store.apply_config(&bus, &config)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();
            cli.run(stdin.lock(), &mut stdout, &store)?;
            cli.detach();
        }
        Frontend::Null => run_null(&bus, &store, &config)?,
    }

    if args.save {
        let path = match args.config {
            Some(path) => path,
            None => Config::default_path()?,
        };
        store.snapshot_into(&mut config);
        config.save_to_file(&path)?;
        tracing::info!("Saved settings to {}", path.display());
    }

    store.detach(&bus);
    bus.shutdown();
    Ok(())
}
