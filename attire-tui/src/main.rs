// File: attire-tui/src/main.rs

use std::io::{Write, stdout};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use attire_common::models::Region;
use attire_core::AppConfig;
use attire_tui::commands::dispatch;
use attire_tui::{Route, TuiModule};

#[derive(Parser, Debug)]
#[command(name = "attire-tui", about = "Global Attire — traditional clothing, tried on from your terminal")]
struct Args {
    /// Start on the shop page, pre-filtered to this region.
    #[arg(long)]
    region: Option<String>,

    /// Simulated try-on processing delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(ms) = args.delay_ms {
        config.tryon_delay = Duration::from_millis(ms);
    }

    let module = Arc::new(TuiModule::new(config)?);

    println!("Global Attire");
    println!("Type 'help' for available commands.\n");

    if let Some(region) = &args.region {
        let region = Region::from_str(region)
            .map_err(|_| anyhow!("unknown region '{}'", region))?;
        module.navigate(Route::Shop { region: Some(region) });
    }

    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", module.prompt_string());
        stdout().flush()?;

        let line = match reader.next_line().await? {
            Some(line) => line.trim().to_string(),
            None => break, // EOF
        };

        if line.is_empty() {
            continue;
        }

        let (quit_requested, output) = dispatch(&line, &module);

        if let Some(msg) = output {
            println!("{}", msg);
        }

        if quit_requested {
            break;
        }
    }

    Ok(())
}
