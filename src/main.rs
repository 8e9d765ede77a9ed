use clap::Parser;
use festive_mailer::core::config::{self, CliOverrides};
use festive_mailer::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "festive", about = "Festival greetings written and sent by an AI agent")]
struct Args {
    /// Agent inference endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Agent id to address
    #[arg(long)]
    agent_id: Option<String>,

    /// User id sent with every request
    #[arg(long)]
    user_id: Option<String>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<String>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        Self {
            endpoint: args.endpoint,
            user_id: args.user_id,
            agent_id: args.agent_id,
            log_file: args.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let resolved = match config::load_config().and_then(|file| config::resolve(&file, &args.into())) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("festive: {e}");
            std::process::exit(2);
        }
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("FestiveMailer starting up (endpoint: {})", resolved.agent.endpoint);

    tui::run(resolved)
}
