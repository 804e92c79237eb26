use std::{process::ExitCode, time::Duration};

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;

use ytapi::{
    ApiClient, ApiClientOptions, DEFAULT_API_URL, RequestKind, VideoApi, extract_with_pattern, format,
    logger,
};

#[derive(Parser)]
#[command(version, about = "YouTube API client", long_about = None)]
struct Args {
    #[arg(long, help = "YouTube video URL")]
    url: String,

    #[arg(long, env = "YTAPI_BASE_URL", default_value = DEFAULT_API_URL, help = "API base URL")]
    api: String,

    #[arg(long = "type", value_enum, default_value_t = RequestKind::Data, help = "Type of data to retrieve")]
    kind: RequestKind,

    #[arg(long, num_args = 0.., help = "Language codes for captions")]
    languages: Vec<String>,

    #[arg(long, env = "YTAPI_TIMEOUT", help = "Request timeout in seconds")]
    timeout: Option<u64>,

    #[arg(long, short = 'v', help = "Log every request")]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::init(args.verbose) {
        eprintln!("{} {e}", "Error:".red().bold());
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let matched = extract_with_pattern(&args.url);

    if let Some(endpoint) = args.kind.endpoint() {
        match &matched {
            Some((pattern, id)) => {
                log::debug!("fetching {} for video id {} ({} link)", endpoint, id, pattern.as_str())
            }
            None => log::warn!("{} is not a recognized YouTube link, sending it anyway", args.url),
        }
    }

    match args.kind {
        RequestKind::Id => {
            let (_, id) = matched.ok_or_else(|| anyhow!("no video id in {}", args.url))?;
            println!("{id}");
        }
        RequestKind::Data => {
            let data = connect(args)?.video_data(&args.url).await?;
            println!("{}", format::pretty_json(&data)?);
        }
        RequestKind::Captions => {
            let captions = connect(args)?
                .video_captions(&args.url, &args.languages)
                .await?;
            println!("{captions}");
        }
        RequestKind::Timestamps => {
            let entries = connect(args)?
                .video_timestamps(&args.url, &args.languages)
                .await?;
            for line in format::timestamp_lines(&entries) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn connect(args: &Args) -> Result<ApiClient> {
    Ok(ApiClient::new(ApiClientOptions {
        base_url: args.api.clone(),
        timeout: args.timeout.map(Duration::from_secs),
        ..Default::default()
    })?)
}
