use clap::Parser;
use robots_inspector::console::{CheckProgressPrinter, ReportPrinter};
use robots_inspector::inspector::{
    InspectionReport, InspectorConfig, PathVerdict, ResourceChecker, ResourceDiscoverer,
    RobotsTxtSource,
};
use robots_inspector::robots;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Site URL whose robots.txt should be inspected
    #[arg(long, value_name = "URL")]
    url: String,

    /// User-agent token to evaluate the rules for
    #[arg(long, default_value = "*")]
    agent: String,

    /// Resource URLs to fetch and check against the rules
    #[arg(long, value_name = "URL")]
    resource: Vec<String>,

    /// Raw paths to evaluate without any HTTP request
    #[arg(long, value_name = "PATH")]
    path: Vec<String>,

    /// Discover resources from the target page and check them too
    #[arg(long, default_value_t = false)]
    discover: bool,

    /// Analyze a local robots.txt file instead of fetching it
    #[arg(long, value_name = "FILE")]
    robots_file: Option<PathBuf>,

    /// Print the full report as JSON instead of the console view
    #[arg(long, default_value_t = false)]
    json: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    let site_url = Url::parse(&args.url)?;
    let config = InspectorConfig::new(
        args.agent.clone(),
        Duration::from_secs(args.timeout_secs),
        args.discover,
    );

    // Set up a shutdown signal handler
    let shutdown_notify = Arc::new(tokio::sync::Notify::new());
    {
        let shutdown_notify = Arc::clone(&shutdown_notify);
        ctrlc::set_handler(move || {
            eprintln!("Received Ctrl+C, shutting down...");
            shutdown_notify.notify_waiters();
        })?;
    }

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.agent().to_string())
        .build()?;

    let source = match &args.robots_file {
        Some(path) => RobotsTxtSource::from_file(path)?,
        None => RobotsTxtSource::load_from_url(&client, &site_url).await?,
    };
    let parse_result = source.parse();

    let mut path_verdicts: Vec<PathVerdict> = Vec::new();
    for path in &args.path {
        let verdict = robots::evaluate(&parse_result, config.agent(), path)?;
        path_verdicts.push(PathVerdict {
            path: path.clone(),
            verdict,
        });
    }

    let mut resources: Vec<Url> = Vec::new();
    for resource in &args.resource {
        resources.push(Url::parse(resource)?);
    }
    if config.discover_resources() {
        let discoverer = ResourceDiscoverer::new(client.clone());
        match discoverer.discover(&site_url).await {
            Ok(discovered) => {
                for resource_url in discovered {
                    if !resources.contains(&resource_url) {
                        resources.push(resource_url);
                    }
                }
            }
            Err(e) => log::warn!("resource discovery failed: {e}"),
        }
    }

    let resource_reports = if resources.is_empty() {
        Vec::new()
    } else {
        let progress_printer = if args.json {
            CheckProgressPrinter::quiet()
        } else {
            CheckProgressPrinter::new()
        };
        let checker = ResourceChecker::new(client.clone(), config.clone());
        checker
            .check_all(
                &parse_result,
                &resources,
                progress_printer,
                Arc::clone(&shutdown_notify),
            )
            .await?
    };

    let report = InspectionReport::new(
        site_url,
        config.agent().to_string(),
        source.content().to_string(),
        parse_result,
        path_verdicts,
        resource_reports,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ReportPrinter::new().print(&report);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = CommandLineArgs::parse();

    if let Err(e) = main_impl(&args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
