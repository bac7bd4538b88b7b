use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use waypoint::config::Config;
use waypoint::destination::{DestinationResolver, RankedResultList, SearchSession};

/// Waypoint — destination autocomplete
///
/// Resolves a few typed characters into at most six countries, states or
/// cities. Curated data answers first; a filtered geocoder fills the gaps.
///
/// Examples:
///   waypoint Chi
///   waypoint --offline "New"
///   waypoint --interactive
///   waypoint --serve --port 3030
#[derive(Parser)]
#[command(name = "waypoint", version, about, long_about = None)]
struct Cli {
    /// Query text. Example: waypoint Chi
    #[arg(index = 1)]
    query: Option<String>,

    /// Config file (JSON). Defaults to $WAYPOINT_CONFIG or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Offline mode: curated gazetteer only.
    #[arg(long)]
    offline: bool,

    /// External lookup timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Read one query per stdin line, as if typed into a search box.
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Print the curated gazetteer and exit.
    #[arg(long)]
    list: bool,

    /// Run the HTTP API instead of a one-shot query.
    #[arg(long)]
    serve: bool,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 3030)]
    port: u16,

    /// Debug logging for waypoint (RUST_LOG overrides).
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    waypoint::logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if cli.offline {
        config.offline = true;
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout_ms = ms;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let resolver = config.build_resolver().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let timeout = config.timeout();

    if cli.list {
        print_json(resolver.gazetteer().all_entries());
        return;
    }

    if cli.serve {
        if let Err(e) = waypoint::server::start(&cli.host, cli.port, resolver, timeout).await {
            eprintln!("Error: server on {}:{} failed: {}", cli.host, cli.port, e);
            std::process::exit(1);
        }
        return;
    }

    if cli.interactive {
        run_interactive(resolver, timeout).await;
        return;
    }

    let Some(query) = cli.query else {
        eprintln!("Error: No query specified.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  waypoint Chi");
        eprintln!("  waypoint --interactive");
        eprintln!("  waypoint --serve");
        std::process::exit(1);
    };

    let results = resolver.resolve(&query, timeout).await;
    print_human(&query, &results);
    print_json(&results);
}

async fn run_interactive(resolver: DestinationResolver, timeout: Duration) {
    let session = SearchSession::new(Arc::new(resolver));
    let mut updates = session.subscribe();

    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let s = updates.borrow_and_update().clone();
            print_human(&s.query, &s.results);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last = None;
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => last = Some(session.submit(&line, timeout)),
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: cannot read stdin: {}", e);
                break;
            }
        }
    }

    if let Some(handle) = last {
        let _ = handle.await;
    }
    drop(session);
    let _ = printer.await;
}

fn print_human(query: &str, results: &RankedResultList) {
    if results.is_empty() {
        eprintln!("  No suggestions for '{}'", query);
        return;
    }
    eprintln!("  Suggestions for '{}':", query);
    for (i, c) in results.iter().enumerate() {
        eprintln!("    {}. \u{1F4CD} {} [{}]", i + 1, c.display_line(), c.source);
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: cannot serialize output: {}", e),
    }
}
