use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use stylematch::{
    demo, ApiState, EngineConfig, Lexicon, Recommender, RestApi, SocialStore, Vectorizer,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Style-vector recommendations for a clothing marketplace
#[derive(Parser, Debug)]
#[command(name = "stylematch")]
#[command(about = "Style-based people and listing suggestions", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the demo community on startup
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting StyleMatch v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    let config = match &args.config {
        Some(path) => {
            info!("Engine config: {:?}", path);
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };

    let lexicon = Arc::new(Lexicon::standard());
    info!("Lexicon loaded: {} terms", lexicon.len());

    let vectorizer = Arc::new(Vectorizer::new(lexicon));
    let store = Arc::new(SocialStore::new(vectorizer.clone()));
    let recommender = Arc::new(Recommender::new(vectorizer, config));

    if args.demo {
        demo::seed(&store)?;
    }

    let state = ApiState::new(store, recommender);
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("StyleMatch started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
