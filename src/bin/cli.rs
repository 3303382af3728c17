//! Photobook CLI
//!
//! Drives the client fragment natively against a running server:
//! - Simulate a click on a table cell or icon
//! - Run the menu bootstrap and print the rendered menus
//! - Generate a default config file

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use photobook::config::{generate_default_config, Binding, Config};
use photobook::diagnostics::{init_tracing, StderrSink};
use photobook::dispatch::{ClickTarget, EventRouter};
use photobook::render::VirtualDom;
use photobook::transport::http::{HttpTransport, DEFAULT_TIMEOUT_MS};

#[derive(Parser)]
#[command(name = "photobook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Send Photobook client requests from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server base URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub server_url: String,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS, global = true)]
    pub timeout_ms: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BindingArg {
    PageState,
    Icon,
}

impl From<BindingArg> for Binding {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::PageState => Binding::PageState,
            BindingArg::Icon => Binding::Icon,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a click
    Click {
        /// Tag name of the clicked element (e.g. TD, I)
        #[arg(long, default_value = "TD")]
        tag: String,
        /// Text content of the clicked element (icon name for <i>)
        #[arg(long, default_value = "")]
        text: String,
        /// Identifier of the enclosing table row
        #[arg(long)]
        row: Option<String>,
        /// Payload variant (default: from config)
        #[arg(long, value_enum)]
        binding: Option<BindingArg>,
        /// Send the row identifier with the request
        #[arg(long)]
        include_row_id: bool,
    },

    /// Load the menus and print them as HTML
    Bootstrap,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Click {
            tag,
            text,
            row,
            binding,
            include_row_id,
        } => {
            if let Some(binding) = binding {
                config.client.binding = binding.into();
            }
            config.client.include_row_id |= include_row_id;

            let mut target = ClickTarget::new(tag).with_text(text);
            target.row_id = row;

            let router = build_router(&cli.server_url, cli.timeout_ms, config)?;
            router.handle_click(&target).await;
        }

        Commands::Bootstrap => {
            let router = build_router(&cli.server_url, cli.timeout_ms, config)?;
            router.bootstrap_menus().await;

            let dom = router.renderer().dom();
            let layout = router.renderer().layout();
            for mount in [&layout.left_mount_id, &layout.right_mount_id] {
                println!("<!-- #{} -->", mount);
                let html = dom.inner_html(mount);
                if !html.is_empty() {
                    println!("{}", html);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn build_router(
    server_url: &str,
    timeout_ms: u64,
    config: Config,
) -> anyhow::Result<EventRouter<HttpTransport, VirtualDom, StderrSink>> {
    let transport = HttpTransport::new(server_url, Duration::from_millis(timeout_ms))?;
    let client = config.client;
    let dom = VirtualDom::with_mounts([&client.left_mount_id, &client.right_mount_id]);
    Ok(EventRouter::new(client, transport, dom, StderrSink))
}
