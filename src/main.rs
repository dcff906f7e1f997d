use stackboard::actions::{run_action, ControlState, StackAction};
use stackboard::api::{set_silent, EndpointClient};
use stackboard::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use stackboard::models::{Affordance, AppState, RenderedList};
use stackboard::reconciler::Reconciler;
use stackboard::routes::build_router;
use stackboard::scheduler::{PageRefresh, TimerRefresh};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use std::net::SocketAddr;
use std::process;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let endpoint_url = config::get_endpoint_url();
    match EndpointClient::build(endpoint_url, config::get_request_timeout()) {
        Ok(client) => AppState::new(client),
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let endpoint = state.endpoint_url.clone();
    let app = build_router(state);
    tracing::info!(%addr, %endpoint, "Starting stackboard server");
    println!(
        "{} {} {} {}",
        yansi::Paint::new("Dashboard running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan(),
        yansi::Paint::new("polling").green(),
        yansi::Paint::new(endpoint).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn print_items(rendered: &RenderedList) {
    if rendered.is_empty() {
        println!("(no applications)");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Application", "Description", "Status", "Action", "URL"]);
    for item in &rendered.items {
        let action = match &item.affordance {
            Affordance::Create { application } => format!("create {}", application),
            Affordance::Delete { stack } => format!("delete {}", stack),
            Affordance::Pending { .. } => "(in progress)".to_string(),
        };
        table.add_row(vec![
            item.name.clone(),
            item.description.clone(),
            item.status_display.clone(),
            action,
            item.link.clone().unwrap_or_default(),
        ]);
    }
    println!("\n{table}");
}

#[derive(Parser)]
#[command(
    name = "stackboard",
    author,
    version,
    about = "Provisioning dashboard for stack-backed applications",
    long_about = r#"Stackboard shows which applications have a provisioned stack and lets you create or delete stacks through a single action endpoint.

The endpoint is configured with API_BASE_URL and API_PATH (environment or .env file).

Examples:
  1) Run the web dashboard:
      stackboard serve --host 127.0.0.1 --port 8080
  2) Print the current status once:
      stackboard status
  3) Follow stacks until they settle:
      stackboard watch
"#,
    after_help = "Use `stackboard <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and endpoint connectivity
    #[command(long_about = "Check that the endpoint URL is configured and answer a status request.")]
    CheckConfig,
    /// Poll once and print every application
    Status,
    /// Poll until no stack is transitioning
    #[command(long_about = "Poll the endpoint, print the list and, while any stack is still changing, wait 60 seconds and poll again. Stops once every stack has settled.")]
    Watch,
    /// Create a stack for an application
    Create {
        /// Application name
        application: String,
    },
    /// Delete a stack
    Delete {
        /// Stack name (as shown in the Action column)
        stack: String,
    },
}

async fn poll_and_print(state: &AppState) -> Option<RenderedList> {
    let refresh = PageRefresh::new();
    let reconciler = Reconciler::new(&state.client);
    match reconciler.poll(&refresh).await {
        Ok(rendered) => {
            print_items(&rendered);
            Some(rendered)
        }
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Status request failed").red(), e.message());
            None
        }
    }
}

async fn watch(state: &AppState) {
    let timer = TimerRefresh::new();
    let reconciler = Reconciler::new(&state.client);
    loop {
        match reconciler.poll(&timer).await {
            Ok(rendered) => {
                print_items(&rendered);
                if !rendered.transitioning {
                    println!("{}", yansi::Paint::new("No stack is transitioning; stopping.").green());
                    return;
                }
                println!(
                    "{}",
                    yansi::Paint::new(format!("Stacks still changing; refreshing in {}s", stackboard::reconciler::TRANSITION_REFRESH.as_secs())).dim()
                );
                timer.fired().await;
            }
            Err(e) => {
                eprintln!("{}: {}", yansi::Paint::new("Status request failed").red(), e.message());
                process::exit(1);
            }
        }
    }
}

async fn stack_action(state: &AppState, action: StackAction) {
    let timer = TimerRefresh::new();
    let mut control = ControlState::default();
    match run_action(&state.client, &timer, &action, &mut control).await {
        Ok(resp) => {
            let message = resp.get("message").and_then(|m| m.as_str()).unwrap_or("accepted");
            println!(
                "{} {} {}: {}",
                yansi::Paint::new(action.verb()).green().bold(),
                yansi::Paint::new(action.target()).cyan(),
                yansi::Paint::new("requested").green(),
                message
            );
            timer.fired().await;
            if let Some(rendered) = poll_and_print(state).await {
                if rendered.transitioning {
                    println!("{}", yansi::Paint::new("Run `stackboard watch` to follow progress.").dim());
                }
            }
        }
        Err(e) => {
            eprintln!(
                "{} {}: {}",
                yansi::Paint::new(format!("Failed to {}", action.verb())).red(),
                action.target(),
                e.message()
            );
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        set_silent(true);
    }

    let state = build_state_from_env(cli.env_file.as_deref());

    // With no subcommand, serve the dashboard
    let Some(command) = cli.command else {
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig => {
            println!("{} {}", yansi::Paint::new("Endpoint:").bold(), state.endpoint_url);
            match poll_and_print(&state).await {
                Some(rendered) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!("Configuration looks valid ({} applications returned)", rendered.len())).green()
                    );
                }
                None => {
                    eprintln!("{}", yansi::Paint::new("Configuration appears invalid").red());
                    process::exit(1);
                }
            }
        }
        Commands::Status => {
            if poll_and_print(&state).await.is_none() {
                process::exit(1);
            }
        }
        Commands::Watch => watch(&state).await,
        Commands::Create { application } => stack_action(&state, StackAction::Create { application }).await,
        Commands::Delete { stack } => stack_action(&state, StackAction::Delete { stack }).await,
    }
}
