//! `lookout`: operator CLI for the `LookOutline` lead service.
//!
//! Checks the SMTP relay directly through `lookout-core`, and talks to a
//! running `lookout-server` over HTTP for everything else.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use lookout_core::lead::ServiceType;
use lookout_core::mailer::{Mailer, SmtpConfig, SmtpMailer};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

// ── CLI structure ────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "lookout",
    version,
    about = "LookOutline CLI: verify SMTP, submit leads, and query the chat assistant",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         LOOKOUT_ADDR   Server address (default: http://127.0.0.1:5000)\n  \
         SMTP_*         Relay settings used by verify-smtp\n\n\
         {DIM}Examples:{RESET}\n  \
         lookout verify-smtp\n  \
         lookout submit --name Asha --phone 9876543210 --city 'HSR Layout'\n  \
         lookout chat 'how much for 4 cameras?'"
    ),
)]
struct Cli {
    /// `LookOutline` server address.
    #[arg(long, env = "LOOKOUT_ADDR", default_value = "http://127.0.0.1:5000")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the SMTP relay with the SMTP_* settings and report the result.
    VerifySmtp,
    /// Submit a lead to the server as the website form would.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
        /// Area or city.
        #[arg(long)]
        city: Option<String>,
        /// One of the form's service categories, e.g. "CCTV Installation".
        #[arg(long, value_parser = parse_service)]
        service: Option<ServiceType>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Ask the chat assistant a question.
    Chat {
        /// Question text.
        text: String,
    },
    /// Check that the server is up.
    Health,
}

fn parse_service(label: &str) -> Result<ServiceType, String> {
    ServiceType::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = ServiceType::ALL.iter().map(|s| s.label()).collect();
        format!("unknown service '{label}', expected one of: {}", known.join(", "))
    })
}

// ── HTTP client ──────────────────────────────────────────────────────

struct Client {
    http: reqwest::Client,
    addr: String,
}

impl Client {
    fn new(addr: String) -> Self {
        let http = reqwest::Client::new();
        let addr = addr.trim_end_matches('/').to_owned();
        Self { http, addr }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.addr)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.addr))?;
        handle_response(resp).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.addr))?;
        handle_response(resp).await
    }
}

async fn handle_response(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let body = resp.text().await.context("failed to read response body")?;
    if !status.is_success() {
        // API errors carry a human-readable `message`.
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or(body);
        bail!("server returned {status}: {message}");
    }
    serde_json::from_str(&body).context("failed to parse response JSON")
}

// ── Output helpers ───────────────────────────────────────────────────

fn header(title: &str) {
    println!("{BOLD}{CYAN}{title}{RESET}");
    println!("{DIM}─────────────────────────────────────────{RESET}");
}

fn kv_line(key: &str, value: &str) {
    println!("  {DIM}{key:<14}{RESET} {WHITE}{value}{RESET}");
}

fn success(msg: &str) {
    println!("{GREEN}{BOLD}✓{RESET} {msg}");
}

// ── Command dispatch ─────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let client = Client::new(cli.addr);

    match run(&client, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("  {RED}{BOLD}✗ Error:{RESET} {e:#}");
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::VerifySmtp => cmd_verify_smtp().await,
        Commands::Submit {
            name,
            phone,
            email,
            city,
            service,
            message,
        } => {
            let body = json!({
                "name": name,
                "phone": phone,
                "email": email,
                "city": city,
                "serviceType": service.map(ServiceType::label),
                "message": message,
            });
            cmd_submit(client, &body).await
        }
        Commands::Chat { text } => cmd_chat(client, &text).await,
        Commands::Health => cmd_health(client).await,
    }
}

async fn cmd_verify_smtp() -> Result<()> {
    let config = SmtpConfig::from_env().context("SMTP settings are incomplete")?;

    header("SMTP relay");
    kv_line("Host", &config.host);
    kv_line("Port", &config.port.to_string());
    kv_line("TLS", if config.implicit_tls() { "implicit" } else { "STARTTLS" });
    kv_line("User", config.username.as_deref().unwrap_or("(none)"));
    println!();

    let mailer = SmtpMailer::from_config(&config).context("failed to build SMTP transport")?;
    mailer.verify().await.context("SMTP login failed")?;

    success("SMTP connection and login OK");
    Ok(())
}

async fn cmd_submit(client: &Client, body: &Value) -> Result<()> {
    let resp = client.post("/api/leads", body).await?;
    let message = resp
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if resp.get("success").and_then(Value::as_bool) != Some(true) {
        bail!("lead rejected: {message}");
    }
    success(message);
    Ok(())
}

async fn cmd_chat(client: &Client, text: &str) -> Result<()> {
    let resp = client.post("/api/chat", &json!({ "message": text })).await?;
    let reply = resp.get("reply").and_then(Value::as_str).unwrap_or_default();
    let topic = resp.get("topic").and_then(Value::as_str).unwrap_or("?");

    println!("{reply}");
    println!("{DIM}({topic}){RESET}");
    Ok(())
}

async fn cmd_health(client: &Client) -> Result<()> {
    let resp = client.get("/api/health").await?;
    let status = resp.get("status").and_then(Value::as_str).unwrap_or("unknown");
    let version = resp.get("version").and_then(Value::as_str).unwrap_or("?");

    header("LookOutline server");
    kv_line("Address", &client.addr);
    kv_line("Status", status);
    kv_line("Version", version);
    Ok(())
}
