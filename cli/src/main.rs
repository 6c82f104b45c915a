mod render;

use clap::{Parser, Subcommand};
use reqwest::{Method, Url};
use roster::{Catalog, ErrorBody, MessageBody};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {detail}")]
    ServerError { status: u16, detail: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "signup-cli", about = "Mergington High School activity sign-up client")]
struct Cli {
    #[arg(long, env = "SIGNUP_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Show every activity with its schedule, spots left and participants.
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the numbered activity selection.
    Options,
    /// Sign a student up for an activity (name or number from `options`).
    Signup { activity: String, email: String },
    /// Remove a student from an activity (name or number from `options`).
    Remove { activity: String, email: String },
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: Url,
    client: reqwest::Client,
}

impl CliContext {
    fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if base_url.cannot_be_a_base() {
            return Err(CliError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url, client: reqwest::Client::new() })
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, CliError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CliError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = CliContext::new(&cli.base_url)?;

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::List { json } => run_list(&ctx, json).await,
        Command::Options => {
            let catalog = fetch_activities(&ctx).await?;
            print!("{}", render::render_options(&catalog));
            Ok(())
        }
        Command::Signup { activity, email } => {
            run_mutation(&ctx, Method::POST, "signup", &activity, &email).await
        }
        Command::Remove { activity, email } => {
            run_mutation(&ctx, Method::DELETE, "remove", &activity, &email).await
        }
    }
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let response = ctx.client.get(ctx.url(&["healthz"])?).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            detail: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_list(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let catalog = fetch_activities(ctx).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render::render_catalog(&catalog));
    }
    Ok(())
}

/// Sign up or remove, print the server message, then re-render the catalog.
async fn run_mutation(
    ctx: &CliContext,
    method: Method,
    action: &str,
    selection: &str,
    email: &str,
) -> Result<(), CliError> {
    let message = submit_mutation(ctx, method, action, selection, email).await?;
    println!("{}", message.message);
    println!();

    let refreshed = fetch_activities(ctx).await?;
    print!("{}", render::render_catalog(&refreshed));
    Ok(())
}

/// Resolve the selection against the live catalog and send the request.
/// Unresolved selections go out verbatim so the server reports them.
async fn submit_mutation(
    ctx: &CliContext,
    method: Method,
    action: &str,
    selection: &str,
    email: &str,
) -> Result<MessageBody, CliError> {
    let catalog = fetch_activities(ctx).await?;
    let activity = render::resolve_selection(&catalog, selection).unwrap_or(selection);

    let url = ctx.url(&["activities", activity, action])?;
    let response = ctx.client.request(method, url).query(&[("email", email)]).send().await?;
    let body = read_json(response).await?;
    Ok(serde_json::from_value(body)?)
}

async fn fetch_activities(ctx: &CliContext) -> Result<Catalog, CliError> {
    let response = ctx.client.get(ctx.url(&["activities"])?).send().await?;
    let body = read_json(response).await?;
    Ok(serde_json::from_value(body)?)
}

/// Decode a JSON body, turning non-2xx responses into [`CliError::ServerError`]
/// carrying the server's `detail` text.
async fn read_json(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), detail: error_detail(&value) });
    }
    Ok(value)
}

fn error_detail(value: &Value) -> String {
    match serde_json::from_value::<ErrorBody>(value.clone()) {
        Ok(body) => body.detail,
        Err(_) if value.is_null() => "no response body".to_owned(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
