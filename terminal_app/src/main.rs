use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fmt::Debug;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about = "Terminal front end for the TextSword backend")]
struct Args {
    #[clap(short, long, default_value = "127.0.0.1:8000")]
    backend_address: String,
    /// Also write the returned text to this file.
    #[clap(short, long)]
    output: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Summarize text into points ("-" reads from stdin).
    Summarize { text: String },
    /// Correct the grammar of text ("-" reads from stdin).
    Grammar { text: String },
    /// Fetch brief, recent information about a topic.
    Information { topic: String },
    /// Compose an email from recipient, subject and body.
    Mail {
        recipient: String,
        subject: String,
        body: String,
    },
}

/// Endpoint name, request payload and response field for one operation.
fn request_parts(command: &Command) -> (&'static str, serde_json::Value, &'static str) {
    match command {
        Command::Summarize { text } => ("summarize", json!({ "text": text }), "summary"),
        Command::Grammar { text } => (
            "grammar",
            json!({ "text_to_be_improved": text }),
            "text_to_be_improved",
        ),
        Command::Information { topic } => ("information", json!({ "topic": topic }), "information"),
        Command::Mail {
            recipient,
            subject,
            body,
        } => (
            "generate_mail",
            json!({ "recipient": recipient, "subject": subject, "body": body }),
            "mail_content",
        ),
    }
}

fn resolve_stdin(command: Command) -> Result<Command> {
    let read_all = || -> Result<String> {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    };

    Ok(match command {
        Command::Summarize { text } if text == "-" => Command::Summarize { text: read_all()? },
        Command::Grammar { text } if text == "-" => Command::Grammar { text: read_all()? },
        other => other,
    })
}

struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpClient {
    fn new(address: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{}", address),
        }
    }

    async fn send_request(
        &self,
        endpoint: &str,
        json_data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}/", self.base_url, endpoint);
        let response = self.client.post(&url).json(&json_data).send().await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;
        if !status.is_success() {
            let detail = body
                .get("detail")
                .and_then(|d| d.as_str())
                .unwrap_or("unknown error");
            bail!("Backend returned {status}: {detail}");
        }
        Ok(body)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!(
        "Connecting to backend on [{:?}]",
        args.backend_address
    );

    let client = HttpClient::new(&args.backend_address);
    let command = resolve_stdin(args.command)?;
    let (endpoint, payload, field) = request_parts(&command);

    let response = client.send_request(endpoint, payload).await?;
    let Some(text) = response.get(field).and_then(|t| t.as_str()) else {
        bail!("Backend response is missing the '{field}' field");
    };

    println!("{text}");

    if let Some(path) = args.output {
        std::fs::write(&path, text)?;
        tracing::info!("Saved response to {}", path.display());
    }

    Ok(())
}
