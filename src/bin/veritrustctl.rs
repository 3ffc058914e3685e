use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;
use veritrust_backend::Config;

#[derive(Parser, Debug)]
#[command(name = "veritrustctl", about = "CLI for the VeriTrust backend API", version)]
struct Cli {
    /// Override the API base URL (default http://127.0.0.1:8001/api)
    #[arg(global = true, long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Status check operations
    Status {
        #[command(subcommand)]
        cmd: StatusCmd,
    },
    /// Image generation operations
    Image {
        #[command(subcommand)]
        cmd: ImageCmd,
    },
    /// Brand configuration dumps
    Brand {
        #[command(subcommand)]
        cmd: BrandCmd,
    },
}

#[derive(Subcommand, Debug)]
enum StatusCmd {
    /// Create a status check for a client
    Create {
        /// Client name to record
        client_name: String,
    },
    /// List stored status checks
    List {
        /// Output raw JSON instead of pretty lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ImageCmd {
    /// Generate an image and save it to disk
    Generate {
        /// Prompt text; brand styling is applied server-side
        prompt: String,
        /// Style adjective for the generated image
        #[arg(long, default_value = "realistic")]
        style: String,
        /// Output path (defaults to ./generated.png)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// List stored generated assets
    Assets {
        /// Output raw JSON instead of pretty lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BrandCmd {
    /// Print the color palette
    Colors,
    /// Print the typography system
    Typography,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let api_url = cli
        .api_url
        .or_else(|| std::env::var("VERITRUST_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8001/api".to_string());
    let api_url = api_url.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status { cmd } => match cmd {
            StatusCmd::Create { client_name } => {
                let body = json!({ "client_name": client_name });
                let v = api_post(&client, &format!("{}/status", api_url), &body).await?;
                println!("{}", serde_json::to_string_pretty(&v)?);
                Ok(())
            }
            StatusCmd::List { json } => {
                let v = api_get(&client, &format!("{}/status", api_url)).await?;
                if json {
                    println!("{}", serde_json::to_string(&v)?);
                } else if let Some(arr) = v.as_array() {
                    for item in arr {
                        println!(
                            "{}  {}  {}",
                            item["id"].as_str().unwrap_or("-"),
                            item["timestamp"].as_str().unwrap_or("-"),
                            item["client_name"].as_str().unwrap_or("-"),
                        );
                    }
                } else {
                    println!("{}", serde_json::to_string_pretty(&v)?);
                }
                Ok(())
            }
        },
        Commands::Image { cmd } => match cmd {
            ImageCmd::Generate { prompt, style, out } => {
                let body = json!({ "prompt": prompt, "style": style });
                let v = api_post(&client, &format!("{}/generate-image", api_url), &body).await?;
                let encoded = v["image_base64"].as_str().unwrap_or_default();
                let bytes = BASE64.decode(encoded)?;
                let path = out.unwrap_or_else(|| PathBuf::from("generated.png"));
                tokio::fs::write(&path, &bytes).await?;
                println!("Saved {} ({} bytes)", path.display(), bytes.len());
                Ok(())
            }
            ImageCmd::Assets { json } => {
                let v = api_get(&client, &format!("{}/generated-assets", api_url)).await?;
                if json {
                    println!("{}", serde_json::to_string(&v)?);
                } else if let Some(arr) = v.as_array() {
                    for item in arr {
                        let encoded = item["image_base64"].as_str().unwrap_or_default();
                        println!(
                            "{}  {}  {} base64 chars  {:?}",
                            item["id"].as_str().unwrap_or("-"),
                            item["created_at"].as_str().unwrap_or("-"),
                            encoded.len(),
                            item["prompt"].as_str().unwrap_or("-"),
                        );
                    }
                } else {
                    println!("{}", serde_json::to_string_pretty(&v)?);
                }
                Ok(())
            }
        },
        Commands::Brand { cmd } => {
            let endpoint = match cmd {
                BrandCmd::Colors => "brand-colors",
                BrandCmd::Typography => "brand-typography",
            };
            let v = api_get(&client, &format!("{}/{}", api_url, endpoint)).await?;
            println!("{}", serde_json::to_string_pretty(&v)?);
            Ok(())
        }
    }
}

async fn api_get(
    client: &reqwest::Client,
    url: &str,
) -> Result<Value, Box<dyn std::error::Error>> {
    let response = client.get(url).send().await?;
    read_json(response).await
}

async fn api_post(
    client: &reqwest::Client,
    url: &str,
    body: &Value,
) -> Result<Value, Box<dyn std::error::Error>> {
    let response = client.post(url).json(body).send().await?;
    read_json(response).await
}

/// Parse a response body, surfacing the server's `detail` message on errors.
async fn read_json(response: reqwest::Response) -> Result<Value, Box<dyn std::error::Error>> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if status.is_success() {
        Ok(body)
    } else {
        let detail = body
            .get("detail")
            .and_then(|v| v.as_str())
            .unwrap_or("request failed");
        eprintln!("Error: {} ({})", detail, status);
        std::process::exit(1);
    }
}
