//! Command-line client for a running Tea House server.
//!
//! Prints records as pretty JSON and confirmations as plain text. The server URL comes from
//! `--url` or `TEA_HOUSE_URL`.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tea_house::{
    client::TeaClient,
    store::{TeaDraft, TeaId},
};

#[derive(Parser)]
#[command(name = "tea-cli", about = "Manage teas on a Tea House server")]
struct Cli {
    /// Base URL of the server.
    #[arg(
        long,
        global = true,
        env = "TEA_HOUSE_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every tea.
    List,
    /// Show one tea.
    Get { id: TeaId },
    /// Add a tea.
    Create(Fields),
    /// Replace a tea's name and price. Omitted fields are cleared.
    Update {
        id: TeaId,
        #[command(flatten)]
        fields: Fields,
    },
    /// Remove a tea.
    Delete { id: TeaId },
}

#[derive(Args)]
struct Fields {
    #[arg(long)]
    name: Option<String>,
    /// Parsed as JSON when possible (`5`, `4.5`), otherwise sent as a string.
    #[arg(long)]
    price: Option<String>,
}

impl Fields {
    fn into_draft(self) -> TeaDraft {
        TeaDraft {
            name: self.name.map(Value::String),
            price: self.price.map(parse_loose_json),
        }
    }
}

fn parse_loose_json(raw: String) -> Value {
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => Value::String(raw),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = TeaClient::new(&cli.url).context("failed to build client")?;

    match cli.command {
        Command::List => print_json(&client.list().await?),
        Command::Get { id } => print_json(&client.get(id).await?),
        Command::Create(fields) => print_json(&client.create(&fields.into_draft()).await?),
        Command::Update { id, fields } => {
            print_json(&client.update(id, &fields.into_draft()).await?)
        }
        Command::Delete { id } => {
            println!("{}", client.delete(id).await?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to render response")?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_prefers_json_numbers() {
        assert_eq!(parse_loose_json("5".into()), json!(5));
        assert_eq!(parse_loose_json("4.5".into()), json!(4.5));
        assert_eq!(parse_loose_json("cheap".into()), json!("cheap"));
    }

    #[test]
    fn update_parses_flattened_fields() {
        let cli = Cli::try_parse_from(["tea-cli", "update", "3", "--name", "Oolong"])
            .expect("valid arguments");
        match cli.command {
            Command::Update { id, fields } => {
                assert_eq!(id, 3);
                let draft = fields.into_draft();
                assert_eq!(draft.name, Some(json!("Oolong")));
                assert_eq!(draft.price, None);
            }
            _ => panic!("expected update"),
        }
    }
}
