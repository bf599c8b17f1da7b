mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};

use flowrest_core::transport::HttpTransportConfig;
use flowrest_core::types::{Script, Transaction};
use flowrest_core::{Argument, CoreError, RestClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = HttpTransportConfig {
        connect_timeout: Duration::from_secs(args.connect_timeout),
        timeout: Duration::from_secs(args.timeout),
        ..HttpTransportConfig::default()
    };
    let client = match &args.url {
        Some(url) => RestClient::with_config(url.as_str(), config),
        None => RestClient::with_config(args.network, config),
    }
    .context("configure REST client")?;

    tracing::info!(base_url = client.base_url(), "using Flow REST endpoint");

    let output = run(&client, args.command)
        .await
        .map_err(|err| describe_error(client.base_url(), err))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render output")?
    );
    Ok(())
}

async fn run(client: &RestClient, command: cli::Command) -> Result<serde_json::Value, CliError> {
    use cli::Command;

    let value = match command {
        Command::LatestBlock => to_json(client.get_latest_block().await?)?,
        Command::Block { id } => to_json(client.get_block(id).await?)?,
        Command::Blocks { heights } => to_json(client.get_block_height(&heights).await?)?,
        Command::BlockRange { start, end } => {
            to_json(client.get_blocks_in_range(start, end).await?)?
        }
        Command::Transaction { id } => to_json(client.get_transaction(id).await?)?,
        Command::TransactionResult { id } => {
            let result = client.get_transaction_result(id).await?;
            tracing::info!(status = %result.status, "transaction result");
            to_json(result)?
        }
        Command::Account { address } => to_json(client.get_account(address).await?)?,
        Command::EventsRange {
            event_type,
            start,
            end,
        } => to_json(
            client
                .get_events_within_block_height(&event_type, start, end)
                .await?,
        )?,
        Command::Events {
            event_type,
            block_ids,
        } => to_json(client.get_events(&event_type, block_ids).await?)?,
        Command::Collection { id } => to_json(client.get_collection(id).await?)?,
        Command::ExecutionResults { block_ids } => {
            to_json(client.get_execution_results(block_ids).await?)?
        }
        Command::ExecuteScript { file, args } => {
            let source = std::fs::read_to_string(&file)
                .wrap_err_with(|| format!("read script {}", file.display()))?;
            let arguments = args
                .iter()
                .map(|raw| {
                    serde_json::from_str::<Argument>(raw)
                        .wrap_err_with(|| format!("parse JSON-Cadence argument `{raw}`"))
                })
                .collect::<eyre::Result<Vec<_>>>()?;
            let script = Script::new(&source, &arguments)?;
            client.execute_script(&script).await?
        }
        Command::Submit { file } => {
            let raw = std::fs::read_to_string(&file)
                .wrap_err_with(|| format!("read transaction {}", file.display()))?;
            let transaction: Transaction =
                serde_json::from_str(&raw).wrap_err("parse transaction JSON")?;
            let response = client.submit_transaction(&transaction).await?;
            if let Some(id) = response.get("id").and_then(serde_json::Value::as_str) {
                tracing::info!(transaction_id = id, "transaction submitted");
            }
            response
        }
    };
    Ok(value)
}

fn to_json<T: serde::Serialize>(value: T) -> eyre::Result<serde_json::Value> {
    serde_json::to_value(value).wrap_err("serialize result")
}

/// Keeps REST errors typed until they are rendered.
enum CliError {
    Core(CoreError),
    Other(eyre::Report),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

impl From<eyre::Report> for CliError {
    fn from(err: eyre::Report) -> Self {
        Self::Other(err)
    }
}

fn describe_error(base_url: &str, err: CliError) -> eyre::Report {
    match err {
        CliError::Core(CoreError::Transport(source)) => {
            eyre!(format_connect_error(base_url, &source.to_string()))
                .wrap_err("while calling the Flow REST API")
        }
        CliError::Core(CoreError::Service(service)) => {
            let summary = match (service.code(), service.service_message()) {
                (Some(code), Some(message)) => format!("service error {code}: {message}"),
                _ => service.message().to_owned(),
            };
            eyre!(summary).wrap_err(format!("request to `{base_url}` was rejected"))
        }
        CliError::Core(other) => eyre::Report::new(other),
        CliError::Other(report) => report,
    }
}

fn format_connect_error(base_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("could not reach REST endpoint `{base_url}`"),
        format!("transport error: {source_error}"),
    ];

    if source_error.contains("dns error") {
        lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("tls") || source_error.contains("certificate") {
        lines.push(
            "hint: TLS handshake failed; verify certificate trust and that the endpoint uses HTTPS"
                .into(),
        );
    } else if source_error.contains("operation timed out") || source_error.contains("timeout") {
        lines.push("hint: the request timed out; raise --timeout or check node load".into());
    } else if source_error.contains("error sending request for url") {
        lines.push(
            "hint: request could not be sent; for a local emulator run `flow emulator` and check --url"
                .into(),
        );
    }

    lines.join("\n")
}
