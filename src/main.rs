use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use itempanel::config::Config;
use itempanel::fetch::CannedSource;
use itempanel::logging::init_tracing;
use itempanel::notify::{self, Notification};
use itempanel::ui::panel::{Lifecycle, Panel, PanelState};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

/// Host harness for the item panel: drives its lifecycle and prints every
/// toast and event as a JSON line.
#[derive(Debug, Parser)]
#[command(name = "itempanel", version)]
struct Args {
    /// Config file (default: <config_dir>/itempanel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Type this into the input and press the primary action
    #[arg(long)]
    query: Option<String>,

    /// Override the canned source latency
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Load right after mount
    #[arg(long)]
    load_on_mount: bool,

    /// Read commands from stdin
    #[arg(long)]
    interactive: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateReport<'a> {
    is_loading: bool,
    has_error: bool,
    error_message: &'a str,
    input_value: &'a str,
    has_data: bool,
    is_action_disabled: bool,
    items: &'a [itempanel::fetch::Item],
}

impl<'a> From<&'a PanelState> for StateReport<'a> {
    fn from(state: &'a PanelState) -> Self {
        Self {
            is_loading: state.is_loading(),
            has_error: state.has_error(),
            error_message: state.error_message(),
            input_value: state.input_value(),
            has_data: state.has_data(),
            is_action_disabled: state.is_action_disabled(),
            items: state.items(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.source.delay_ms));
    let (notifier, rx) = notify::channel();
    let printer = tokio::spawn(print_notifications(rx));

    let panel = Panel::builder(Arc::new(CannedSource::with_delay(delay)))
        .config(config.panel.clone())
        .notifier(notifier)
        .load_on_mount(args.load_on_mount || config.lifecycle.load_on_mount)
        .build();

    panel.on_mount();
    panel.on_render();

    if let Some(query) = &args.query {
        panel.on_input_change(query.clone());
        panel.primary_action();
        panel.wait_idle().await;
        panel.on_render();
    }

    if args.interactive {
        run_interactive(&panel).await?;
    }

    panel.wait_idle().await;
    panel.on_unmount();
    print_state(&panel.state())?;

    drop(panel);
    printer.await.context("notification printer")?;
    Ok(())
}

async fn print_notifications(mut rx: UnboundedReceiver<Notification>) {
    while let Some(notification) = rx.recv().await {
        match serde_json::to_string(&notification) {
            Ok(line) => println!("{}", line),
            Err(err) => tracing::warn!(error = %err, "Failed to serialize notification"),
        }
    }
}

fn print_state(state: &PanelState) -> anyhow::Result<()> {
    let report = serde_json::json!({ "kind": "state", "state": StateReport::from(state) });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

async fn run_interactive(panel: &Panel) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let (command, rest) = match line.trim_start().split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "input" => panel.on_input_change(rest),
            "primary" => {
                panel.primary_action();
            }
            "secondary" => panel.secondary_action(),
            "refresh" => drop(panel.refresh_data()),
            "reset" => panel.reset_component(),
            "validate" => {
                let valid = panel.validate_input();
                println!("{}", serde_json::json!({ "kind": "validate", "valid": valid }));
            }
            "wait" => panel.wait_idle().await,
            "state" => print_state(&panel.state())?,
            "quit" | "exit" => break,
            other => tracing::warn!(command = %other, "Unknown command"),
        }
        panel.on_render();
    }

    Ok(())
}
