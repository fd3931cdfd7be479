mod cli;
mod config;

use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::FileConfig;
use taglink_hashtag::{HashtagSession, SessionConfig, cook};
use taglink_lookup::HttpResolver;
use taglink_primitives::{TriggerContext, should_trigger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let file = FileConfig::load(cli.config.as_deref())?;
	let mut config = file.session_config();

	match cli.command {
		Command::Trigger {
			text,
			row,
			col,
			backspace,
		} => {
			let ctx = TriggerContext {
				text: &text,
				row,
				col,
				backspace,
			};
			println!("{}", should_trigger(&ctx, config.trigger));
		}
		Command::Search { term, order } => {
			if let Some(order) = order {
				config.type_order = order;
			}
			let session = connect(&file, cli.endpoint.as_deref(), config)?;
			let outcome = session.search(&term).await;
			if outcome.is_cancelled() {
				println!("no results");
			}
			for entity in outcome.results() {
				println!("{}\t{}\t{}", entity.completion_text(session.config().trigger), entity.kind, entity.text);
			}
		}
		Command::Decorate { file: input } => {
			let text = read_input(input.as_deref())?;
			let session = connect(&file, cli.endpoint.as_deref(), config)?;
			let mut fragment = cook(&text, session.config().trigger);
			let report = session.decorate(&mut fragment).await;
			println!("{fragment}");
			for reference in &report.unresolved {
				eprintln!("unresolved: {}{reference}", session.config().trigger);
			}
		}
	}
	Ok(())
}

fn connect(file: &FileConfig, endpoint: Option<&str>, config: SessionConfig) -> Result<HashtagSession<HttpResolver>> {
	let endpoint = file.endpoint(endpoint)?;
	let resolver = HttpResolver::new(&endpoint).with_context(|| format!("invalid endpoint {endpoint}"))?;
	tracing::debug!(%endpoint, order = %config.type_order, "session.start");
	Ok(HashtagSession::new(Arc::new(resolver), config))
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
		None => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
			Ok(text)
		}
	}
}

/// Sets up logging to stderr, or to a per-process file under `TAGLINK_LOG_DIR`.
///
/// `TAGLINK_LOG` overrides the default filter.
fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_env("TAGLINK_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("taglink=debug,info")
		} else {
			EnvFilter::new("taglink=info,warn")
		}
	});

	if let Some(log_dir) = std::env::var_os("TAGLINK_LOG_DIR").map(PathBuf::from) {
		let log_path = log_dir.join(format!("taglink.{}.log", std::process::id()));
		let file = std::fs::create_dir_all(&log_dir)
			.and_then(|()| OpenOptions::new().create(true).append(true).open(&log_path));
		if let Ok(file) = file {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry().with(filter).with(file_layer).init();
			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
