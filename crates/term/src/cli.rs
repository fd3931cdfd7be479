use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taglink_primitives::TypeOrder;

#[derive(Parser, Debug)]
#[command(name = "taglink")]
#[command(about = "Resolve #references against a remote site")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to $XDG_CONFIG_HOME/taglink/config.toml)
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	/// Site root to query, overriding the configuration file
	#[arg(long, global = true)]
	pub endpoint: Option<String>,

	/// Log debug output from taglink crates
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Evaluate the autocomplete trigger rule and print true or false
	Trigger {
		/// Full editor contents
		#[arg(long)]
		text: String,
		/// Zero-based cursor line
		#[arg(long, default_value_t = 0)]
		row: usize,
		/// Zero-based cursor column, in characters
		#[arg(long)]
		col: usize,
		/// Evaluate as if the last keystroke was a backspace
		#[arg(long)]
		backspace: bool,
	},
	/// Search for candidates matching a partial reference
	Search {
		/// Term typed after the trigger character
		term: String,
		/// Type priority, comma-separated (e.g. category,tag)
		#[arg(long)]
		order: Option<TypeOrder>,
	},
	/// Link every reference in a text and print the resulting HTML
	Decorate {
		/// Input file (reads stdin if omitted)
		file: Option<PathBuf>,
	},
}

#[cfg(test)]
mod tests;
