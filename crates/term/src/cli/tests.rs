use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn parses_trigger_arguments() {
	let cli = Cli::parse_from(["taglink", "trigger", "--text", "### ", "--col", "3"]);
	match cli.command {
		Command::Trigger {
			text,
			row,
			col,
			backspace,
		} => {
			assert_eq!(text, "### ");
			assert_eq!((row, col, backspace), (0, 3, false));
		}
		other => panic!("unexpected command {other:?}"),
	}
}

#[test]
fn search_order_is_comma_separated() {
	let cli = Cli::parse_from(["taglink", "search", "feat", "--order", "tag, category", "--endpoint", "https://x.test"]);
	assert_eq!(cli.endpoint.as_deref(), Some("https://x.test"));
	match cli.command {
		Command::Search { term, order } => {
			assert_eq!(term, "feat");
			assert_eq!(order, Some(TypeOrder::new(["tag", "category"])));
		}
		other => panic!("unexpected command {other:?}"),
	}
}

#[test]
fn global_flags_follow_subcommand() {
	let cli = Cli::parse_from(["taglink", "decorate", "post.md", "-v", "--config", "custom.toml"]);
	assert!(cli.verbose);
	assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
	assert!(matches!(cli.command, Command::Decorate { file: Some(_) }));
}
