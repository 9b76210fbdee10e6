use std::{io::Read as _, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr as _};
use issue_tree::{ErrorLog, Extractor, IssueRef, Settings, StrategyKind, get_due_date};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ISSUE_TREE_LOG";

#[derive(Parser)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
	/// Settings file; defaults to $XDG_CONFIG_HOME/issue_tree/config.toml
	#[arg(long, global = true)]
	config: Option<PathBuf>,
	/// Log as JSON lines instead of human-readable text
	#[arg(long, global = true)]
	log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the children of an issue as JSON
	Children(ChildrenArgs),
	/// Print the ETA of an issue as JSON
	Eta(EtaArgs),
}

#[derive(Args)]
struct ChildrenArgs {
	#[clap(flatten)]
	input: InputArgs,
	/// Also report which strategy won and why earlier ones fell through
	#[arg(long)]
	trail: bool,
	/// Strategies to try, in order
	#[arg(long, value_enum, value_delimiter = ',')]
	strategies: Vec<StrategyKind>,
}

#[derive(Args)]
struct EtaArgs {
	#[clap(flatten)]
	input: InputArgs,
}

#[derive(Args)]
struct InputArgs {
	/// Issue JSON as returned by the GitHub REST API; reads stdin when omitted
	file: Option<PathBuf>,
	/// Treat the issue as the root of its tree
	#[arg(long)]
	root: bool,
}

impl InputArgs {
	fn read_issue(&self) -> Result<IssueRef> {
		let raw = match &self.file {
			Some(path) => std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read issue file at {}", path.display()))?,
			None => {
				let mut buf = String::new();
				std::io::stdin().read_to_string(&mut buf).wrap_err("Failed to read issue from stdin")?;
				buf
			}
		};
		let mut issue: IssueRef = serde_json::from_str(&raw).wrap_err("Issue is not valid JSON")?;
		issue.root_issue |= self.root;
		Ok(issue)
	}
}

fn main() -> Result<()> {
	color_eyre::install()?;
	let cli = Cli::parse();
	init_tracing(cli.log_json);

	let settings = Settings::load(cli.config.as_deref())?;
	tracing::debug!("[main] settings: {settings:?}");

	match cli.command {
		Commands::Children(args) => children_command(&settings, args),
		Commands::Eta(args) => eta_command(&settings, args),
	}
}

fn children_command(settings: &Settings, args: ChildrenArgs) -> Result<()> {
	let issue = args.input.read_issue()?;
	let mut extractor = Extractor::new(settings.extract_options());
	if !args.strategies.is_empty() {
		extractor = extractor.with_strategies(args.strategies);
	}

	let extraction = extractor.children_with_trail(&issue).wrap_err_with(|| format!("No children found for {:?}", issue.html_url))?;
	let out = if args.trail {
		serde_json::to_string_pretty(&extraction)?
	} else {
		serde_json::to_string_pretty(&extraction.children)?
	};
	println!("{out}");
	Ok(())
}

fn eta_command(settings: &Settings, args: EtaArgs) -> Result<()> {
	let issue = args.input.read_issue()?;
	let mut errors = ErrorLog::new();
	let due = get_due_date(&issue, &mut errors);

	for entry in errors.entries() {
		eprintln!("{}: {} (see {})", entry.error_title, entry.error_message, entry.guide_link(&settings.user_guide_url));
	}
	println!("{}", serde_json::to_string_pretty(&due)?);
	Ok(())
}

fn init_tracing(json: bool) {
	let default_directives = option_env!("LOG_DIRECTIVES").unwrap_or("warn");
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives));
	let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
	if json {
		builder.json().init();
	} else {
		builder.init();
	}
}
