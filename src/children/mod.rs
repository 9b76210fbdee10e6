//! Extracting an issue's children from free-form issue text.
//!
//! Authors list children in one of three conventions, tried in this order:
//! 1. a fenced ```` ```[tasklist] ```` block in the markdown body,
//! 2. a `children:` line followed by one reference per line,
//! 3. (legacy) heading-qualified `<ul>`s of issue links in the rendered HTML.
//!
//! The first strategy that succeeds wins outright; results are never merged. Every failure
//! except the last strategy's is swallowed and recorded as a [`Fallback`].

pub mod children_line;
pub mod heading;
pub mod legacy_html;
pub mod reference;
pub mod section;
pub mod tasklist;

use clap::ValueEnum;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::issue::{ChildRecord, IssueRef, ParseFailure};

/// One way of writing down children.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
	#[display("tasklist")]
	#[serde(rename = "tasklist")]
	#[value(name = "tasklist")]
	TaskList,
	#[display("children-line")]
	ChildrenLine,
	#[display("legacy-html")]
	LegacyHtml,
}

impl StrategyKind {
	/// Precedence used unless the caller asks otherwise.
	pub const DEFAULT_ORDER: [StrategyKind; 3] = [StrategyKind::TaskList, StrategyKind::ChildrenLine, StrategyKind::LegacyHtml];
}

/// Knobs for the extraction engine. Built by the caller, usually from [`Settings`](crate::Settings).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtractOptions {
	/// Heading labels accepted in addition to [`heading::CHILDREN_HEADINGS`].
	pub extra_headings: Vec<String>,
	/// Hold legacy HTML hrefs to the same `github.com` check as the text strategies.
	pub strict_legacy_hosts: bool,
}

/// A strategy that gave up, and why.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Fallback {
	pub strategy: StrategyKind,
	pub failure: ParseFailure,
}

/// Children of one issue, with the route taken to find them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Extraction {
	pub strategy: StrategyKind,
	pub children: Vec<ChildRecord>,
	/// Strategies tried before `strategy`, in order.
	pub fallbacks: Vec<Fallback>,
}

/// Runs strategies left to right, returning the first success.
///
/// Holds no per-call state: the same issue always gives the same result, and one extractor can
/// be shared across threads.
#[derive(Clone, Debug)]
pub struct Extractor {
	options: ExtractOptions,
	strategies: Vec<StrategyKind>,
}

impl Default for Extractor {
	fn default() -> Self {
		Self::new(ExtractOptions::default())
	}
}

impl Extractor {
	pub fn new(options: ExtractOptions) -> Self {
		Self {
			options,
			strategies: StrategyKind::DEFAULT_ORDER.to_vec(),
		}
	}

	/// Replace the precedence order. Strategies left out are never tried.
	pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = StrategyKind>) -> Self {
		self.strategies = strategies.into_iter().collect();
		self
	}

	pub fn options(&self) -> &ExtractOptions {
		&self.options
	}

	pub fn strategies(&self) -> &[StrategyKind] {
		&self.strategies
	}

	/// Run a single strategy, outside of the chain.
	pub fn run(&self, strategy: StrategyKind, issue: &IssueRef) -> Result<Vec<ChildRecord>, ParseFailure> {
		match strategy {
			StrategyKind::TaskList => tasklist::extract(issue),
			StrategyKind::ChildrenLine => children_line::extract(issue),
			StrategyKind::LegacyHtml => legacy_html::extract(issue, &self.options),
		}
	}

	/// Children of `issue`, in the winning section's document order.
	pub fn children(&self, issue: &IssueRef) -> Result<Vec<ChildRecord>, ParseFailure> {
		self.children_with_trail(issue).map(|extraction| extraction.children)
	}

	/// Like [`children`](Self::children), but also reports which strategy won and why the
	/// earlier ones fell through. Only the last strategy's failure is returned as an error.
	pub fn children_with_trail(&self, issue: &IssueRef) -> Result<Extraction, ParseFailure> {
		let mut fallbacks = Vec::new();
		let mut last_failure = ParseFailure::NoStrategies;

		for &strategy in &self.strategies {
			match self.run(strategy, issue) {
				Ok(children) => {
					tracing::debug!("[children] {} -> {} children via {strategy}", issue.html_url, children.len());
					return Ok(Extraction { strategy, children, fallbacks });
				}
				Err(failure) => {
					tracing::debug!("[children] {}: {strategy} failed, falling back: {failure}", issue.html_url);
					fallbacks.push(Fallback {
						strategy,
						failure: failure.clone(),
					});
					last_failure = failure;
				}
			}
		}
		Err(last_failure)
	}
}

/// Children of `issue` with default options and precedence.
pub fn get_children(issue: &IssueRef) -> Result<Vec<ChildRecord>, ParseFailure> {
	Extractor::default().children(issue)
}
