use clap::ValueEnum;
use serde::Deserialize;

/// How the CLI renders a plan.
///
/// - `Text`: a status line followed by the numbered execution order.
/// - `Json`: a single JSON object with `valid`, `message` and `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
