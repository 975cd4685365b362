use crate::BoxedLayer;
use clap::ValueEnum;
use std::fmt::{self, Display};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// The format of log lines written to stderr.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human readable, optionally colored, lines.
    Terminal,
}

impl LogFormat {
    /// Builds a layer rendering events in this format, filtered by `filter`.
    pub(crate) fn apply(&self, filter: EnvFilter, color: Option<&str>) -> BoxedLayer<Registry> {
        let ansi = color.is_some_and(|color| color != "never");

        match self {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
            LogFormat::Terminal => tracing_subscriber::fmt::layer()
                .with_ansi(ansi)
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}
