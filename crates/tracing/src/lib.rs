//! Logging setup for the evm toolkit.
//!
//! Every log line is written to stderr, so stdout stays reserved for disassembly listings and
//! execution traces.
//!
//! ```no_run
//! use evm_tracing::{EvmTracer, LayerInfo, LogFormat, Tracer};
//!
//! EvmTracer::new()
//!     .with_stderr(LayerInfo::new(LogFormat::Terminal, "info".to_string(), String::new(), None))
//!     .init()
//!     .expect("failed to initialize tracing");
//! ```

mod formatter;

pub use formatter::LogFormat;
pub use tracing_subscriber;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// A boxed tracing [Layer].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Initializes a tracing subscriber from a set of configured layers.
pub trait Tracer {
    /// Installs the subscriber as the global default.
    fn init(self) -> eyre::Result<()>;
}

/// The tracer used by the `evm` binary.
#[derive(Debug, Clone, Default)]
pub struct EvmTracer {
    stderr: LayerInfo,
}

impl EvmTracer {
    /// Creates a tracer with the default stderr layer (terminal format, `info` level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stderr layer configuration.
    pub fn with_stderr(mut self, config: LayerInfo) -> Self {
        self.stderr = config;
        self
    }
}

impl Tracer for EvmTracer {
    fn init(self) -> eyre::Result<()> {
        let layers: Vec<BoxedLayer<Registry>> = vec![self.stderr.layer()?];
        tracing_subscriber::registry().with(layers).try_init()?;
        Ok(())
    }
}

/// Configuration of a single logging layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new layer configuration.
    ///
    /// * `format` - how each event is rendered
    /// * `default_directive` - the level applied to targets not named in `filters`
    /// * `filters` - comma separated [`tracing_subscriber::EnvFilter`] directives
    /// * `color` - the color mode, or `None` to disable ANSI escapes
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }

    fn layer(&self) -> eyre::Result<BoxedLayer<Registry>> {
        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.default_directive.parse()?)
            .parse(&self.filters)?;

        Ok(self.format.apply(filter, self.color.as_deref()))
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}
