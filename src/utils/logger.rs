use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log verbosity, most quiet first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

crate::named_variants!(Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
});

impl Verbosity {
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Error => "switcher_utils=error",
            Verbosity::Warn => "switcher_utils=warn",
            Verbosity::Info => "switcher_utils=info",
            Verbosity::Debug => "switcher_utils=debug,info",
            Verbosity::Trace => "switcher_utils=trace,info",
        }
    }
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

pub fn init_cli_logger(verbosity: Verbosity) {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbosity: Verbosity) {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
