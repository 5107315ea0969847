use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable overriding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "LABEL_PATHS_LOG";

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` or [`LOG_ENV`] take precedence. Otherwise an explicit
/// `log_level` is used, else `verbose` selects debug and the default is warn.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("label_paths={level},find_paths={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::directive;

    #[test]
    fn bare_level_is_scoped_to_crate() {
        assert_eq!(directive("debug"), "label_paths=debug,find_paths=debug");
        assert_eq!(directive("label_paths=trace"), "label_paths=trace");
    }
}
