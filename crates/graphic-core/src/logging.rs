use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", source = label);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Resolve the filter directive from CLI arguments and the configured default
pub fn resolve_level(verbose: bool, log_level: Option<&str>, configured: Option<&str>) -> String {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => configured.unwrap_or("warn"),
    };

    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphic={level},graphic_core={level}")
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    configured: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = resolve_level(verbose, log_level, configured);

    // GRAPHIC_LOG and RUST_LOG take precedence over flags
    let filter = EnvFilter::try_from_env("GRAPHIC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(
            resolve_level(false, None, None),
            "graphic=warn,graphic_core=warn"
        );
    }

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(
            resolve_level(true, None, Some("error")),
            "graphic=debug,graphic_core=debug"
        );
    }

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(
            resolve_level(true, Some("trace"), Some("error")),
            "graphic=trace,graphic_core=trace"
        );
    }

    #[test]
    fn test_configured_level_used_without_flags() {
        assert_eq!(
            resolve_level(false, None, Some("info")),
            "graphic=info,graphic_core=info"
        );
    }

    #[test]
    fn test_full_directive_passes_through() {
        assert_eq!(
            resolve_level(false, Some("graphic_core=trace"), None),
            "graphic_core=trace"
        );
    }
}
