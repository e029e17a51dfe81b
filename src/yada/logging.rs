use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive used when neither `RUST_LOG` nor `YADA_LOG` is set.
pub fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("yada={}", level),
        (true, None) => "yada=debug".to_string(),
        (false, None) => "yada=warn".to_string(),
    }
}

/// Initialize structured logging to stderr. Stdout stays reserved for
/// command output.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("YADA_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, log_level)));

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_follows_flags() {
        assert_eq!(default_directive(false, None), "yada=warn");
        assert_eq!(default_directive(true, None), "yada=debug");
        assert_eq!(default_directive(true, Some("trace")), "yada=trace");
        assert_eq!(default_directive(false, Some("yada=info,warn")), "yada=info,warn");
    }
}
