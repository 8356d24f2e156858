use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "lotto_qr=debug,info"
    } else {
        "lotto_qr=info,warn"
    }
}

/// Installs the global subscriber for the scanner CLI.
///
/// 日誌寫到 stderr，stdout 只留給推薦結果
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives.parse::<EnvFilter>().is_ok());
            assert!(directives.starts_with("lotto_qr="));
        }
        assert!(default_directives(true).contains("lotto_qr=debug"));
        assert!(!default_directives(false).contains("debug"));
    }
}
