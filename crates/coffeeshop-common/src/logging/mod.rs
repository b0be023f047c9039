//! Logging initialization for Coffee Shop binaries
//!
//! Filter priority:
//! 1. CLI flags (`-v/-q`) - highest priority
//! 2. RUST_LOG environment variable
//! 3. The mode default from [`default_filter`] - lowest priority

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a binary, picked from the environment's `production` flag.
///
/// Production builds only report warnings; development builds log the
/// binary and the environment crate at debug level.
///
/// ```
/// use coffeeshop_common::logging::default_filter;
///
/// assert_eq!(default_filter(true, "coffeeshop"), "warn");
/// assert_eq!(
///     default_filter(false, "coffeeshop"),
///     "warn,coffeeshop=debug,coffeeshop_env=debug"
/// );
/// ```
pub fn default_filter(production: bool, binary_name: &str) -> String {
    if production {
        "warn".to_string()
    } else {
        format!("warn,{binary_name}=debug,coffeeshop_env=debug")
    }
}

/// Filter directive to install.
///
/// Explicit `-v/-q` flags map to a single level; otherwise `RUST_LOG` is used
/// when set and parseable, then `default_filter`.
pub fn filter_directive<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> String {
    select_directive(
        verbosity,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        default_filter,
    )
}

fn select_directive<L: LogLevel>(
    verbosity: &Verbosity<L>,
    env_value: Option<String>,
    default_filter: &str,
) -> String {
    if verbosity.is_present() {
        return verbosity.log_level_filter().to_string().to_lowercase();
    }

    match env_value {
        Some(value) if EnvFilter::try_new(&value).is_ok() => value,
        _ => default_filter.to_string(),
    }
}

/// Initialize logging with the specified verbosity level and default filter.
///
/// ```no_run
/// use clap::Parser;
/// use clap_verbosity_flag::{Verbosity, WarnLevel};
/// use coffeeshop_common::logging;
///
/// #[derive(Parser)]
/// struct Args {
///     #[clap(flatten)]
///     verbosity: Verbosity<WarnLevel>,
/// }
///
/// let args = Args::parse();
/// let filter = logging::default_filter(false, "coffeeshop");
/// logging::init_logging(&args.verbosity, &filter).unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter_directive(verbosity, default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_verbosity_flag::WarnLevel;

    #[test]
    fn test_default_filter_by_mode() {
        assert_eq!(default_filter(true, "coffeeshop"), "warn");
        assert!(default_filter(false, "coffeeshop").contains("coffeeshop=debug"));
    }

    #[test]
    fn test_explicit_verbosity_wins() {
        assert_eq!(filter_directive(&Verbosity::<WarnLevel>::new(2, 0), "warn"), "debug");
        assert_eq!(filter_directive(&Verbosity::<WarnLevel>::new(0, 2), "warn"), "off");
    }

    #[test]
    fn test_env_value_used_when_no_flags() {
        let quiet = Verbosity::<WarnLevel>::new(0, 0);

        assert_eq!(
            select_directive(&quiet, Some("coffeeshop=trace".to_string()), "warn"),
            "coffeeshop=trace"
        );
        assert_eq!(select_directive(&quiet, None, "warn"), "warn");
    }

    #[test]
    fn test_malformed_env_value_falls_back_to_default() {
        let quiet = Verbosity::<WarnLevel>::new(0, 0);
        let directive = select_directive(&quiet, Some("coffeeshop=[[bad".to_string()), "warn");

        assert_eq!(directive, "warn");
        assert!(EnvFilter::try_new(directive).is_ok());
    }

    #[test]
    fn test_generated_default_filter_is_valid() {
        for production in [true, false] {
            assert!(EnvFilter::try_new(default_filter(production, "coffeeshop")).is_ok());
        }
    }
}
