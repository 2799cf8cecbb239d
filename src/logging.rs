use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. A valid `RUST_LOG` overrides
/// `default_directive`; an invalid one is reported once and ignored.
pub fn init(default_directive: &str) -> anyhow::Result<()> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(err) => {
            let rejected = std::env::var(EnvFilter::DEFAULT_ENV)
                .ok()
                .map(|value| (value, err));
            let filter = EnvFilter::try_new(default_directive)
                .with_context(|| format!("build log filter from {default_directive:?}"))?;
            (filter, rejected)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    if let Some((value, err)) = rejected {
        tracing::warn!(%value, %err, default_directive, "ignoring invalid RUST_LOG");
    }
    Ok(())
}
