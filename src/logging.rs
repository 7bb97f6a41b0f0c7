//! Tracing setup: logging is live before the config is read, and the
//! configured level is applied afterwards unless `RUST_LOG` is set.

use tracing::warn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Handle used to swap the filter once the config is loaded.
pub struct LevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Build the subscriber. `env` is the `RUST_LOG` filter, if any; otherwise
/// `info` is used until [`LevelHandle::apply`] runs.
pub fn subscriber<W>(
    env: Option<EnvFilter>,
    make_writer: W,
) -> (impl tracing::Subscriber + Send + Sync, LevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let from_env = env.is_some();
    let (filter, handle) = reload::Layer::new(env.unwrap_or_else(|| EnvFilter::new("info")));
    let subscriber = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer));
    (subscriber, LevelHandle { handle, from_env })
}

impl LevelHandle {
    /// Switch to the configured level. `RUST_LOG` always wins; an invalid
    /// level is reported and the current filter kept.
    pub fn apply(&self, log_level: &str) -> anyhow::Result<()> {
        if self.from_env {
            return Ok(());
        }
        match EnvFilter::try_new(log_level) {
            Ok(filter) => self.handle.reload(filter)?,
            Err(e) => warn!("logging: invalid log_level {log_level:?}: {e}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_config_fallback_is_logged() {
        let out = Captured::default();
        let writer = out.clone();
        let (sub, _level) = subscriber(None, move || writer.clone());

        tracing::subscriber::with_default(sub, || {
            let cfg = ventas_core::config::load("/nonexistent/__ventas_logging__/config.toml")
                .unwrap();
            assert_eq!(cfg.ventas.log_level, "info");
        });

        assert!(
            out.text().contains("Config file not found"),
            "missing fallback log: {}",
            out.text()
        );
    }

    #[test]
    fn test_apply_configured_level() {
        let out = Captured::default();
        let writer = out.clone();
        let (sub, level) = subscriber(None, move || writer.clone());

        tracing::subscriber::with_default(sub, || {
            level.apply("warn").unwrap();
            tracing::info!("hidden after reload");
            tracing::warn!("visible after reload");
        });

        let text = out.text();
        assert!(!text.contains("hidden after reload"));
        assert!(text.contains("visible after reload"));
    }

    #[test]
    fn test_env_filter_wins_over_config() {
        let out = Captured::default();
        let writer = out.clone();
        let (sub, level) = subscriber(Some(EnvFilter::new("debug")), move || writer.clone());

        tracing::subscriber::with_default(sub, || {
            level.apply("error").unwrap();
            tracing::debug!("debug from env");
        });

        assert!(out.text().contains("debug from env"));
    }

    #[test]
    fn test_invalid_level_keeps_filter() {
        let out = Captured::default();
        let writer = out.clone();
        let (sub, level) = subscriber(None, move || writer.clone());

        tracing::subscriber::with_default(sub, || {
            level.apply("ventas=loud").unwrap();
            tracing::info!("still info");
        });

        let text = out.text();
        assert!(text.contains("invalid log_level"));
        assert!(text.contains("still info"));
    }
}
