//! Tracing subscriber setup for native and browser builds.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the caller's
//! default directive, otherwise `error`. Installing twice is harmless: the
//! second call leaves the first subscriber in place.

use tracing_subscriber::EnvFilter;

fn resolve_filter(default_filter: &str) -> EnvFilter {
    #[cfg(not(target_family = "wasm"))]
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match EnvFilter::try_new(default_filter) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("error"),
    }
}

/// Installs the global subscriber.
#[cfg(not(target_family = "wasm"))]
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(default_filter))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Installs the global subscriber, writing to the browser console.
#[cfg(target_family = "wasm")]
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(default_filter))
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleMakeWriter)
        .try_init();
}

#[cfg(target_family = "wasm")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;

    /// Buffers one formatted event and hands it to `console.log` when dropped.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    use super::*;

    #[test]
    fn invalid_default_directive_is_tolerated() {
        assert!(EnvFilter::try_new("folio=verbose").is_err());
        let _ = resolve_filter("folio=verbose");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing("folio=debug");
        init_tracing("folio=info");
        tracing::info!("still logging after second init");
    }
}
