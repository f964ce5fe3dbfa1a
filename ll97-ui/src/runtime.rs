//! Background tokio runtime for outbound requests.
//!
//! gpui drives the UI on its own executor, while the submission client
//! needs a tokio reactor. One small runtime is started on first use and
//! shared by every submission; the UI thread never blocks on it.

use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// The shared background runtime, started on first use.
pub fn background() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("ll97-submit")
            .enable_all()
            .build()
            .expect("background runtime must start")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_runtime_runs_futures() {
        let value = background().block_on(async { 40 + 2 });
        assert_eq!(value, 42);
    }
}
