//! Tokio Runtime Bridge
//!
//! Fire-and-forget work (preference sync) must run whether or not the caller
//! sits inside a tokio runtime. Tasks go to the ambient runtime when there is
//! one and to a lazily created process runtime otherwise.
//!
//! ```text
//! change_locale()
//!       │
//!       ▼
//! spawn_named("preferences-sync", async { ... })
//!       │
//!       ├── inside tokio ──▶ Handle::current().spawn()
//!       └── outside     ──▶ process Runtime::spawn()
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

/// Process runtime for callers without an ambient one
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn process_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Handle to the ambient runtime, or the process runtime
pub fn runtime_handle() -> Handle {
    Handle::try_current().unwrap_or_else(|_| process_runtime().handle().clone())
}

/// Spawn a detached task with a name (for debugging)
///
/// The returned handle may be dropped; the task keeps running.
pub fn spawn_named<F>(name: &'static str, future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!(task = name, "Spawning tokio task");
    runtime_handle().spawn(async move {
        future.await;
        tracing::debug!(task = name, "Tokio task completed");
    })
}

/// Block on a future synchronously (startup only)
///
/// **Warning**: panics when called from inside an async context.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    process_runtime().block_on(future)
}
