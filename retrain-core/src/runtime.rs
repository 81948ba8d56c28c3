use crate::Result;
use tracing::{debug, warn};

/// Handle to the globally initialized runtime the trainer rides on.
pub trait RuntimeHandle {
    fn shutdown(&mut self) -> Result<()>;
}

/// Scopes the runtime to a run: teardown on every exit path, panic
/// unwind included.
pub struct RuntimeScope<R: RuntimeHandle> {
    handle: Option<R>,
}

impl<R: RuntimeHandle> RuntimeScope<R> {
    pub fn enter(handle: R) -> Self {
        RuntimeScope {
            handle: Some(handle),
        }
    }

    /// Explicit teardown for callers that want the error.
    pub fn shutdown(mut self) -> Result<()> {
        match self.handle.take() {
            Some(mut handle) => handle.shutdown(),
            None => Ok(()),
        }
    }
}

impl<R: RuntimeHandle> Drop for RuntimeScope<R> {
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            if let Err(err) = handle.shutdown() {
                warn!(error = %err, "runtime teardown failed");
            }
        }
    }
}

/// In-process runtime with nothing to tear down.
pub struct LocalRuntime;

impl RuntimeHandle for LocalRuntime {
    fn shutdown(&mut self) -> Result<()> {
        debug!("local runtime stopped");
        Ok(())
    }
}
