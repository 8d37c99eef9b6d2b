use web_sys::{AbortController, AbortSignal};

use crate::error::FetchError;

/// Cancellation tied to a component's lifetime.
///
/// Every request started with [`LifetimeToken::signal`] is aborted when the
/// token is cancelled or dropped.
pub struct LifetimeToken {
    controller: AbortController,
}

impl LifetimeToken {
    pub fn new() -> Result<Self, FetchError> {
        AbortController::new()
            .map(|controller| Self { controller })
            .map_err(|err| FetchError::Setup(format!("{:?}", err)))
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    pub fn is_cancelled(&self) -> bool {
        self.controller.signal().aborted()
    }

    pub fn cancel(&self) {
        if !self.is_cancelled() {
            log::debug!("aborting in-flight requests");
            self.controller.abort();
        }
    }
}

impl Drop for LifetimeToken {
    fn drop(&mut self) {
        self.cancel();
    }
}
