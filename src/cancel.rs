//! Cooperative cancellation for search call chains.
//!
//! The client checks the token at each stage boundary (resolve, connect,
//! search). Interrupting the blocking engine call itself is outside this
//! layer's control.

use crate::error::{Result, SiftError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Fails with `Cancelled` once the token has been tripped.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SiftError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Trip `token` when the process receives SIGINT.
pub fn cancel_on_interrupt(token: &CancelToken) -> Result<()> {
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&token.flag))?;
    Ok(())
}
