//! One-time admin bootstrap codes.
//!
//! When no admin exists at startup a code is generated and a login URL containing it is
//! logged. Logging in through that URL within [`ADMIN_CODE_TTL`] grants admin. The code
//! lives only in memory and is consumed by the first successful validation.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::{sync::RwLock, time::Instant};

/// Lifetime of a generated code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

struct AdminCode {
    code: String,
    expires_at: Instant,
}

/// Shared holder of the current admin code, cloned into the application state.
#[derive(Clone, Default)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a random 32 character code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The code to embed in the bootstrap login URL
    pub async fn generate(&self) -> String {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        *self.code.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + ADMIN_CODE_TTL,
        });

        code
    }

    /// Checks `input` against the current code and consumes it on success.
    ///
    /// An expired code is discarded on the first check after expiry. A wrong guess
    /// leaves a live code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it can not be used again
    /// - `false` - No code, wrong code or expired code
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut guard = self.code.write().await;

        let Some(stored) = guard.as_ref() else {
            return false;
        };

        if Instant::now() >= stored.expires_at {
            *guard = None;
            return false;
        }

        if stored.code == input {
            *guard = None;
            return true;
        }

        false
    }

    /// Whether a non-expired code is currently stored.
    pub async fn has_valid_code(&self) -> bool {
        self.code
            .read()
            .await
            .as_ref()
            .is_some_and(|stored| Instant::now() < stored.expires_at)
    }
}
