mod cache;
mod extract;
mod identity;

use std::sync::Arc;
use std::time::Duration;

pub use extract::MaybeUser;
pub use identity::{AuthenticatedUser, HttpIdentity, IdentityVerifier};

#[cfg(test)]
pub use identity::testing::StaticIdentity;

use cache::SessionCache;

/// Bearer-token resolution: identity-service verification behind the
/// single-flight session cache. Constructed once and shared through state.
pub struct Authenticator {
    verifier: Arc<dyn IdentityVerifier>,
    cache: SessionCache,
}

impl Authenticator {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, cache_ttl: Duration) -> Self {
        Self {
            verifier,
            cache: SessionCache::new(cache_ttl),
        }
    }

    pub async fn resolve(&self, token: &str) -> Option<AuthenticatedUser> {
        let verifier = Arc::clone(&self.verifier);
        let owned = token.to_string();
        self.cache
            .resolve(token, move || async move { verifier.verify_token(&owned).await })
            .await
    }
}
