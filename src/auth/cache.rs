//! Session cache for token verification results.
//!
//! Memoized-async-value pattern: each token maps to either a ready entry
//! `{value, expiry}` or a shared in-flight verification future. Concurrent
//! callers for the same token join the single outstanding verification
//! instead of issuing redundant ones. Population is not synchronized
//! against concurrent invalidation beyond that; last writer wins.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use futures_util::future::{BoxFuture, FutureExt, Shared};

use super::identity::AuthenticatedUser;

type VerifyFuture = Shared<BoxFuture<'static, Option<AuthenticatedUser>>>;

struct ReadyEntry {
    user: Option<AuthenticatedUser>,
    expires_at: Instant,
}

#[derive(Default)]
struct Inner {
    ready: HashMap<String, ReadyEntry>,
    in_flight: HashMap<String, VerifyFuture>,
}

pub struct SessionCache {
    ttl: Duration,
    inner: Mutex<Inner>,
}

impl SessionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Resolve a token to a user, calling `verify` at most once per token
    /// per validity window. Negative results (unverifiable tokens) are
    /// cached too, matching the upstream treatment of a missing session.
    pub async fn resolve<F, Fut>(&self, token: &str, verify: F) -> Option<AuthenticatedUser>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<AuthenticatedUser>> + Send + 'static,
    {
        let future = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(entry) = inner.ready.get(token) {
                if entry.expires_at > Instant::now() {
                    return entry.user.clone();
                }
            }
            match inner.in_flight.get(token) {
                Some(existing) => existing.clone(),
                None => {
                    let future = verify().boxed().shared();
                    inner.in_flight.insert(token.to_string(), future.clone());
                    future
                }
            }
        };

        let user = future.await;

        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.in_flight.remove(token);
        let now = Instant::now();
        inner.ready.retain(|_, entry| entry.expires_at > now);
        inner.ready.insert(
            token.to_string(),
            ReadyEntry {
                user: user.clone(),
                expires_at: now + self.ttl,
            },
        );
        user
    }
}
