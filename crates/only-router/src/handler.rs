//! Route and fallback handlers
//!
//! Handlers are type-erased async functions. Synchronous handlers are wrapped
//! in an already-settled future so the navigator treats both alike.

use futures_util::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::error::NavigationError;
use crate::path::RoutePath;

pub type HandlerFuture = BoxFuture<'static, anyhow::Result<()>>;

type RouteFn = dyn Fn(RoutePath) -> HandlerFuture + Send + Sync;
type FallbackFn = dyn Fn(RoutePath, NavigationError) -> HandlerFuture + Send + Sync;

/// Handler invoked with the part of the path that remains below its node
#[derive(Clone)]
pub struct Handler {
    inner: Arc<RouteFn>,
}

impl Handler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(RoutePath) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move |path| f(path).boxed()),
        }
    }

    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(RoutePath) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(move |path| future::ready(f(path)).boxed()),
        }
    }

    pub fn call(&self, remaining: RoutePath) -> HandlerFuture {
        (self.inner)(remaining)
    }

    /// Whether both values wrap the same handler function
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

/// Handler invoked with the navigated path and the error that ended it
#[derive(Clone)]
pub struct FallbackHandler {
    inner: Arc<FallbackFn>,
}

impl FallbackHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(RoutePath, NavigationError) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move |path, err| f(path, err).boxed()),
        }
    }

    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(RoutePath, NavigationError) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(move |path, err| future::ready(f(path, err)).boxed()),
        }
    }

    /// Fallback that swallows every error
    pub fn ignore() -> Self {
        Self::sync(|path, err| {
            tracing::warn!(path = %path, error = %err, "Navigation failed, no fallback set");
            Ok(())
        })
    }

    pub fn call(&self, path: RoutePath, err: NavigationError) -> HandlerFuture {
        (self.inner)(path, err)
    }

    pub fn ptr_eq(&self, other: &FallbackHandler) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FallbackHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackHandler")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_sync_handler_settles() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let handler = Handler::sync(move |path| {
            log.lock().unwrap().push(path.to_string());
            Ok(())
        });

        handler.call(RoutePath::parse("a/b")).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["a/b".to_string()]);
    }

    #[tokio::test]
    async fn test_async_handler_error() {
        let handler = Handler::new(|_path| async { Err(anyhow::anyhow!("render failed")) });
        let err = handler.call(RoutePath::root()).await.unwrap_err();
        assert_eq!(err.to_string(), "render failed");
    }

    #[test]
    fn test_ptr_eq() {
        let a = Handler::sync(|_| Ok(()));
        let b = Handler::sync(|_| Ok(()));
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }
}
