//! Dependency context - typed capability registry.
//!
//! A [`DependencyContext`] maps a capability type (usually a port trait
//! object such as `dyn ProductRepository`) to the implementation serving it.
//! Use cases and adapters pull what they need through [`FromContext`] while
//! the router is being built, so a missing binding stops startup instead of
//! failing individual requests.
//!
//! Two binding modes exist:
//!
//! - **eager** - [`DependencyContext::provide`] binds an existing value.
//! - **scoped** - [`DependencyContext::provide_scoped`] runs an acquisition
//!   future once and registers the matching release on a [`ResourceScope`].
//!   The release runs when the scope ends, on success, error, or panic.
//!
//! # Example
//!
//! ```ignore
//! ResourceScope::run(|scope| async move {
//!     let context = DependencyContext::new()
//!         .provide::<dyn Logger>(Arc::new(TracingLogger))
//!         .provide_scoped(&scope, connect(), |pool: Arc<PgPool>| async move {
//!             pool.close().await
//!         })
//!         .await?;
//!
//!     let handler = PlaceOrderHandler::from_context(&context)?;
//!     // ...
//! })
//! .await
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;

/// Wiring errors raised while assembling use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("No implementation bound for capability `{capability}`")]
    Missing { capability: &'static str },
}

/// Types that can be assembled from a dependency context.
pub trait FromContext: Sized {
    /// # Errors
    ///
    /// - `ContextError::Missing` if a required capability is not bound
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError>;
}

#[derive(Clone)]
struct Binding {
    capability: &'static str,
    // Always holds an `Arc<T>` for the capability `T` it is keyed under.
    value: Arc<dyn Any + Send + Sync>,
}

/// Registry of capability bindings.
#[derive(Clone, Default)]
pub struct DependencyContext {
    bindings: HashMap<TypeId, Binding>,
}

impl DependencyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` as the implementation of capability `T`.
    ///
    /// A later binding for the same capability replaces the earlier one.
    pub fn provide<T>(mut self, value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.bindings.insert(
            TypeId::of::<T>(),
            Binding {
                capability: type_name::<T>(),
                value: Arc::new(value),
            },
        );
        self
    }

    /// Acquires capability `T` inside `scope` and binds it.
    ///
    /// `release` is registered on the scope only if acquisition succeeds.
    ///
    /// # Errors
    ///
    /// Returns the acquisition error unchanged.
    pub async fn provide_scoped<T, E, A, R, RF>(
        self,
        scope: &ResourceScope,
        acquire: A,
        release: R,
    ) -> Result<Self, E>
    where
        T: ?Sized + Send + Sync + 'static,
        A: Future<Output = Result<Arc<T>, E>>,
        R: FnOnce(Arc<T>) -> RF + Send + 'static,
        RF: Future<Output = ()> + Send + 'static,
    {
        let resource = scope.acquire(type_name::<T>(), acquire, release).await?;
        Ok(self.provide(resource))
    }

    /// Combines two contexts. Bindings in `other` win on conflict.
    pub fn merge(mut self, other: DependencyContext) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    /// Resolves capability `T`.
    ///
    /// # Errors
    ///
    /// - `ContextError::Missing` if nothing is bound for `T`
    pub fn resolve<T>(&self) -> Result<Arc<T>, ContextError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.get::<T>().ok_or(ContextError::Missing {
            capability: type_name::<T>(),
        })
    }

    /// Resolves capability `T` if bound.
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.bindings
            .get(&TypeId::of::<T>())
            .and_then(|binding| (*binding.value).downcast_ref::<Arc<T>>())
            .cloned()
    }

    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    /// Names of all bound capabilities, sorted.
    pub fn capabilities(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.bindings.values().map(|b| b.capability).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for DependencyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyContext")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

type Release = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send>;

/// Owner of scoped resources.
///
/// Releases run in reverse acquisition order when the scope started by
/// [`ResourceScope::run`] ends.
#[derive(Clone, Default)]
pub struct ResourceScope {
    releases: Arc<Mutex<Vec<(&'static str, Release)>>>,
}

impl ResourceScope {
    /// Runs `body` with a fresh scope and releases everything it acquired.
    ///
    /// Releases run whether `body` returns `Ok`, returns `Err`, or panics;
    /// a panic is resumed after cleanup.
    pub async fn run<F, Fut, T, E>(body: F) -> Result<T, E>
    where
        F: FnOnce(ResourceScope) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let scope = ResourceScope::default();
        let outcome = AssertUnwindSafe(body(scope.clone())).catch_unwind().await;
        scope.release_all().await;

        match outcome {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Awaits `acquire` and registers `release` for the acquired resource.
    ///
    /// # Errors
    ///
    /// Returns the acquisition error; nothing is registered in that case.
    pub async fn acquire<R, E, A, Rel, RelFut>(
        &self,
        name: &'static str,
        acquire: A,
        release: Rel,
    ) -> Result<R, E>
    where
        R: Clone + Send + 'static,
        A: Future<Output = Result<R, E>>,
        Rel: FnOnce(R) -> RelFut + Send + 'static,
        RelFut: Future<Output = ()> + Send + 'static,
    {
        let resource = acquire.await?;
        tracing::info!(resource = name, "Acquired scoped resource");

        let handle = resource.clone();
        self.lock()
            .push((name, Box::new(move || release(handle).boxed())));

        Ok(resource)
    }

    /// Number of resources currently held.
    pub fn held(&self) -> usize {
        self.lock().len()
    }

    async fn release_all(&self) {
        let releases = std::mem::take(&mut *self.lock());
        for (name, release) in releases.into_iter().rev() {
            release().await;
            tracing::info!(resource = name, "Released scoped resource");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(&'static str, Release)>> {
        self.releases.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
