//! operation slots and the stubs that fill them

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, StreamExt};

use crate::{Error, Reporter};

type Implementation<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;
type Placeholder<R> = Arc<dyn Fn() -> R + Send + Sync>;

/// one swappable operation of a capability record
///
/// either a real implementation or an unimplemented stub. calling a stub
/// reports exactly one failure at the caller's location and then hands back
/// the stub's placeholder.
pub struct Slot<A, R> {
    inner: Inner<A, R>,
}

enum Inner<A, R> {
    Implemented(Implementation<A, R>),
    Unimplemented {
        operation: &'static str,
        reporter: Reporter,
        placeholder: Placeholder<R>,
    },
}

impl<A, R> Slot<A, R> {
    pub fn new(f: impl Fn(A) -> R + Send + Sync + 'static) -> Self {
        Self {
            inner: Inner::Implemented(Arc::new(f)),
        }
    }

    /// stub reporting `operation` and producing a fresh placeholder per call
    pub fn unimplemented(
        operation: &'static str,
        reporter: &Reporter,
        placeholder: impl Fn() -> R + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Inner::Unimplemented {
                operation,
                reporter: reporter.clone(),
                placeholder: Arc::new(placeholder),
            },
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self.inner, Inner::Implemented(_))
    }

    /// label of a stub, `None` once overridden
    pub fn operation(&self) -> Option<&'static str> {
        match &self.inner {
            Inner::Implemented(_) => None,
            Inner::Unimplemented { operation, .. } => Some(*operation),
        }
    }

    #[track_caller]
    pub fn call(&self, args: A) -> R {
        match &self.inner {
            Inner::Implemented(f) => f(args),
            Inner::Unimplemented {
                operation,
                reporter,
                placeholder,
            } => {
                reporter.report(Error::unconfigured(*operation, Location::caller()));
                placeholder()
            }
        }
    }
}

impl<A, R> Clone for Slot<A, R> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner::Implemented(f) => Inner::Implemented(f.clone()),
            Inner::Unimplemented {
                operation,
                reporter,
                placeholder,
            } => Inner::Unimplemented {
                operation: *operation,
                reporter: reporter.clone(),
                placeholder: placeholder.clone(),
            },
        };
        Self { inner }
    }
}

impl<A, R> fmt::Debug for Slot<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Implemented(_) => f.write_str("Slot(implemented)"),
            Inner::Unimplemented { operation, .. } => {
                write!(f, "Slot(unimplemented: {})", operation)
            }
        }
    }
}

/// query stub returning a clone of `placeholder`
pub fn query<A, T>(operation: &'static str, reporter: &Reporter, placeholder: T) -> Slot<A, T>
where
    T: Clone + Send + Sync + 'static,
{
    Slot::unimplemented(operation, reporter, move || placeholder.clone())
}

/// command stub: the returned effect is already complete
pub fn command<A>(operation: &'static str, reporter: &Reporter) -> Slot<A, BoxFuture<'static, ()>> {
    Slot::unimplemented(operation, reporter, || future::ready(()).boxed())
}

/// stub for a command whose effect can fail; resolves `Ok(())`
pub fn fallible_command<A, E>(
    operation: &'static str,
    reporter: &Reporter,
) -> Slot<A, BoxFuture<'static, Result<(), E>>>
where
    E: Send + 'static,
{
    Slot::unimplemented(operation, reporter, || future::ready(Ok(())).boxed())
}

/// event stream stub: never yields, never completes
pub fn stream<A, T>(operation: &'static str, reporter: &Reporter) -> Slot<A, BoxStream<'static, T>>
where
    T: Send + 'static,
{
    Slot::unimplemented(operation, reporter, || stream::pending().boxed())
}
