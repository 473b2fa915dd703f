//! Context layers and chain traversal

use crate::Failure;
use std::error::Error;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::sync::{Arc, OnceLock};

/// A context string wrapped around an existing failure
///
/// The cause is fixed at construction and shared, so cloning a chain of any
/// depth is a reference count bump. Rendering and dropping walk the chain in
/// a loop, so depth is bounded by memory rather than by the stack.
#[derive(Clone)]
pub struct ChainedError {
    context: String,
    cause: Arc<Failure>,
}

impl ChainedError {
    /// Wrap `cause` with `context`
    pub fn new(context: impl Into<String>, cause: Failure) -> Self {
        Self {
            context: context.into(),
            cause: Arc::new(cause),
        }
    }

    /// Context added by this layer
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The wrapped failure
    pub fn cause(&self) -> &Failure {
        &self.cause
    }
}

/// Shared terminal swapped in while a chain is being torn down
fn detached() -> Arc<Failure> {
    static DETACHED: OnceLock<Arc<Failure>> = OnceLock::new();
    Arc::clone(DETACHED.get_or_init(|| Arc::new(Failure::value(String::new()))))
}

impl Drop for ChainedError {
    fn drop(&mut self) {
        let mut next = mem::replace(&mut self.cause, detached());
        // Stops at a terminal or at a layer still shared with another chain.
        while let Ok(Failure::Chained(mut layer)) = Arc::try_unwrap(next) {
            next = mem::replace(&mut layer.cause, detached());
        }
    }
}

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.context)?;
        for layer in self.cause().chain() {
            f.write_str(": ")?;
            match layer {
                Failure::Chained(chained) => f.write_str(chained.context())?,
                terminal => write!(f, "{terminal}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut contexts = vec![self.context()];
        let mut root = self.cause();
        while let Failure::Chained(chained) = root {
            contexts.push(chained.context());
            root = chained.cause();
        }
        f.debug_struct("ChainedError")
            .field("contexts", &contexts)
            .field("root", root)
            .finish()
    }
}

impl Error for ChainedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// Iterator over the layers of a failure, outermost first
///
/// Yields the failure itself, then each cause in turn, ending with the
/// terminal node.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Failure>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: &'a Failure) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
