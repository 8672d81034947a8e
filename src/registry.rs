use crate::{component::ComponentInstance, options::Options};
use smallvec::SmallVec;
use std::fmt;

/// Callback run by `start` (initializer) or `stop` (finalizer).
/// The instance argument is the component being started/stopped; options are the effective options of the cycle.
pub type Hook =
    Box<dyn Fn(&mut ComponentInstance, &Options) -> anyhow::Result<()> + Send + Sync + 'static>;

/// Ordered initializer/finalizer lists collected while a component is being defined.
/// Append-only; registration order is replay order.
#[derive(Default)]
pub struct InitializerRegistry {
    initializers: SmallVec<[Hook; 4]>,
    finalizers: SmallVec<[Hook; 4]>,
}

impl InitializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_initializer<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut ComponentInstance, &Options) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.initializers.push(Box::new(f));
        self
    }

    pub fn add_finalizer<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut ComponentInstance, &Options) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.finalizers.push(Box::new(f));
        self
    }

    pub fn initializer_count(&self) -> usize {
        self.initializers.len()
    }
    pub fn finalizer_count(&self) -> usize {
        self.finalizers.len()
    }

    pub(crate) fn initializers(&self) -> &[Hook] {
        &self.initializers
    }
    pub(crate) fn finalizers(&self) -> &[Hook] {
        &self.finalizers
    }
}

impl fmt::Debug for InitializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitializerRegistry")
            .field("initializers", &self.initializers.len())
            .field("finalizers", &self.finalizers.len())
            .finish()
    }
}
