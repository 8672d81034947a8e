use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};

// 环境句柄仓库：定义回调前由宿主装配，定义期间只读（按类型注入，无全局查找）
#[derive(Clone, Default)]
pub struct Handles {
    inner: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Handles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handle keyed by its type. A second value of the same type replaces the first.
    pub fn with<T: 'static + Send + Sync>(mut self, handle: T) -> Self {
        self.insert(handle);
        self
    }

    pub fn insert<T: 'static + Send + Sync>(&mut self, handle: T) {
        let tid = TypeId::of::<T>();
        if self.inner.contains_key(&tid) {
            tracing::warn!(handle_type = %std::any::type_name::<T>(), "handle for this type provided multiple times; overriding");
        }
        self.inner
            .insert(tid, Arc::new(handle) as Arc<dyn Any + Send + Sync>);
    }

    pub fn get<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|v| v.clone().downcast::<T>().ok())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.inner.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Handles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handles({} entries)", self.inner.len())
    }
}
