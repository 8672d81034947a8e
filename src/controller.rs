//! 控制器能力表：控制器类型在定义时给出公开方法清单（通常由 `#[controller]` 生成），
//! 组件在 `set_controller` 时据此构建转发表，调用时以控制器自身为接收者执行。
use crate::config::ComponentConfig;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{any::Any, collections::HashMap};

/// Shim signature for a forwarded method: receiver is always the controller.
pub type MethodFn<C> = fn(&mut C, &[Value]) -> anyhow::Result<Value>;

pub trait Controller: Any + Send {
    /// The controller's public method table.
    fn methods() -> MethodTable<Self>
    where
        Self: Sized;
}

pub struct MethodTable<C> {
    entries: Vec<(&'static str, MethodFn<C>)>,
}

impl<C> MethodTable<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    pub fn method(mut self, name: &'static str, f: MethodFn<C>) -> Self {
        self.entries.push((name, f));
        self
    }
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for MethodTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

// ---- shim 辅助（供宏展开与手写 MethodTable 使用） ----

pub fn expect_arity(args: &[Value], n: usize, method: &str) -> anyhow::Result<()> {
    if args.len() != n {
        anyhow::bail!("{method} expects {n} argument(s), got {}", args.len());
    }
    Ok(())
}

pub fn arg<T: DeserializeOwned>(args: &[Value], index: usize, method: &str) -> anyhow::Result<T> {
    let v = args
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("{method}: missing argument #{index}"))?;
    T::deserialize(v).map_err(|e| anyhow::anyhow!("{method}: argument #{index}: {e}"))
}

pub fn ret<T: Serialize>(value: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

// ---- 类型擦除：实例只持有 Box<dyn BoundController> ----

pub(crate) trait BoundController: Send {
    fn invoke(&mut self, name: &str, args: &[Value]) -> Option<anyhow::Result<Value>>;
    fn responds_to(&self, name: &str) -> bool;
    fn method_names(&self) -> Vec<&'static str>;
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// 控制器 + 过滤后的转发表；二者生命周期一致
pub(crate) struct Bound<C: Controller> {
    controller: C,
    forwarded: HashMap<&'static str, MethodFn<C>>,
}

impl<C: Controller> Bound<C> {
    pub(crate) fn new(controller: C, cfg: &ComponentConfig) -> Self {
        let forwarded = C::methods()
            .entries
            .into_iter()
            .filter(|(name, _)| !cfg.is_private(name))
            .collect();
        Self {
            controller,
            forwarded,
        }
    }
}

impl<C: Controller> BoundController for Bound<C> {
    fn invoke(&mut self, name: &str, args: &[Value]) -> Option<anyhow::Result<Value>> {
        let f = *self.forwarded.get(name)?;
        Some(f(&mut self.controller, args))
    }
    fn responds_to(&self, name: &str) -> bool {
        self.forwarded.contains_key(name)
    }
    fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.forwarded.keys().copied().collect();
        names.sort_unstable();
        names
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<C>()
    }
    fn as_any(&self) -> &dyn Any {
        &self.controller
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.controller
    }
}
