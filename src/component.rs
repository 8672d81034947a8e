use crate::{
    config::ComponentConfig,
    controller::{Bound, BoundController, Controller},
    error::{ComponentError, Result},
    handles::Handles,
    options::Options,
    registry::InitializerRegistry,
};
use serde_json::Value;
use std::{fmt, sync::Arc};
use uuid::Uuid;

const ANONYMOUS: &str = "<anonymous>";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(pub Uuid);
impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    NotStarted,
    Started,
}

/// 组件类型：定义回调执行一次后冻结的 initializer/finalizer 表，所有实例共享同一份。
#[derive(Clone)]
pub struct ComponentClass {
    name: Option<Arc<str>>,
    registry: Arc<InitializerRegistry>,
    cfg: Arc<ComponentConfig>,
}

impl ComponentClass {
    /// Defines a component without ambient handles.
    pub fn define<F>(definition: F) -> Self
    where
        F: FnOnce(&mut InitializerRegistry, &Handles),
    {
        Self::define_with(&Handles::new(), definition)
    }

    /// Runs `definition` exactly once, synchronously, with a fresh registry and the given handles.
    pub fn define_with<F>(handles: &Handles, definition: F) -> Self
    where
        F: FnOnce(&mut InitializerRegistry, &Handles),
    {
        let mut registry = InitializerRegistry::new();
        definition(&mut registry, handles);
        tracing::debug!(
            initializers = registry.initializer_count(),
            finalizers = registry.finalizer_count(),
            "component defined"
        );
        Self {
            name: None,
            registry: Arc::new(registry),
            cfg: Arc::new(ComponentConfig::default()),
        }
    }

    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_config(mut self, cfg: ComponentConfig) -> Self {
        self.cfg = Arc::new(cfg);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn registry(&self) -> &InitializerRegistry {
        &self.registry
    }

    pub fn new_instance(&self) -> ComponentInstance {
        self.instantiate(Options::default())
    }

    /// Creates an independent instance remembering `options` as its constructor options.
    pub fn instantiate(&self, options: Options) -> ComponentInstance {
        ComponentInstance {
            id: InstanceId(Uuid::new_v4()),
            class: self.clone(),
            ctor_options: options,
            state: LifecycleState::NotStarted,
            options: None,
            controller: None,
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }
}

impl fmt::Debug for ComponentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentClass")
            .field("name", &self.display_name())
            .field("registry", &self.registry)
            .finish()
    }
}

pub struct ComponentInstance {
    id: InstanceId,
    class: ComponentClass,
    ctor_options: Options,
    state: LifecycleState,
    // 当前周期的有效选项（合并结果），stop 后清空
    options: Option<Options>,
    controller: Option<Box<dyn BoundController>>,
}

impl ComponentInstance {
    pub fn id(&self) -> InstanceId {
        self.id
    }
    pub fn state(&self) -> LifecycleState {
        self.state
    }
    pub fn is_started(&self) -> bool {
        self.state == LifecycleState::Started
    }
    pub fn constructor_options(&self) -> &Options {
        &self.ctor_options
    }
    /// Effective (merged) options of the running cycle.
    pub fn options(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    pub fn start(&mut self) -> Result<()> {
        self.start_with(Options::default())
    }

    /// NotStarted -> Started, then every initializer in registration order.
    /// Already started: no-op (no merge, no initializer).
    pub fn start_with(&mut self, options: Options) -> Result<()> {
        if self.state == LifecycleState::Started {
            tracing::trace!(component = %self.class.display_name(), instance = %self.id, "start ignored: already started");
            return Ok(());
        }
        let effective = Options::merge(&self.ctor_options, &options);
        self.state = LifecycleState::Started;
        self.options = Some(effective.clone());
        tracing::debug!(component = %self.class.display_name(), instance = %self.id, options = effective.len(), "starting component");
        let registry = self.class.registry.clone();
        for (index, init) in registry.initializers().iter().enumerate() {
            tracing::debug!(component = %self.class.display_name(), instance = %self.id, index, "running initializer");
            if let Err(source) = init(&mut *self, &effective) {
                // 状态保持 Started：后续 stop 仍会运行 finalizer
                tracing::error!(component = %self.class.display_name(), instance = %self.id, index, error = %source, "initializer failed");
                return Err(ComponentError::Initializer { index, source });
            }
            // initializer 内部调用了 stop()：本周期已结束，剩余 initializer 不再运行
            if self.state != LifecycleState::Started {
                tracing::debug!(component = %self.class.display_name(), instance = %self.id, index, "stopped by initializer; skipping remaining initializers");
                break;
            }
        }
        Ok(())
    }

    /// Started -> NotStarted, then every finalizer in registration order.
    /// Not started: no-op.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == LifecycleState::NotStarted {
            tracing::trace!(component = %self.class.display_name(), instance = %self.id, "stop ignored: not started");
            return Ok(());
        }
        self.state = LifecycleState::NotStarted;
        let effective = self.options.clone().unwrap_or_default();
        tracing::debug!(component = %self.class.display_name(), instance = %self.id, "stopping component");
        let registry = self.class.registry.clone();
        let mut outcome = Ok(());
        for (index, fin) in registry.finalizers().iter().enumerate() {
            tracing::debug!(component = %self.class.display_name(), instance = %self.id, index, "running finalizer");
            if let Err(source) = fin(&mut *self, &effective) {
                tracing::error!(component = %self.class.display_name(), instance = %self.id, index, error = %source, "finalizer failed");
                outcome = Err(ComponentError::Finalizer { index, source });
            }
            // finalizer 内部重新 start()：新周期的选项与控制器归新周期所有
            if self.state != LifecycleState::NotStarted {
                tracing::debug!(component = %self.class.display_name(), instance = %self.id, index, "restarted by finalizer; skipping remaining finalizers");
                return outcome;
            }
            if outcome.is_err() {
                break;
            }
        }
        self.options = None;
        if self.class.cfg.release_controller_on_stop {
            self.clear_controller();
        }
        outcome
    }

    /// Binds `controller` and forwards its public (non-private-prefixed) methods.
    /// A later call replaces both the controller and its forwarded methods.
    pub fn set_controller<C: Controller>(&mut self, controller: C) {
        let bound = Bound::new(controller, &self.class.cfg);
        if let Some(prev) = &self.controller {
            tracing::warn!(component = %self.class.display_name(), instance = %self.id, previous = %prev.type_name(), next = %bound.type_name(), "controller replaced");
        }
        tracing::debug!(component = %self.class.display_name(), instance = %self.id, controller = %bound.type_name(), methods = ?bound.method_names(), "controller attached");
        self.controller = Some(Box::new(bound));
    }

    /// Drops the controller together with its forwarded methods.
    pub fn clear_controller(&mut self) -> bool {
        self.controller.take().is_some()
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    /// Invokes a forwarded method; it runs with the controller as receiver and its return value is passed through.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let bound = self
            .controller
            .as_mut()
            .ok_or(ComponentError::NoController)?;
        match bound.invoke(name, args) {
            None => Err(ComponentError::UnknownMethod(name.to_string())),
            Some(Ok(v)) => Ok(v),
            Some(Err(source)) => Err(ComponentError::Method {
                name: name.to_string(),
                source,
            }),
        }
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|c| c.responds_to(name))
    }

    /// Forwarded method names, sorted.
    pub fn forwarded_methods(&self) -> Vec<&'static str> {
        self.controller
            .as_ref()
            .map(|c| c.method_names())
            .unwrap_or_default()
    }

    pub fn controller<C: Controller>(&self) -> Option<&C> {
        self.controller.as_ref()?.as_any().downcast_ref::<C>()
    }

    pub fn controller_mut<C: Controller>(&mut self) -> Option<&mut C> {
        self.controller.as_mut()?.as_any_mut().downcast_mut::<C>()
    }
}

impl fmt::Debug for ComponentInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("component", &self.class.display_name())
            .field("id", &self.id)
            .field("state", &self.state)
            .field(
                "controller",
                &self.controller.as_ref().map(|c| c.type_name()),
            )
            .finish()
    }
}
