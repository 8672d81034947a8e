pub mod catalog;
pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod handles;
pub mod options;
pub mod registry;

// 允许在本 crate 内通过 `mmg_component::...` 自引用（供 proc-macro 展开使用）
extern crate self as mmg_component;

pub mod prelude {
    pub use crate::component::{ComponentClass, ComponentInstance, InstanceId, LifecycleState};
    pub use crate::config::ComponentConfig;
    pub use crate::controller::{Controller, MethodTable};
    pub use crate::error::{ComponentError, Result};
    pub use crate::handles::Handles;
    pub use crate::options::Options;
    pub use crate::registry::InitializerRegistry;
}

pub use component_macros::*;

#[doc(hidden)]
pub mod __private {
    // 宏展开所需的第三方路径，调用方无需直接依赖
    pub use anyhow;
    pub use inventory;
    pub use serde_json;
}
