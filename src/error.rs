//! 框架统一错误类型：最小化枚举，回调错误以 anyhow 包装后原样上抛。
use std::{error::Error as StdError, fmt};

#[derive(Debug)]
pub enum ComponentError {
    NoController,             // 转发调用时尚未绑定控制器
    UnknownMethod(String),    // 方法未被转发（含私有前缀方法）
    UnknownComponent(String), // catalog 中不存在该名称
    Initializer {
        index: usize,
        source: anyhow::Error,
    },
    Finalizer {
        index: usize,
        source: anyhow::Error,
    },
    Method {
        name: String,
        source: anyhow::Error,
    },
    Options(String), // 选项构造/反序列化失败
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::NoController => write!(f, "no controller attached to component"),
            ComponentError::UnknownMethod(name) => {
                write!(f, "method not forwarded by component: {name}")
            }
            ComponentError::UnknownComponent(name) => write!(f, "unknown component: {name}"),
            ComponentError::Initializer { index, source } => {
                write!(f, "initializer #{index} failed: {source}")
            }
            ComponentError::Finalizer { index, source } => {
                write!(f, "finalizer #{index} failed: {source}")
            }
            ComponentError::Method { name, source } => {
                write!(f, "controller method {name} failed: {source}")
            }
            ComponentError::Options(msg) => write!(f, "invalid options: {msg}"),
        }
    }
}

impl StdError for ComponentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ComponentError::Initializer { source, .. }
            | ComponentError::Finalizer { source, .. }
            | ComponentError::Method { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, ComponentError>;
