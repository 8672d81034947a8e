//! 组件选项：字符串键的 JSON 映射，构造期与启动期两份在 start 时浅合并。
use crate::error::{ComponentError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    inner: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: keys from `start` override keys from `ctor`. Neither input is touched.
    pub fn merge(ctor: &Options, start: &Options) -> Options {
        let mut inner = ctor.inner.clone();
        for (k, v) in &start.inner {
            inner.insert(k.clone(), v.clone());
        }
        Options { inner }
    }

    /// Builds options from any serializable struct or map. Non-object values are rejected.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let v = serde_json::to_value(value).map_err(|e| ComponentError::Options(e.to_string()))?;
        Options::try_from(v)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inner.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// 按键取值并反序列化；键不存在返回 Ok(None)
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.inner.get(key) {
            None => Ok(None),
            Some(v) => T::deserialize(v)
                .map(Some)
                .map_err(|e| ComponentError::Options(format!("{key}: {e}"))),
        }
    }

    /// Deserializes the whole mapping into a typed options struct.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&Value::Object(self.inner.clone()))
            .map_err(|e| ComponentError::Options(e.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }
    pub fn into_value(self) -> Value {
        Value::Object(self.inner)
    }
}

impl From<Map<String, Value>> for Options {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

impl TryFrom<Value> for Options {
    type Error = ComponentError;
    fn try_from(v: Value) -> Result<Self> {
        match v {
            Value::Object(inner) => Ok(Self { inner }),
            // null 视为空选项（对应“未传入”）
            Value::Null => Ok(Self::default()),
            other => Err(ComponentError::Options(format!(
                "expected an object, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
