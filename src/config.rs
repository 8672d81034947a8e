#[derive(Debug, Clone)]
pub struct ComponentConfig {
    /// 以该前缀开头的控制器方法永不转发
    pub private_prefix: String,
    /// stop() 跑完 finalizer 后是否释放控制器与转发表
    pub release_controller_on_stop: bool,
}

pub const DEFAULT_PRIVATE_PREFIX: &str = "_";

impl ComponentConfig {
    pub(crate) fn is_private(&self, method: &str) -> bool {
        !self.private_prefix.is_empty() && method.starts_with(self.private_prefix.as_str())
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            private_prefix: DEFAULT_PRIVATE_PREFIX.to_string(),
            release_controller_on_stop: true,
        }
    }
}
// 配置仅在 ComponentClass 定义时提供；实例运行期只读。
