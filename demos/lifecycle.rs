//! 单文件示例：定义组件 -> 绑定控制器 -> 转发调用 -> 启停循环。

use mmg_component::prelude::*;
use serde_json::json;

// ---- 控制器：公开方法被转发，下划线前缀方法保持私有 ----
#[derive(Default)]
struct Inbox {
    messages: Vec<String>,
}

#[mmg_component::controller]
impl Inbox {
    pub fn push(&mut self, msg: String) -> usize {
        self.messages.push(msg);
        self.messages.len()
    }
    pub fn latest(&self) -> Option<String> {
        self.messages.last().cloned()
    }
    pub fn _purge(&mut self) {
        self.messages.clear();
    }
}

// ---- 宿主环境句柄 ----
struct AppName(&'static str);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let handles = Handles::new().with(AppName("demo"));
    let class = ComponentClass::define_with(&handles, |reg, h| {
        let app = h.get::<AppName>().map(|a| a.0).unwrap_or("unknown");
        reg.add_initializer(move |comp, opts| {
            tracing::info!(app, greeting = ?opts.get("greeting"), "inbox starting");
            comp.set_controller(Inbox::default());
            Ok(())
        });
        reg.add_finalizer(|comp, _| {
            let latest = comp.call("latest", &[])?;
            tracing::info!(%latest, "inbox stopping");
            Ok(())
        });
    })
    .named("inbox");

    let mut inbox = class.instantiate(Options::new().with("greeting", "hi"));
    inbox.start()?;
    inbox.call("push", &[json!("first")])?;
    let n = inbox.call("push", &[json!("second")])?;
    tracing::info!(%n, methods = ?inbox.forwarded_methods(), "pushed");
    if let Err(e) = inbox.call("_purge", &[]) {
        tracing::warn!(error = %e, "private method is not reachable");
    }
    inbox.stop()?;
    // 第二次 stop 为 no-op
    inbox.stop()?;
    Ok(())
}
