use mmg_component::prelude::*;
use serde_json::{json, Value};

#[derive(Default)]
struct Greeter {
    greeted: Vec<String>,
    secret_calls: usize,
}

#[mmg_component::controller]
impl Greeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn greet(&mut self, name: &str) -> String {
        self.greeted.push(name.to_string());
        format!("hello, {name}")
    }

    pub fn count(&self) -> usize {
        self.greeted.len()
    }

    pub fn reset(&mut self) {
        self.greeted.clear();
    }

    pub fn checked(&self, n: i64) -> anyhow::Result<i64> {
        if n < 0 {
            anyhow::bail!("negative input");
        }
        Ok(n * 2)
    }

    pub fn _secret(&mut self) {
        self.secret_calls += 1;
    }

    fn internal(&self) -> usize {
        self.greeted.len()
    }
}

fn greeter_component() -> ComponentClass {
    ComponentClass::define(|reg, _| {
        reg.add_initializer(|comp, _| {
            comp.set_controller(Greeter::new());
            Ok(())
        });
    })
}

#[test]
fn public_methods_are_forwarded_and_private_ones_are_not() {
    let mut comp = greeter_component().new_instance();
    comp.start().unwrap();
    assert!(comp.responds_to("greet"));
    assert!(comp.responds_to("count"));
    assert!(!comp.responds_to("_secret"));
    assert!(!comp.responds_to("internal"));
    assert!(!comp.responds_to("new"));
    assert_eq!(
        comp.forwarded_methods(),
        vec!["checked", "count", "greet", "reset"]
    );
    let err = comp.call("_secret", &[]).unwrap_err();
    assert!(matches!(err, ComponentError::UnknownMethod(ref m) if m == "_secret"));
    assert_eq!(comp.controller::<Greeter>().unwrap().secret_calls, 0);
}

#[test]
fn forwarded_calls_run_against_the_controller() {
    let mut comp = greeter_component().new_instance();
    comp.start().unwrap();
    let out = comp.call("greet", &[json!("ada")]).unwrap();
    assert_eq!(out, json!("hello, ada"));
    comp.call("greet", &[json!("grace")]).unwrap();
    // 方法体内的 self 指向控制器自身
    let greeter = comp.controller::<Greeter>().expect("controller bound");
    assert_eq!(greeter.greeted, vec!["ada", "grace"]);
    assert_eq!(greeter.internal(), 2);
    assert_eq!(comp.call("count", &[]).unwrap(), json!(2));
    assert_eq!(comp.call("reset", &[]).unwrap(), Value::Null);
    assert_eq!(comp.call("count", &[]).unwrap(), json!(0));
}

#[test]
fn result_returning_methods_surface_errors() {
    let mut comp = greeter_component().new_instance();
    comp.start().unwrap();
    assert_eq!(comp.call("checked", &[json!(21)]).unwrap(), json!(42));
    let err = comp.call("checked", &[json!(-1)]).unwrap_err();
    assert!(matches!(err, ComponentError::Method { ref name, .. } if name == "checked"));
    assert!(err.to_string().contains("negative input"));
}

#[test]
fn argument_mismatches_are_method_errors() {
    let mut comp = greeter_component().new_instance();
    comp.start().unwrap();
    assert!(matches!(
        comp.call("greet", &[]),
        Err(ComponentError::Method { .. })
    ));
    assert!(matches!(
        comp.call("greet", &[json!(1)]),
        Err(ComponentError::Method { .. })
    ));
}

#[test]
fn calls_without_controller_fail() {
    let mut comp = greeter_component().new_instance();
    assert!(!comp.has_controller());
    assert!(matches!(
        comp.call("greet", &[json!("x")]),
        Err(ComponentError::NoController)
    ));
    assert!(comp.forwarded_methods().is_empty());
}

#[test]
fn controller_is_released_on_stop_and_rebound_on_restart() {
    let mut comp = greeter_component().new_instance();
    comp.start().unwrap();
    comp.call("greet", &[json!("ada")]).unwrap();
    comp.stop().unwrap();
    assert!(!comp.has_controller());
    assert!(!comp.responds_to("greet"));

    comp.start().unwrap();
    // 新周期绑定的是新的控制器
    assert_eq!(comp.call("count", &[]).unwrap(), json!(0));
}

#[test]
fn finalizers_can_still_reach_the_controller() {
    let class = ComponentClass::define(|reg, _| {
        reg.add_initializer(|comp, _| {
            comp.set_controller(Greeter::new());
            Ok(())
        });
        reg.add_finalizer(|comp, _| {
            comp.call("greet", &[json!("bye")])?;
            let n = comp.controller::<Greeter>().map(|g| g.greeted.len());
            anyhow::ensure!(n == Some(1), "controller missing during stop");
            Ok(())
        });
    });
    let mut comp = class.new_instance();
    comp.start().unwrap();
    comp.stop().unwrap();
    assert!(!comp.has_controller());
}

#[test]
fn controller_can_be_kept_across_stop() {
    let class = greeter_component().with_config(ComponentConfig {
        release_controller_on_stop: false,
        ..Default::default()
    });
    let mut comp = class.new_instance();
    comp.start().unwrap();
    comp.call("greet", &[json!("ada")]).unwrap();
    comp.stop().unwrap();
    assert!(comp.has_controller());
    assert_eq!(comp.call("count", &[]).unwrap(), json!(1));
    // 重启时 initializer 绑定新控制器，旧的被替换
    comp.start().unwrap();
    assert_eq!(comp.call("count", &[]).unwrap(), json!(0));
}

#[test]
fn set_controller_twice_replaces_the_first() {
    let mut comp = ComponentClass::define(|_, _| {}).new_instance();
    let mut first = Greeter::new();
    first.greeted.push("old".into());
    comp.set_controller(first);
    assert_eq!(comp.call("count", &[]).unwrap(), json!(1));
    comp.set_controller(Greeter::new());
    assert_eq!(comp.call("count", &[]).unwrap(), json!(0));
    assert!(comp.clear_controller());
    assert!(!comp.clear_controller());
}

// 手写能力表（不经宏）
struct Counter {
    n: u64,
}
impl Controller for Counter {
    fn methods() -> MethodTable<Self> {
        MethodTable::<Self>::new()
            .method("add", |c, args| {
                mmg_component::controller::expect_arity(args, 1, "add")?;
                let by: u64 = mmg_component::controller::arg(args, 0, "add")?;
                c.n += by;
                mmg_component::controller::ret(c.n)
            })
            .method("hidden_peek", |c, _| mmg_component::controller::ret(c.n))
    }
}

#[test]
fn custom_private_prefix_filters_manual_tables() {
    let class = ComponentClass::define(|reg, _| {
        reg.add_initializer(|comp, opts| {
            let start: u64 = opts.get_as("start")?.unwrap_or(0);
            comp.set_controller(Counter { n: start });
            Ok(())
        });
    })
    .with_config(ComponentConfig {
        private_prefix: "hidden_".to_string(),
        ..Default::default()
    });
    let mut comp = class.instantiate(Options::new().with("start", 5));
    comp.start().unwrap();
    assert_eq!(comp.forwarded_methods(), vec!["add"]);
    assert_eq!(comp.call("add", &[json!(3)]).unwrap(), json!(8));
    assert!(matches!(
        comp.call("hidden_peek", &[]),
        Err(ComponentError::UnknownMethod(_))
    ));
    comp.controller_mut::<Counter>().unwrap().n = 100;
    assert_eq!(comp.call("add", &[json!(1)]).unwrap(), json!(101));
    assert!(comp.controller::<Greeter>().is_none());
}

#[derive(Default)]
struct Keyword;

#[mmg_component::controller]
impl Keyword {
    pub fn r#type(&self) -> &'static str {
        "keyword"
    }
}

#[test]
fn raw_identifier_methods_forward_under_their_plain_name() {
    let class = ComponentClass::define(|reg, _| {
        reg.add_initializer(|comp, _| {
            comp.set_controller(Keyword);
            Ok(())
        });
    });
    let mut comp = class.new_instance();
    comp.start().unwrap();
    assert_eq!(comp.forwarded_methods(), vec!["type"]);
    assert!(comp.responds_to("type"));
    assert!(!comp.responds_to("r#type"));
    assert_eq!(comp.call("type", &[]).unwrap(), json!("keyword"));
}
