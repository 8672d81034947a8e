use mmg_component::prelude::*;

#[mmg_component::component(name = "ui-min")]
fn define(reg: &mut InitializerRegistry, _handles: &Handles) {
    reg.add_initializer(|_, _| Ok(()));
}

fn main() {
    assert!(mmg_component::catalog::contains("ui-min"));
}
