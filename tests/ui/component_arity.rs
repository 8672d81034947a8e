use mmg_component::prelude::*;

#[mmg_component::component(name = "ui-arity")]
fn define(_reg: &mut InitializerRegistry) {}

fn main() {
    let _ = define;
}
