use mmg_component::prelude::*;

#[mmg_component::component(name = "ui-async")]
async fn define(_reg: &mut InitializerRegistry, _handles: &Handles) {}

fn main() {
    let _ = define;
}
