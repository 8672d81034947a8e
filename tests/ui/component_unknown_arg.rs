#[mmg_component::component(label = "x")]
fn define() {}

fn main() {}
