struct C;

#[mmg_component::controller]
impl Default for C {
    fn default() -> Self {
        C
    }
}

fn main() {
    let _ = C::default();
}
