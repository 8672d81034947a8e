struct C;

#[mmg_component::controller]
impl C {
    pub fn echo<T: Clone>(&self, v: T) -> T {
        v
    }
}

fn main() {
    let _ = C.echo(1u8);
}
