struct C;

#[mmg_component::controller]
impl C {
    pub fn run(&self, f: impl Fn() -> u8) -> u8 {
        f()
    }
}

fn main() {
    let _ = C.run(|| 1);
}
