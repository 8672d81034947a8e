struct C;

#[mmg_component::controller]
impl C {
    pub fn pair(&self, (a, b): (u8, u8)) -> u8 {
        a + b
    }
}

fn main() {
    let _ = C.pair((1, 2));
}
