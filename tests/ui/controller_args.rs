struct C;

#[mmg_component::controller(strict)]
impl C {
    pub fn get(&self) -> u8 {
        1
    }
}

fn main() {
    let _ = C.get();
}
