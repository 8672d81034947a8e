struct C;

#[mmg_component::controller]
impl C {
    pub fn consume(self) {}
}

fn main() {
    C.consume();
}
