struct C;

#[mmg_component::controller]
impl C {
    pub async fn wait(&self) {}
}

fn main() {
    let _ = C.wait();
}
