use mmg_component::prelude::*;

struct Holder<T> {
    value: T,
}

#[mmg_component::controller]
impl<T> Holder<T>
where
    T: Clone + serde::Serialize + Send + 'static,
{
    pub fn get(&self) -> T {
        self.value.clone()
    }
    pub fn touch(&mut self) -> mmg_component::prelude::Result<()> {
        Ok(())
    }
}

fn main() {
    let table = <Holder<u8> as Controller>::methods();
    assert_eq!(table.len(), 2);
    let _ = Holder { value: 1u8 }.get();
}
