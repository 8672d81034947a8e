use mmg_component::prelude::*;

#[derive(Default)]
struct C {
    n: u32,
}

#[mmg_component::controller]
impl C {
    pub fn bump(&mut self, by: u32) -> u32 {
        self.n += by;
        self.n
    }
    pub fn tags(&self, items: &[String], sep: &str) -> String {
        items.join(sep)
    }
    pub fn maybe(&self) -> Option<u32> {
        None
    }
    pub fn _hidden(&self) {}
}

fn main() {
    let names: Vec<_> = <C as Controller>::methods().names().collect();
    assert_eq!(names, vec!["bump", "tags", "maybe", "_hidden"]);
}
