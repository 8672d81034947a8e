use crate::{
    component::ComponentClass,
    error::{ComponentError, Result},
    handles::Handles,
    registry::InitializerRegistry,
};

/// Named component definition collected via inventory (see `#[component(name = "...")]`).
pub struct Registration {
    pub name: &'static str,
    pub define: fn(&mut InitializerRegistry, &Handles),
}

inventory::collect!(Registration);

/// Every submitted registration in link order; duplicates are kept so that
/// `lookup` can report them.
pub(crate) fn registrations() -> impl Iterator<Item = &'static Registration> {
    inventory::iter::<Registration>.into_iter()
}

/// Registered names, sorted and deduplicated.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = registrations().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

pub fn contains(name: &str) -> bool {
    registrations().any(|r| r.name == name)
}

/// Defines a fresh class from the registration named `name`.
/// 同名重复注册：取迭代顺序中的第一个并告警
pub fn lookup(name: &str, handles: &Handles) -> Result<ComponentClass> {
    let mut found = registrations().filter(|r| r.name == name);
    let reg = found
        .next()
        .ok_or_else(|| ComponentError::UnknownComponent(name.to_string()))?;
    if found.next().is_some() {
        tracing::warn!(component = %name, "component registered multiple times; using the first registration");
    }
    Ok(ComponentClass::define_with(handles, |r, h| (reg.define)(r, h)).named(reg.name))
}
