// Centralized compile-time diagnostic strings for the macro codegen layer.

pub(super) const ERR_CONTROLLER_TARGET: &str =
    "#[controller] only supports inherent impl blocks";
pub(super) const ERR_CONTROLLER_TRAIT_IMPL: &str =
    "#[controller] cannot be applied to a trait impl; use an inherent impl block";
pub(super) const ERR_CONTROLLER_NO_ARGS: &str = "#[controller] does not accept any arguments";

pub(super) const ERR_METHOD_ASYNC: &str =
    "public controller methods must be synchronous; forwarded calls run inside start/stop";
pub(super) const ERR_METHOD_GENERIC: &str =
    "public controller methods cannot be generic; forwarded arguments need concrete types";
pub(super) const ERR_METHOD_SELF_BY_VALUE: &str =
    "public controller methods must take &self or &mut self, not self by value";
pub(super) const ERR_METHOD_ARG_PATTERN: &str =
    "controller method arguments must be plain identifiers";
pub(super) const ERR_METHOD_IMPL_TRAIT: &str =
    "controller method arguments cannot use impl Trait";

pub(super) const ERR_COMPONENT_TARGET: &str =
    "#[component] only supports a definition fn(&mut InitializerRegistry, &Handles)";
pub(super) const ERR_COMPONENT_ASYNC: &str = "#[component] definition fn cannot be async";
pub(super) const ERR_COMPONENT_ARITY: &str =
    "#[component] definition fn must take exactly (&mut InitializerRegistry, &Handles)";
pub(super) const ERR_COMPONENT_UNKNOWN_ARG: &str = "#[component] only accepts name = \"...\"";
