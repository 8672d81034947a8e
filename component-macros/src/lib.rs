use proc_macro::TokenStream;

mod codegen;

/// 生成 `Controller` 实现：收集 impl 块中所有接收 `&self`/`&mut self` 的 `pub fn`，
/// 按源码顺序构建公开方法表；参数与返回值经 serde_json 转换。
///
/// ```ignore
/// #[mmg_component::controller]
/// impl Counter {
///     pub fn bump(&mut self, by: u32) -> u32 { self.n += by; self.n }
///     pub fn _reset(&mut self) { self.n = 0 } // 私有前缀：不会被转发
/// }
/// ```
#[proc_macro_attribute]
pub fn controller(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::controller_entry(args, input)
}

/// 将定义函数 `fn(&mut InitializerRegistry, &Handles)` 登记到组件目录。
/// 未给出 `name` 时使用函数名。
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::component_entry(args, input)
}
