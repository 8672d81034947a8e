mod analyze;
mod emit;
mod msgs;
mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Item, LitStr};

use analyze::collect_methods;
use emit::{gen_controller_impl, gen_registration};
use msgs::{
    ERR_COMPONENT_ARITY, ERR_COMPONENT_ASYNC, ERR_COMPONENT_TARGET, ERR_COMPONENT_UNKNOWN_ARG,
    ERR_CONTROLLER_NO_ARGS, ERR_CONTROLLER_TARGET, ERR_CONTROLLER_TRAIT_IMPL,
};

pub fn controller_entry(args: TokenStream, input: TokenStream) -> TokenStream {
    let args_ts = proc_macro2::TokenStream::from(args);
    let item_any = parse_macro_input!(input as Item);
    let item = match item_any {
        Item::Impl(item) => item,
        other => {
            return syn::Error::new_spanned(other, ERR_CONTROLLER_TARGET)
                .to_compile_error()
                .into()
        }
    };
    if !args_ts.is_empty() {
        let err = syn::Error::new_spanned(args_ts, ERR_CONTROLLER_NO_ARGS).to_compile_error();
        return quote! { #item #err }.into();
    }
    if let Some((_, path, _)) = &item.trait_ {
        let err = syn::Error::new_spanned(path, ERR_CONTROLLER_TRAIT_IMPL).to_compile_error();
        return quote! { #item #err }.into();
    }
    let (methods, errs) = collect_methods(&item);
    if !errs.is_empty() {
        // 出错时仅保留原 impl 与诊断，避免级联错误
        return quote! { #item #(#errs)* }.into();
    }
    gen_controller_impl(&item, &methods).into()
}

pub fn component_entry(args: TokenStream, input: TokenStream) -> TokenStream {
    let item_any = parse_macro_input!(input as Item);
    let item = match item_any {
        Item::Fn(item) => item,
        other => {
            return syn::Error::new_spanned(other, ERR_COMPONENT_TARGET)
                .to_compile_error()
                .into()
        }
    };
    let mut name: Option<LitStr> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(ERR_COMPONENT_UNKNOWN_ARG))
        }
    });
    parse_macro_input!(args with parser);
    if item.sig.asyncness.is_some() {
        let err = syn::Error::new_spanned(&item.sig, ERR_COMPONENT_ASYNC).to_compile_error();
        return quote! { #item #err }.into();
    }
    if item.sig.inputs.len() != 2 {
        let err = syn::Error::new_spanned(&item.sig, ERR_COMPONENT_ARITY).to_compile_error();
        return quote! { #item #err }.into();
    }
    let name = name
        .map(|n| n.value())
        .unwrap_or_else(|| item.sig.ident.to_string());
    gen_registration(&item, &name).into()
}
// end of layered codegen module
