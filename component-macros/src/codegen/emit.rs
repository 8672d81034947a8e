use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, ItemFn, ItemImpl};

use super::analyze::{MethodSpec, RetCase};
use super::parse::PassMode;

// 单个公开方法的转发 shim：校验实参个数 -> 逐个反序列化 -> 调用 -> 序列化返回值
fn gen_method_shim(m: &MethodSpec) -> TokenStream {
    let ident = &m.ident;
    // r#type -> "type"
    let name_lit = ident.unraw().to_string();
    let arity = m.args.len();
    let mut binds = Vec::new();
    let mut call_args = Vec::new();
    for (i, a) in m.args.iter().enumerate() {
        let v = format_ident!("__a{}", i);
        let ty = &a.owned_ty;
        let mutability = if a.pass == PassMode::RefMut {
            quote! { mut }
        } else {
            quote! {}
        };
        binds.push(quote! {
            let #mutability #v: #ty = mmg_component::controller::arg(__args, #i, #name_lit)?;
        });
        call_args.push(match a.pass {
            PassMode::Value => quote! { #v },
            PassMode::Ref => quote! { &#v },
            PassMode::RefMut => quote! { &mut #v },
        });
    }
    let core = quote! { __c.#ident(#(#call_args),*) };
    let body = match m.ret_case {
        RetCase::Unit => quote! {
            #core;
            ::core::result::Result::Ok(mmg_component::__private::serde_json::Value::Null)
        },
        RetCase::ResultUnit => quote! {
            #core?;
            ::core::result::Result::Ok(mmg_component::__private::serde_json::Value::Null)
        },
        RetCase::ResultSome => quote! {
            let __r = #core?;
            mmg_component::controller::ret(__r)
        },
        RetCase::Some => quote! {
            mmg_component::controller::ret(#core)
        },
    };
    quote! {
        .method(#name_lit, |__c: &mut Self, __args: &[mmg_component::__private::serde_json::Value]|
            -> mmg_component::__private::anyhow::Result<mmg_component::__private::serde_json::Value>
        {
            mmg_component::controller::expect_arity(__args, #arity, #name_lit)?;
            #(#binds)*
            #body
        })
    }
}

pub fn gen_controller_impl(item: &ItemImpl, methods: &[MethodSpec]) -> TokenStream {
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let shims = methods.iter().map(gen_method_shim);
    quote! {
        #item
        impl #impl_generics mmg_component::controller::Controller for #self_ty #where_clause {
            fn methods() -> mmg_component::controller::MethodTable<Self> {
                mmg_component::controller::MethodTable::<Self>::new()
                    #(#shims)*
            }
        }
    }
}

pub fn gen_registration(item: &ItemFn, name: &str) -> TokenStream {
    let ident = &item.sig.ident;
    quote! {
        #item
        #[doc(hidden)]
        const _: () = {
            mmg_component::__private::inventory::submit! {
                mmg_component::catalog::Registration { name: #name, define: #ident }
            };
        };
    }
}
