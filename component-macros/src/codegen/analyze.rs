use super::msgs::{
    ERR_METHOD_ARG_PATTERN, ERR_METHOD_ASYNC, ERR_METHOD_GENERIC, ERR_METHOD_IMPL_TRAIT,
    ERR_METHOD_SELF_BY_VALUE,
};
use super::parse::{
    contains_impl_trait, is_plain_binding, owned_arg_type, receiver_kind, typed_inputs, PassMode,
    ReceiverKind,
};
use syn::{ItemImpl, Type};

#[derive(Clone)]
pub enum RetCase {
    Unit,
    Some,
    ResultUnit,
    ResultSome,
}

pub fn analyze_return(sig: &syn::Signature) -> RetCase {
    match &sig.output {
        syn::ReturnType::Default => RetCase::Unit,
        syn::ReturnType::Type(_, ty) => match &**ty {
            syn::Type::Tuple(t) if t.elems.is_empty() => RetCase::Unit,
            syn::Type::Path(tp) => {
                let Some(seg) = tp.path.segments.last() else {
                    return RetCase::Some;
                };
                if seg.ident != "Result" {
                    return RetCase::Some;
                }
                if let syn::PathArguments::AngleBracketed(ab) = &seg.arguments {
                    if let Some(syn::GenericArgument::Type(syn::Type::Tuple(t))) = ab.args.first()
                    {
                        if t.elems.is_empty() {
                            return RetCase::ResultUnit;
                        }
                    }
                    return RetCase::ResultSome;
                }
                // 裸 `Result`（无泛型参数）视为 Result<()>
                RetCase::ResultUnit
            }
            _ => RetCase::Some,
        },
    }
}

pub struct ArgSpec {
    pub owned_ty: Type,
    pub pass: PassMode,
}

pub struct MethodSpec {
    pub ident: syn::Ident,
    pub args: Vec<ArgSpec>,
    pub ret_case: RetCase,
}

/// 收集公开方法：仅 `pub`，且接收 `&self`/`&mut self`；无接收者的关联函数（构造器等）静默跳过
pub fn collect_methods(item: &ItemImpl) -> (Vec<MethodSpec>, Vec<proc_macro2::TokenStream>) {
    let mut methods = Vec::new();
    let mut errs = Vec::new();
    for it in &item.items {
        let syn::ImplItem::Fn(m) = it else { continue };
        if !matches!(m.vis, syn::Visibility::Public(_)) {
            continue;
        }
        let sig = &m.sig;
        match receiver_kind(sig) {
            ReceiverKind::None => continue,
            ReceiverKind::Value => {
                errs.push(syn::Error::new_spanned(sig, ERR_METHOD_SELF_BY_VALUE).to_compile_error());
                continue;
            }
            ReceiverKind::Ref | ReceiverKind::RefMut => {}
        }
        if sig.asyncness.is_some() {
            errs.push(syn::Error::new_spanned(sig, ERR_METHOD_ASYNC).to_compile_error());
            continue;
        }
        if sig.generics.params.iter().any(|p| !matches!(p, syn::GenericParam::Lifetime(_))) {
            errs.push(syn::Error::new_spanned(&sig.generics, ERR_METHOD_GENERIC).to_compile_error());
            continue;
        }
        let mut args = Vec::new();
        let mut ok = true;
        for pt in typed_inputs(sig) {
            if !is_plain_binding(&pt.pat) {
                errs.push(syn::Error::new_spanned(&pt.pat, ERR_METHOD_ARG_PATTERN).to_compile_error());
                ok = false;
                continue;
            }
            if contains_impl_trait(&pt.ty) {
                errs.push(syn::Error::new_spanned(&pt.ty, ERR_METHOD_IMPL_TRAIT).to_compile_error());
                ok = false;
                continue;
            }
            let (owned_ty, pass) = owned_arg_type(&pt.ty);
            args.push(ArgSpec { owned_ty, pass });
        }
        if !ok {
            continue;
        }
        methods.push(MethodSpec {
            ident: sig.ident.clone(),
            args,
            ret_case: analyze_return(sig),
        });
    }
    (methods, errs)
}
