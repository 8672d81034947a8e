use syn::{FnArg, Pat, Type};

// 低层解析与判别辅助

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ReceiverKind {
    None,
    Ref,
    RefMut,
    Value,
}

pub fn receiver_kind(sig: &syn::Signature) -> ReceiverKind {
    match sig.receiver() {
        None => ReceiverKind::None,
        Some(r) if r.reference.is_none() => ReceiverKind::Value,
        Some(r) if r.mutability.is_some() => ReceiverKind::RefMut,
        Some(_) => ReceiverKind::Ref,
    }
}

/// 实参如何传给原方法：按值，或对反序列化出的 owned 值取引用
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    Value,
    Ref,
    RefMut,
}

#[inline]
pub fn is_plain_binding(pat: &Pat) -> bool {
    matches!(pat, Pat::Ident(pi) if pi.by_ref.is_none() && pi.subpat.is_none())
        || matches!(pat, Pat::Wild(_))
}

#[inline]
pub fn contains_impl_trait(ty: &Type) -> bool {
    match ty {
        Type::ImplTrait(_) => true,
        Type::Reference(r) => contains_impl_trait(&r.elem),
        Type::Paren(p) => contains_impl_trait(&p.elem),
        _ => false,
    }
}

/// `&str` -> String, `&[T]` -> Vec<T>, `&T`/`&mut T` -> T；其余按值
pub fn owned_arg_type(ty: &Type) -> (Type, PassMode) {
    match ty {
        Type::Reference(r) => {
            let mode = if r.mutability.is_some() {
                PassMode::RefMut
            } else {
                PassMode::Ref
            };
            let owned: Type = match &*r.elem {
                Type::Path(tp) if tp.qself.is_none() && tp.path.is_ident("str") => {
                    syn::parse_quote!(::std::string::String)
                }
                Type::Slice(s) => {
                    let elem = &s.elem;
                    syn::parse_quote!(::std::vec::Vec<#elem>)
                }
                other => other.clone(),
            };
            (owned, mode)
        }
        other => (other.clone(), PassMode::Value),
    }
}

/// 跳过接收者，返回其余形参
pub fn typed_inputs(sig: &syn::Signature) -> impl Iterator<Item = &syn::PatType> {
    sig.inputs.iter().filter_map(|a| match a {
        FnArg::Typed(pt) => Some(pt),
        FnArg::Receiver(_) => None,
    })
}
