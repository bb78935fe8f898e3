//! Expansion of `#[not_keyword]`, `#[keyword]` and `#[keywords]`.

use kwdecl_core::lang::decorators::DecoratorId;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, FnArg, ImplItem, ItemFn, ItemImpl, ReturnType, Signature, Type, Visibility};

use crate::args::{KeywordArgs, TypesArg, attribute_arguments, attribute_decorator, no_arguments_expected};

/// One keyword-related attribute, in the order it is applied.
enum Declarator {
    NotKeyword,
    Keyword(KeywordArgs),
}

/// Expand `#[keyword]` or `#[not_keyword]` on a free function.
///
/// The function is kept as written; a companion `<fn>_keyword()` returns it wrapped in `kwdecl::Keyword` with the
/// declared metadata. Further keyword attributes stacked below the expanding one are folded into the same wrapper.
pub fn expand_fn(id: DecoratorId, attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let outermost = parse_declarator(id, attr)?;
    let mut func: ItemFn = syn::parse2(item)?;
    check_free_fn(&func.sig)?;

    // Attributes closest to the function apply first, the expanding attribute last.
    let mut declarators = take_declarators(&mut func.attrs)?;
    declarators.reverse();
    declarators.push(outermost);

    let ident = &func.sig.ident;
    let vis = &func.vis;
    let companion = format_ident!("{}_keyword", ident.unraw());
    let fn_ptr = fn_pointer_type(&func.sig);
    let steps = declarators.iter().map(declare_tokens);
    let doc = format!("Keyword declaration of [`{}`].", ident.unraw());

    Ok(quote! {
        #func

        #[doc = #doc]
        #vis fn #companion() -> ::kwdecl::Keyword<#fn_ptr> {
            let mut attrs = ::kwdecl::KeywordAttrs::default();
            #(#steps)*
            ::kwdecl::Keyword::from_parts(#ident as #fn_ptr, attrs)
        }
    })
}

/// Expand `#[keywords]` on an inherent impl block into an `impl kwdecl::KeywordSource`.
pub fn expand_impl(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(no_arguments_expected(attr.span(), DecoratorId::Keywords));
    }
    let mut block: ItemImpl = syn::parse2(item)?;
    if let Some((_, path, _)) = &block.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "`#[keywords]` must be placed on an inherent impl block, not a trait impl",
        ));
    }

    let mut methods = Vec::new();
    for impl_item in &mut block.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let declarators = take_declarators(&mut method.attrs)?;
        let public = matches!(method.vis, Visibility::Public(_));
        if !public && declarators.is_empty() {
            continue;
        }
        let ident = method.sig.ident.unraw().to_string();
        let steps = declarators.iter().rev().map(declare_tokens);
        methods.push(quote! {
            ::kwdecl::MethodDecl::new(#ident, #public, {
                let mut attrs = ::kwdecl::KeywordAttrs::default();
                #(#steps)*
                attrs
            })
        });
    }

    let self_ty = &block.self_ty;
    let (impl_generics, _, where_clause) = block.generics.split_for_impl();

    Ok(quote! {
        #block

        impl #impl_generics ::kwdecl::KeywordSource for #self_ty #where_clause {
            fn keyword_methods() -> ::std::vec::Vec<::kwdecl::MethodDecl> {
                ::std::vec![#(#methods),*]
            }
        }
    })
}

fn parse_declarator(id: DecoratorId, attr: TokenStream) -> syn::Result<Declarator> {
    match id {
        DecoratorId::NotKeyword if attr.is_empty() => Ok(Declarator::NotKeyword),
        DecoratorId::NotKeyword => Err(no_arguments_expected(attr.span(), id)),
        _ => Ok(Declarator::Keyword(syn::parse2(attr)?)),
    }
}

/// Remove `#[keyword]`/`#[not_keyword]` attributes from `attrs`, returning them in source order.
fn take_declarators(attrs: &mut Vec<Attribute>) -> syn::Result<Vec<Declarator>> {
    let mut found = Vec::new();
    let mut kept = Vec::with_capacity(attrs.len());
    for attr in attrs.drain(..) {
        let Some(id) = declarator_id(&attr) else {
            kept.push(attr);
            continue;
        };
        found.push(parse_declarator(id, attribute_arguments(&attr, id)?)?);
    }
    *attrs = kept;
    Ok(found)
}

fn declarator_id(attr: &Attribute) -> Option<DecoratorId> {
    match attribute_decorator(attr)? {
        id @ (DecoratorId::Keyword | DecoratorId::NotKeyword) => Some(id),
        _ => None,
    }
}

fn declare_tokens(declarator: &Declarator) -> TokenStream {
    match declarator {
        Declarator::NotKeyword => quote! { attrs.mark_not_keyword(); },
        Declarator::Keyword(args) => {
            let calls = keyword_builder_calls(args);
            quote! { ::kwdecl::keyword_with() #(#calls)* .declare(&mut attrs); }
        }
    }
}

fn keyword_builder_calls(args: &KeywordArgs) -> Vec<TokenStream> {
    let mut calls = Vec::new();
    if let Some(name) = &args.name {
        calls.push(quote! { .name(#name) });
    }
    if let Some(tags) = &args.tags {
        calls.push(quote! {
            .tags::<_, ::std::string::String>([#(::std::string::String::from(#tags)),*])
        });
    }
    match &args.types {
        None => {}
        Some(TypesArg::Disabled) => calls.push(quote! { .no_conversion() }),
        Some(TypesArg::ByPosition(types)) => calls.push(quote! {
            .types(::kwdecl::TypePolicy::by_position([#(::kwdecl::TypeRef::of::<#types>()),*]))
        }),
        Some(TypesArg::ByName(entries)) => {
            let names = entries.iter().map(|(name, _)| name);
            let types = entries.iter().map(|(_, ty)| ty);
            calls.push(quote! {
                .types(::kwdecl::TypePolicy::by_name::<_, ::std::string::String>([
                    #((::std::string::String::from(#names), ::kwdecl::TypeRef::of::<#types>())),*
                ]))
            });
        }
    }
    calls
}

fn check_free_fn(sig: &Signature) -> syn::Result<()> {
    if let Some(receiver) = sig.receiver() {
        return Err(syn::Error::new(
            receiver.span(),
            "methods are declared through `#[keywords]` on their impl block",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "keyword functions cannot be generic",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new(asyncness.span(), "keyword functions cannot be async"));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new(variadic.span(), "keyword functions cannot be variadic"));
    }
    for input in &sig.inputs {
        if let FnArg::Typed(pat) = input {
            if matches!(*pat.ty, Type::ImplTrait(_)) {
                return Err(syn::Error::new(
                    pat.ty.span(),
                    "keyword functions cannot take `impl Trait` arguments",
                ));
            }
        }
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        if matches!(**ty, Type::ImplTrait(_)) {
            return Err(syn::Error::new(ty.span(), "keyword functions cannot return `impl Trait`"));
        }
    }
    Ok(())
}

/// `fn(A, B) -> R` for a non-generic free function signature.
fn fn_pointer_type(sig: &Signature) -> TokenStream {
    let unsafety = &sig.unsafety;
    let abi = &sig.abi;
    let inputs = sig.inputs.iter().filter_map(|input| match input {
        FnArg::Typed(pat) => Some(&pat.ty),
        FnArg::Receiver(_) => None,
    });
    let output = &sig.output;
    quote! { #unsafety #abi fn(#(#inputs),*) #output }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(id: DecoratorId, attr: &str, item: &str) -> syn::Result<String> {
        let attr: TokenStream = syn::parse_str(attr)?;
        let item: TokenStream = syn::parse_str(item)?;
        expand_fn(id, attr, item).map(|tokens| tokens.to_string())
    }

    #[test]
    fn companion_function_wraps_a_fn_pointer() {
        let out = expand(DecoratorId::Keyword, "", "pub fn open_browser(url: &str) -> bool { true }").unwrap();
        assert!(out.contains("pub fn open_browser_keyword"));
        assert!(out.contains("open_browser as fn"));
        assert!(out.contains("Keyword < fn"));
    }

    #[test]
    fn stacked_declarators_apply_innermost_first() {
        let out = expand(
            DecoratorId::Keyword,
            "name = \"Explicit\"",
            "#[not_keyword] fn helper() {}",
        )
        .unwrap();
        let mark = out.find("mark_not_keyword").unwrap();
        let declare = out.find("declare (").unwrap();
        assert!(mark < declare);
        assert!(!out.contains("# [not_keyword]"));
    }

    #[test]
    fn rejects_signatures_without_a_fn_pointer() {
        let err = expand(DecoratorId::Keyword, "", "fn f<T>(x: T) {}").err().unwrap();
        assert!(err.to_string().contains("cannot be generic"));

        let err = expand(DecoratorId::Keyword, "", "async fn f() {}").err().unwrap();
        assert!(err.to_string().contains("cannot be async"));

        let err = expand(DecoratorId::Keyword, "", "fn f(&self) {}").err().unwrap();
        assert!(err.to_string().contains("#[keywords]"));

        let err = expand(DecoratorId::NotKeyword, "x", "fn f() {}").err().unwrap();
        assert!(err.to_string().contains("takes no arguments"));
    }

    #[test]
    fn impl_expansion_lists_public_and_declared_methods() {
        let item: TokenStream = syn::parse_str(
            r#"impl Browser {
                pub fn open(&self) {}
                #[keyword("Close It")]
                fn close(&self) {}
                fn helper(&self) {}
                #[not_keyword]
                pub fn reset(&mut self) {}
            }"#,
        )
        .unwrap();
        let out = expand_impl(TokenStream::new(), item).unwrap().to_string();
        assert!(out.contains("\"open\" , true"));
        assert!(out.contains("\"close\" , false"));
        assert!(out.contains("\"reset\" , true"));
        assert!(!out.contains("\"helper\""));
        assert!(!out.contains("# [keyword"));
        assert!(!out.contains("# [not_keyword]"));
    }

    #[test]
    fn impl_expansion_rejects_trait_impls() {
        let item: TokenStream = syn::parse_str("impl Default for Browser { fn default() -> Self { Browser } }").unwrap();
        assert!(expand_impl(TokenStream::new(), item).is_err());
    }
}
