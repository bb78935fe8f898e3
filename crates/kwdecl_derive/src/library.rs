//! Expansion of `#[library]`.

use kwdecl_core::lang::decorators::DecoratorId;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Item, Type};

use crate::args::{LibraryArgs, ListenerArg, attribute_arguments, attribute_decorator};

/// Expand `#[library(...)]` on a struct, enum or union into an `impl kwdecl::Library`.
///
/// Further `#[library]` attributes stacked below the expanding one are folded into the same impl: each declaration
/// layers over the ones closer to the item, so the outermost wins for the attributes it supplies.
pub fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let outermost: LibraryArgs = syn::parse2(attr)?;
    let mut item: Item = syn::parse2(item)?;
    let (attrs, ident, generics) = match &mut item {
        Item::Struct(s) => (&mut s.attrs, s.ident.clone(), s.generics.clone()),
        Item::Enum(e) => (&mut e.attrs, e.ident.clone(), e.generics.clone()),
        Item::Union(u) => (&mut u.attrs, u.ident.clone(), u.generics.clone()),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "`#[library]` can only be placed on a struct, enum or union",
            ));
        }
    };

    // Attributes closest to the item apply first, the expanding attribute last.
    let mut declarations = take_declarations(attrs)?;
    declarations.reverse();
    declarations.push(outermost);

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let body = layered_config_tokens(&declarations);

    Ok(quote! {
        #item

        impl #impl_generics ::kwdecl::Library for #ident #ty_generics #where_clause {
            fn library_config() -> ::kwdecl::LibraryConfig {
                #body
            }
        }
    })
}

/// Remove `#[library]` attributes from `attrs`, returning their arguments in source order.
fn take_declarations(attrs: &mut Vec<Attribute>) -> syn::Result<Vec<LibraryArgs>> {
    let mut found = Vec::new();
    let mut kept = Vec::with_capacity(attrs.len());
    for attr in attrs.drain(..) {
        match attribute_decorator(&attr) {
            Some(DecoratorId::Library) => {
                found.push(syn::parse2(attribute_arguments(&attr, DecoratorId::Library)?)?);
            }
            _ => kept.push(attr),
        }
    }
    *attrs = kept;
    Ok(found)
}

/// One expression per declaration, each bound over the previous one; the last is the result.
fn layered_config_tokens(declarations: &[LibraryArgs]) -> TokenStream {
    let below = format_ident!("declared", span = Span::mixed_site());
    let mut steps = Vec::new();
    let mut previous: Option<&Ident> = None;
    for (i, args) in declarations.iter().enumerate() {
        let config = config_tokens(args, previous);
        if i + 1 == declarations.len() {
            steps.push(config);
        } else {
            steps.push(quote! { let #below = #config; });
            previous = Some(&below);
        }
    }
    quote! { #(#steps)* }
}

/// The configuration of one declaration, layered over `previous` when attributes below it were applied first.
fn config_tokens(args: &LibraryArgs, previous: Option<&Ident>) -> TokenStream {
    let mut calls = Vec::new();
    if let Some(scope) = &args.scope {
        calls.push(quote! { .scope(#scope) });
    }
    if let Some(version) = &args.version {
        calls.push(quote! { .version(#version) });
    }
    if let Some(converters) = &args.converters {
        // An empty mapping is still a declared mapping.
        calls.push(quote! { .converters(::kwdecl::ConverterMap::new()) });
        for entry in converters {
            let target = &entry.target;
            let converter = &entry.converter;
            calls.push(quote! { .converter::<#target, _>(#converter) });
        }
    }
    if let Some(doc_format) = &args.doc_format {
        calls.push(quote! { .doc_format(#doc_format) });
    }
    match &args.listener {
        None => {}
        Some(ListenerArg::Single(listener)) => calls.push(quote! { .listener(#listener) }),
        Some(ListenerArg::Many(listeners)) => calls.push(quote! {
            .listeners([#(::std::sync::Arc::new(#listeners) as ::kwdecl::Listener),*])
        }),
    }
    if let Some(auto_keywords) = &args.auto_keywords {
        calls.push(quote! { .auto_keywords(#auto_keywords) });
    }

    // What the item already declared sits above anything it inherits through `extends`.
    let base = match (&args.extends, previous) {
        (Some(base), Some(previous)) => {
            let base = base_config(base);
            Some(quote! {
                {
                    let mut own = #previous;
                    own.inherit_from(&#base);
                    own
                }
            })
        }
        (Some(base), None) => Some(base_config(base)),
        (None, Some(previous)) => Some(quote! { #previous }),
        (None, None) => None,
    };
    match base {
        Some(base) => quote! { ::kwdecl::library_with() #(#calls)* .layer(::std::option::Option::Some(&#base)) },
        None => quote! { ::kwdecl::library_with() #(#calls)* .config() },
    }
}

fn base_config(base: &Type) -> TokenStream {
    quote! { <#base as ::kwdecl::Library>::library_config() }
}
