//! Argument parsing for `#[keyword(...)]` and `#[library(...)]`.
//!
//! Argument names come from `kwdecl_core::lang::decorators` so the accepted spellings and the reference document
//! cannot drift apart.

use kwdecl_core::lang::decorators::{
    self, DecoratorId, KEYWORD_NAME_ARG, KEYWORD_TAGS_ARG, KEYWORD_TYPES_ARG, KEYWORD_TYPES_DISABLED,
    LIBRARY_AUTO_KEYWORDS_ARG, LIBRARY_CONVERTERS_ARG, LIBRARY_DOC_FORMAT_ARG, LIBRARY_EXTENDS_ARG,
    LIBRARY_LISTENER_ARG, LIBRARY_SCOPE_ARG, LIBRARY_VERSION_ARG,
};
use proc_macro2::{Span, TokenStream};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Ident, LitBool, LitStr, Meta, Token, Type, braced, bracketed};

/// Parsed `types = ...` argument.
pub enum TypesArg {
    /// `types = None`
    Disabled,
    /// `types = [Ty, ..]`
    ByPosition(Vec<Type>),
    /// `types = { arg: Ty, .. }`
    ByName(Vec<(String, Type)>),
}

/// Parsed `#[keyword(...)]` arguments. A `None` field was not supplied and emits no builder call.
#[derive(Default)]
pub struct KeywordArgs {
    pub name: Option<Expr>,
    pub tags: Option<Vec<Expr>>,
    pub types: Option<TypesArg>,
}

impl Parse for KeywordArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = KeywordArgs::default();

        // A leading string literal is the positional name.
        if input.peek(LitStr) {
            let name: LitStr = input.parse()?;
            args.name = Some(Expr::Lit(syn::ExprLit {
                attrs: Vec::new(),
                lit: syn::Lit::Str(name),
            }));
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        while !input.is_empty() {
            let key = Ident::parse_any(input)?;
            let key_str = key.unraw().to_string();
            input.parse::<Token![=]>()?;

            match key_str.as_str() {
                KEYWORD_NAME_ARG => {
                    reject_duplicate(&key, args.name.is_some())?;
                    args.name = Some(input.parse()?);
                }
                KEYWORD_TAGS_ARG => {
                    reject_duplicate(&key, args.tags.is_some())?;
                    let content;
                    bracketed!(content in input);
                    let tags = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?;
                    args.tags = Some(tags.into_iter().collect());
                }
                KEYWORD_TYPES_ARG => {
                    reject_duplicate(&key, args.types.is_some())?;
                    args.types = Some(input.parse()?);
                }
                _ => return Err(unknown_argument(&key, DecoratorId::Keyword)),
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

impl Parse for TypesArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(syn::token::Bracket) {
            let content;
            bracketed!(content in input);
            let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
            return Ok(TypesArg::ByPosition(types.into_iter().collect()));
        }

        if input.peek(syn::token::Brace) {
            let content;
            braced!(content in input);
            let entries = Punctuated::<NamedType, Token![,]>::parse_terminated(&content)?;
            return Ok(TypesArg::ByName(entries.into_iter().map(|e| (e.name, e.ty)).collect()));
        }

        let lookahead = input.lookahead1();
        if lookahead.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident == KEYWORD_TYPES_DISABLED {
                return Ok(TypesArg::Disabled);
            }
            return Err(syn::Error::new(
                ident.span(),
                format!("expected `{KEYWORD_TYPES_DISABLED}`, `[Type, ..]` or `{{ arg: Type, .. }}`"),
            ));
        }
        Err(lookahead.error())
    }
}

/// One `arg: Type` entry of a by-name type mapping. The key may be an identifier or a string literal.
struct NamedType {
    name: String,
    ty: Type,
}

impl Parse for NamedType {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(LitStr) {
            input.parse::<LitStr>()?.value()
        } else {
            Ident::parse_any(input)?.unraw().to_string()
        };
        input.parse::<Token![:]>()?;
        let ty = input.parse()?;
        Ok(NamedType { name, ty })
    }
}

/// One `Type => converter` entry of `converters = { .. }`.
pub struct ConverterEntry {
    pub target: Type,
    pub converter: Expr,
}

impl Parse for ConverterEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let target = input.parse()?;
        input.parse::<Token![=>]>()?;
        let converter = input.parse()?;
        Ok(ConverterEntry { target, converter })
    }
}

/// Parsed `listener = ...` argument.
pub enum ListenerArg {
    Single(Expr),
    /// `listener = [a, b]`
    Many(Vec<Expr>),
}

/// Parsed `#[library(...)]` arguments. A `None` field was not supplied and stays unset in the configuration.
#[derive(Default)]
pub struct LibraryArgs {
    pub scope: Option<Expr>,
    pub version: Option<Expr>,
    pub converters: Option<Vec<ConverterEntry>>,
    pub doc_format: Option<Expr>,
    pub listener: Option<ListenerArg>,
    pub auto_keywords: Option<Expr>,
    pub extends: Option<Type>,
}

impl Parse for LibraryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = LibraryArgs::default();

        while !input.is_empty() {
            let key = Ident::parse_any(input)?;
            let key_str = key.unraw().to_string();

            // `auto_keywords` alone means `auto_keywords = true`.
            if key_str == LIBRARY_AUTO_KEYWORDS_ARG && (input.is_empty() || input.peek(Token![,])) {
                reject_duplicate(&key, args.auto_keywords.is_some())?;
                args.auto_keywords = Some(Expr::Lit(syn::ExprLit {
                    attrs: Vec::new(),
                    lit: syn::Lit::Bool(LitBool::new(true, key.span())),
                }));
            } else {
                input.parse::<Token![=]>()?;
                match key_str.as_str() {
                    LIBRARY_SCOPE_ARG => {
                        reject_duplicate(&key, args.scope.is_some())?;
                        args.scope = Some(input.parse()?);
                    }
                    LIBRARY_VERSION_ARG => {
                        reject_duplicate(&key, args.version.is_some())?;
                        args.version = Some(input.parse()?);
                    }
                    LIBRARY_CONVERTERS_ARG => {
                        reject_duplicate(&key, args.converters.is_some())?;
                        let content;
                        braced!(content in input);
                        let entries = Punctuated::<ConverterEntry, Token![,]>::parse_terminated(&content)?;
                        args.converters = Some(entries.into_iter().collect());
                    }
                    LIBRARY_DOC_FORMAT_ARG => {
                        reject_duplicate(&key, args.doc_format.is_some())?;
                        args.doc_format = Some(input.parse()?);
                    }
                    LIBRARY_LISTENER_ARG => {
                        reject_duplicate(&key, args.listener.is_some())?;
                        args.listener = Some(match input.parse::<Expr>()? {
                            Expr::Array(array) => ListenerArg::Many(array.elems.into_iter().collect()),
                            expr => ListenerArg::Single(expr),
                        });
                    }
                    LIBRARY_AUTO_KEYWORDS_ARG => {
                        reject_duplicate(&key, args.auto_keywords.is_some())?;
                        args.auto_keywords = Some(input.parse()?);
                    }
                    LIBRARY_EXTENDS_ARG => {
                        reject_duplicate(&key, args.extends.is_some())?;
                        args.extends = Some(input.parse()?);
                    }
                    _ => return Err(unknown_argument(&key, DecoratorId::Library)),
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

/// Recognise one of our attributes, bare or `kwdecl::`-qualified.
pub fn attribute_decorator(attr: &Attribute) -> Option<DecoratorId> {
    let path = attr.path();
    let last = path.segments.last()?;
    let qualified_ok = match path.segments.len() {
        1 => true,
        2 => path.segments[0].ident == "kwdecl",
        _ => false,
    };
    if !qualified_ok {
        return None;
    }
    decorators::from_str(&last.ident.to_string())
}

/// The argument tokens of a recognised attribute; `#[name]` has none.
pub fn attribute_arguments(attr: &Attribute, decorator: DecoratorId) -> syn::Result<TokenStream> {
    match &attr.meta {
        Meta::Path(_) => Ok(TokenStream::new()),
        Meta::List(list) => Ok(list.tokens.clone()),
        Meta::NameValue(nv) => Err(syn::Error::new(
            nv.span(),
            format!("use `#[{}(...)]`, not `=`", decorators::as_str(decorator)),
        )),
    }
}

/// Error for an attribute that takes no arguments but was given some.
pub fn no_arguments_expected(span: Span, decorator: DecoratorId) -> syn::Error {
    syn::Error::new(span, format!("`#[{}]` takes no arguments", decorators::as_str(decorator)))
}

fn reject_duplicate(key: &Ident, already_set: bool) -> syn::Result<()> {
    if already_set {
        return Err(syn::Error::new(key.span(), format!("duplicate argument `{}`", key.unraw())));
    }
    Ok(())
}

fn unknown_argument(key: &Ident, decorator: DecoratorId) -> syn::Error {
    let expected = decorators::arguments(decorator)
        .iter()
        .map(|a| format!("`{a}`"))
        .collect::<Vec<_>>()
        .join(", ");
    syn::Error::new(
        key.span(),
        format!(
            "unknown `#[{}]` argument `{}`; expected one of {expected}",
            decorators::as_str(decorator),
            key.unraw()
        ),
    )
}
