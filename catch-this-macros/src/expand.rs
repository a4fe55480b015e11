//! `dispatch!` input parsing and code generation.
//!
//! ```text
//! $crate, handle_expr,
//!     catch Type(e) { ... }*
//!     [else escalate | else { ... }]
//! ```

use proc_macro2::{TokenStream, TokenTree};
use quote::{quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::Result;

use crate::clause::{self, CatchClause};
use crate::parsing::{parse_braced_body, parse_keyword, parse_until_comma, peek_keyword};

/// Largest tuple implementing `HandlerChain`; longer clause lists are split
/// into groups of this size.
const MAX_CHAIN_LEN: usize = 12;

/// What happens when no clause matches.
#[derive(Debug, Clone)]
pub enum Fallback {
    /// Evaluate to `Option<T>`
    None,
    /// `else escalate`
    Escalate,
    /// `else { body }`
    Block(TokenStream),
}

/// Parsed `dispatch!` invocation.
#[derive(Debug, Clone)]
pub struct DispatchInput {
    /// Path to the runtime crate (`$crate` from the declarative macro)
    pub krate: TokenStream,
    /// Expression evaluating to an `ErrorHandle` or a reference to one
    pub handle: TokenStream,
    /// Clauses in declaration order
    pub clauses: Vec<CatchClause>,
    pub fallback: Fallback,
}

impl Parse for DispatchInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let krate = parse_until_comma(input)?;
        let handle = parse_until_comma(input)?;
        if handle.is_empty() {
            return Err(input.error("expected an error handle: `dispatch!(handle => ...)`"));
        }

        let mut clauses = Vec::new();
        let mut fallback = Fallback::None;

        while !input.is_empty() {
            if peek_keyword(input, "catch") {
                clauses.push(clause::parse(input)?);
            } else if peek_keyword(input, "else") {
                parse_keyword(input, "else")?;
                fallback = if peek_keyword(input, "escalate") {
                    parse_keyword(input, "escalate")?;
                    Fallback::Escalate
                } else {
                    Fallback::Block(parse_braced_body(input)?)
                };
                if !input.is_empty() {
                    return Err(input.error("`else` must be the last clause"));
                }
            } else {
                let tt: TokenTree = input.parse()?;
                return Err(syn::Error::new(
                    tt.span(),
                    format!("expected `catch` or `else`, found `{}`", tt),
                ));
            }
        }

        Ok(DispatchInput {
            krate,
            handle,
            clauses,
            fallback,
        })
    }
}

/// Entry point: parse and generate.
pub fn expand(input: TokenStream) -> Result<TokenStream> {
    let input: DispatchInput = syn::parse2(input)?;
    Ok(generate(&input))
}

fn generate(input: &DispatchInput) -> TokenStream {
    let krate = &input.krate;
    let handle = &input.handle;

    let groups: Vec<TokenStream> = input
        .clauses
        .chunks(MAX_CHAIN_LEN)
        .map(|chunk| {
            let handlers = chunk.iter().map(|clause| {
                let ty = &clause.type_path;
                let binding = &clause.binding;
                let body = &clause.body;
                quote_spanned! { clause.catch_span=>
                    |#binding: &#ty| { #body },
                }
            });
            quote! { #krate::ErrorHandle::dispatch(__handle, ( #(#handlers)* )) }
        })
        .collect();

    let matched = match groups.split_first() {
        Some((first, rest)) => quote! { #first #( .or_else(|| #rest) )* },
        None => quote! { #krate::ErrorHandle::dispatch(__handle, ()) },
    };

    let tail = match &input.fallback {
        Fallback::None => quote! { __matched },
        Fallback::Escalate => quote! {
            match __matched {
                ::core::option::Option::Some(__value) => __value,
                ::core::option::Option::None => #krate::ErrorHandle::escalate(__handle),
            }
        },
        Fallback::Block(body) => quote! {
            match __matched {
                ::core::option::Option::Some(__value) => __value,
                ::core::option::Option::None => { #body }
            }
        },
    };

    quote! {
        {
            let __handle: &#krate::ErrorHandle = &(#handle);
            let __matched = #matched;
            #tail
        }
    }
}
