//! Shared parsing utilities.

use proc_macro2::{Span, TokenStream, TokenTree};
use quote::quote;
use syn::parse::ParseStream;
use syn::{braced, token, Ident, Result};

/// Names used by the generated code; a binding with one of these would
/// shadow it.
const RESERVED_BINDINGS: &[&str] = &["__handle", "__matched", "__value"];

/// Check if a binding name is reserved for internal use.
pub fn is_reserved_binding(name: &str) -> bool {
    RESERVED_BINDINGS.contains(&name)
}

/// Lowercase or underscore-prefixed identifiers read as bindings, not types.
///
/// `str` is the one lowercase type a clause may name.
pub fn is_lowercase_ident(ident: &Ident) -> bool {
    let s = ident.to_string();
    s != "str" && s.chars().next().map(|c| c.is_lowercase() || c == '_').unwrap_or(false)
}

/// Peek for a keyword without consuming it. Handles `else`, which is
/// reserved and does not parse as an `Ident`.
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    match keyword {
        "else" => input.peek(syn::Token![else]),
        _ => input.peek(Ident) && input.fork().parse::<Ident>().map(|id| id == keyword).unwrap_or(false),
    }
}

/// Parse a keyword, returning error if not found.
pub fn parse_keyword(input: ParseStream, keyword: &str) -> Result<Ident> {
    match keyword {
        "else" => {
            let token: syn::Token![else] = input.parse()?;
            Ok(Ident::new("else", token.span))
        }
        _ => {
            let ident: Ident = input.parse()?;
            if ident == keyword {
                Ok(ident)
            } else {
                Err(syn::Error::new(ident.span(), format!("expected `{}`", keyword)))
            }
        }
    }
}

/// Parse a type path like `std::io::Error`, with an optional leading `::`.
pub fn parse_type_path(input: ParseStream) -> Result<TokenStream> {
    let mut tokens = Vec::new();

    if input.peek(syn::Token![::]) {
        input.parse::<syn::Token![::]>()?;
        tokens.push(quote! { :: });
    }

    let ident: Ident = input.parse()?;
    tokens.push(quote! { #ident });

    while input.peek(syn::Token![::]) {
        input.parse::<syn::Token![::]>()?;
        let seg: Ident = input.parse()?;
        tokens.push(quote! { :: #seg });
    }

    Ok(tokens.into_iter().collect())
}

/// Parse a `(binding)` or `(_)` group.
pub fn parse_binding(input: ParseStream) -> Result<Ident> {
    let content;
    syn::parenthesized!(content in input);
    let binding = if content.peek(syn::Token![_]) {
        content.parse::<syn::Token![_]>()?;
        underscore_ident()
    } else {
        content.parse::<Ident>()?
    };

    if !content.is_empty() {
        return Err(content.error("a handler takes exactly one binding"));
    }

    let name = binding.to_string();
    if is_reserved_binding(&name) {
        return Err(syn::Error::new(
            binding.span(),
            format!("`{}` is reserved for internal use; choose a different binding name", name),
        ));
    }

    Ok(binding)
}

/// Parse a braced body `{ ... }`.
pub fn parse_braced_body(input: ParseStream) -> Result<TokenStream> {
    if !input.peek(token::Brace) {
        return Err(syn::Error::new(input.span(), "expected `{ }` body for handler"));
    }
    let content;
    braced!(content in input);
    content.parse()
}

/// Collect tokens up to the next top-level comma, consuming the comma.
pub fn parse_until_comma(input: ParseStream) -> Result<TokenStream> {
    let mut tokens = Vec::new();
    while !input.is_empty() && !input.peek(syn::Token![,]) {
        let tt: TokenTree = input.parse()?;
        tokens.push(tt);
    }
    if !input.is_empty() {
        input.parse::<syn::Token![,]>()?;
    }
    Ok(tokens.into_iter().collect())
}

/// Check if looking at a braced block.
pub fn peek_brace(input: ParseStream) -> bool {
    input.peek(token::Brace)
}

/// Create an underscore identifier.
pub fn underscore_ident() -> Ident {
    Ident::new("_", Span::call_site())
}
