//! Catch clause parsing.
//!
//! Syntax variants:
//! - `catch Type(e) { body }` - typed clause with binding
//! - `catch Type(_) { body }` - typed clause, payload ignored
//! - `catch Type { body }` - shorthand for `Type(_)`
//!
//! Every clause names exactly one payload type. Untyped clauses and guards
//! are rejected with a message pointing at the offending token.

use proc_macro2::{Span, TokenStream};
use syn::parse::ParseStream;
use syn::{Ident, Result};

use crate::parsing::{self, is_lowercase_ident, parse_keyword, peek_keyword};

/// A parsed catch clause.
#[derive(Debug, Clone)]
pub struct CatchClause {
    /// Span of the `catch` keyword (for error reporting)
    pub catch_span: Span,
    /// Type the handler matches
    pub type_path: TokenStream,
    /// Payload binding; `_` when omitted
    pub binding: Ident,
    /// Handler body
    pub body: TokenStream,
}

const CATCH_ALL_UNSUPPORTED: &str =
    "catch-all clauses are not supported; name the payload type: `catch Type(e) { ... }`";

/// Parse a catch clause, including the `catch` keyword.
pub fn parse(input: ParseStream) -> Result<CatchClause> {
    let catch_kw = parse_keyword(input, "catch")?;
    let catch_span = catch_kw.span();

    // `catch { }` and `catch _ { }`
    if parsing::peek_brace(input) {
        return Err(syn::Error::new(catch_span, CATCH_ALL_UNSUPPORTED));
    }
    if input.peek(syn::Token![_]) {
        return Err(syn::Error::new(input.span(), CATCH_ALL_UNSUPPORTED));
    }

    // `catch e { }`
    let fork = input.fork();
    if let Ok(ident) = fork.parse::<Ident>() {
        if is_lowercase_ident(&ident) && !fork.peek(syn::Token![::]) {
            if parsing::peek_brace(&fork) || fork.is_empty() {
                return Err(syn::Error::new(ident.span(), CATCH_ALL_UNSUPPORTED));
            }
        }
    }

    let type_path = parsing::parse_type_path(input)?;

    let binding = if input.peek(syn::token::Paren) {
        parsing::parse_binding(input)?
    } else {
        parsing::underscore_ident()
    };

    if peek_keyword(input, "when") {
        return Err(syn::Error::new(
            input.span(),
            "guards are not supported; a handler matches on its payload type alone",
        ));
    }

    let body = parsing::parse_braced_body(input)?;

    Ok(CatchClause {
        catch_span,
        type_path,
        binding,
        body,
    })
}
