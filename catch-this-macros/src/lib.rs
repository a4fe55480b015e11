//! Proc macros for catch-this.
//!
//! The declarative `dispatch!` macro in the main crate forwards its input
//! here together with `$crate`, so generated code can name the runtime
//! types without the caller importing them.

use proc_macro::TokenStream;

mod clause;
mod expand;
mod parsing;

/// Expands `dispatch!` clauses into handler chains.
///
/// Input: `$crate, handle_expr, clauses...`
#[proc_macro]
pub fn __dispatch_proc(input: TokenStream) -> TokenStream {
    expand::expand(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
