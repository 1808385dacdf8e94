//! Shapes of function-like nodes.
//!
//! The walker reduces each function-like node it enters to a `FunctionFacts`
//! value: everything the synthesizer needs, detached from the tree.

use proc_macro2::Ident;
use quote::ToTokens;
use serde::Serialize;
use syn::spanned::Spanned;

/// Fixed marker used when a function-like node has no declared name.
pub const ANONYMOUS_MARKER: &str = "<anonymous function>";

/// The closed set of function-like node kinds. Every other syntax kind is a
/// no-op for the walker's dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    /// `fn` item, at module level or nested inside another body.
    Free,
    /// Method in an `impl` block.
    Method,
    /// Trait method with a default body.
    TraitDefault,
    /// Closure expression (anonymous).
    Closure,
}

/// One parameter binding, reduced for trace rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamBinding {
    /// Plain identifier binding; usable as a format argument at the point of
    /// execution. `mut x`, `ref x` and `x @ sub` all still carry a name.
    Simple(Ident),
    /// Destructured, wildcard or rest pattern; carries the rendered pattern
    /// text for diagnostics.
    Pattern(String),
}

impl ParamBinding {
    /// Human-readable form for records and error messages.
    pub fn describe(&self) -> String {
        match self {
            ParamBinding::Simple(ident) => ident.to_string(),
            ParamBinding::Pattern(text) => text.clone(),
        }
    }
}

/// Everything the synthesizer needs to know about one function-like node.
#[derive(Debug, Clone)]
pub struct FunctionFacts {
    pub kind: FunctionKind,
    /// Declared name; `None` for closures.
    pub name: Option<String>,
    /// Parameter bindings in declaration order. Receivers (`self`, `&self`,
    /// `&mut self`) are omitted: they have no value-traceable binding name.
    pub params: Vec<ParamBinding>,
    /// 1-indexed line where the node's keyword begins in the original source.
    pub line: usize,
}

impl FunctionFacts {
    pub fn from_item_fn(node: &syn::ItemFn) -> Self {
        Self {
            kind: FunctionKind::Free,
            name: Some(node.sig.ident.to_string()),
            params: signature_bindings(&node.sig),
            line: node.sig.fn_token.span.start().line,
        }
    }

    pub fn from_impl_fn(node: &syn::ImplItemFn) -> Self {
        Self {
            kind: FunctionKind::Method,
            name: Some(node.sig.ident.to_string()),
            params: signature_bindings(&node.sig),
            line: node.sig.fn_token.span.start().line,
        }
    }

    pub fn from_trait_fn(node: &syn::TraitItemFn) -> Self {
        Self {
            kind: FunctionKind::TraitDefault,
            name: Some(node.sig.ident.to_string()),
            params: signature_bindings(&node.sig),
            line: node.sig.fn_token.span.start().line,
        }
    }

    pub fn from_closure(node: &syn::ExprClosure) -> Self {
        Self {
            kind: FunctionKind::Closure,
            name: None,
            params: node.inputs.iter().map(pattern_binding).collect(),
            line: node.span().start().line,
        }
    }

    /// Declared name, or the anonymous marker.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS_MARKER)
    }
}

fn signature_bindings(sig: &syn::Signature) -> Vec<ParamBinding> {
    sig.inputs
        .iter()
        .filter_map(|arg| match arg {
            syn::FnArg::Receiver(_) => None,
            syn::FnArg::Typed(pat_type) => Some(pattern_binding(&pat_type.pat)),
        })
        .collect()
}

fn pattern_binding(pat: &syn::Pat) -> ParamBinding {
    match pat {
        syn::Pat::Ident(pat_ident) => ParamBinding::Simple(pat_ident.ident.clone()),
        // Closure parameters with a type ascription wrap the real pattern.
        syn::Pat::Type(pat_type) => pattern_binding(&pat_type.pat),
        other => ParamBinding::Pattern(other.to_token_stream().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_fn_with_simple_params() {
        let item: syn::ItemFn = syn::parse_quote! {
            fn foo(a: i64, mut b: String, ref c: u8) {}
        };
        let facts = FunctionFacts::from_item_fn(&item);
        assert_eq!(facts.display_name(), "foo");
        assert_eq!(facts.kind, FunctionKind::Free);
        let names: Vec<String> = facts.params.iter().map(|p| p.describe()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(facts
            .params
            .iter()
            .all(|p| matches!(p, ParamBinding::Simple(_))));
    }

    #[test]
    fn test_receiver_is_omitted() {
        let item: syn::ImplItemFn = syn::parse_quote! {
            fn add(&self, n: i32) -> i32 { self.n + n }
        };
        let facts = FunctionFacts::from_impl_fn(&item);
        assert_eq!(facts.params.len(), 1, "receiver must not appear as a param");
        assert_eq!(facts.params[0].describe(), "n");
    }

    #[test]
    fn test_destructured_param_is_a_pattern() {
        let item: syn::ItemFn = syn::parse_quote! {
            fn dist((x, y): (f64, f64)) -> f64 { (x * x + y * y).sqrt() }
        };
        let facts = FunctionFacts::from_item_fn(&item);
        assert!(
            matches!(facts.params[0], ParamBinding::Pattern(_)),
            "tuple binding should not reduce to a simple name"
        );
    }

    #[test]
    fn test_closure_is_anonymous() {
        let expr: syn::Expr = syn::parse_quote!(|e: i64| e * 2);
        let closure = match expr {
            syn::Expr::Closure(closure) => closure,
            other => panic!("expected closure, got {other:?}"),
        };
        let facts = FunctionFacts::from_closure(&closure);
        assert_eq!(facts.display_name(), ANONYMOUS_MARKER);
        assert_eq!(facts.kind, FunctionKind::Closure);
        assert_eq!(facts.params[0].describe(), "e");
    }
}
