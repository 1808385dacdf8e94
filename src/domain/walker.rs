//! Depth-first walk and trace-statement splicing.
//!
//! The walker visits every node of a parsed file exactly once, pre-order,
//! and dispatches on the closed set of function-like kinds. Mutation is
//! confined to the entered node's own body: the trace statement is inserted
//! at the front of the statement list, so sibling iteration stays stable and
//! the walk continues through the (now longer) body. The injected statement
//! is a macro call, not a function-like node, so it is never re-matched.

use serde::Serialize;
use syn::visit_mut::{self, VisitMut};
use syn::{Block, Expr, File};

use crate::domain::config::InstrumentConfig;
use crate::domain::error::InstrumentError;
use crate::domain::function::{FunctionFacts, FunctionKind};
use crate::domain::synthesizer::TraceSynthesizer;

/// One instrumented function-like node, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct TraceRecord {
    pub name: String,
    pub kind: FunctionKind,
    pub line: usize,
    pub params: Vec<String>,
}

impl TraceRecord {
    fn from_facts(facts: &FunctionFacts) -> Self {
        Self {
            name: facts.display_name().to_string(),
            kind: facts.kind,
            line: facts.line,
            params: facts.params.iter().map(|p| p.describe()).collect(),
        }
    }
}

pub struct TraceWalker<'a> {
    synthesizer: TraceSynthesizer<'a>,
    records: Vec<TraceRecord>,
    error: Option<InstrumentError>,
}

impl<'a> TraceWalker<'a> {
    pub fn new(config: &'a InstrumentConfig) -> Self {
        Self {
            synthesizer: TraceSynthesizer::new(config),
            records: Vec::new(),
            error: None,
        }
    }

    /// Walk `file`, splicing a trace statement into every function-like
    /// node. Returns one record per instrumented node. A file with zero
    /// function-like nodes is valid and yields an empty record list.
    pub fn walk(mut self, file: &mut File) -> Result<Vec<TraceRecord>, InstrumentError> {
        self.visit_file_mut(file);
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.records),
        }
    }

    fn splice_block(&mut self, facts: FunctionFacts, block: &mut Block) {
        if self.error.is_some() {
            return;
        }
        match self.synthesizer.synthesize(&facts) {
            Ok(stmt) => {
                block.stmts.insert(0, stmt);
                self.records.push(TraceRecord::from_facts(&facts));
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Closure bodies come in two shapes. A block body is spliced like any
    /// other. A bare expression body has no statement list to prepend into,
    /// so it is wrapped in a new block with the original expression as the
    /// tail, preserving the closure's value.
    fn splice_closure_body(&mut self, facts: FunctionFacts, body: &mut Expr) {
        if self.error.is_some() {
            return;
        }
        match self.synthesizer.synthesize(&facts) {
            Ok(stmt) => {
                match body {
                    Expr::Block(expr_block) => expr_block.block.stmts.insert(0, stmt),
                    tail => {
                        let original = tail.clone();
                        *tail = syn::parse_quote!({ #stmt #original });
                    }
                }
                self.records.push(TraceRecord::from_facts(&facts));
            }
            Err(err) => self.error = Some(err),
        }
    }
}

impl VisitMut for TraceWalker<'_> {
    fn visit_item_fn_mut(&mut self, node: &mut syn::ItemFn) {
        self.splice_block(FunctionFacts::from_item_fn(node), &mut node.block);
        visit_mut::visit_item_fn_mut(self, node);
    }

    fn visit_impl_item_fn_mut(&mut self, node: &mut syn::ImplItemFn) {
        self.splice_block(FunctionFacts::from_impl_fn(node), &mut node.block);
        visit_mut::visit_impl_item_fn_mut(self, node);
    }

    fn visit_trait_item_fn_mut(&mut self, node: &mut syn::TraitItemFn) {
        // Only trait methods with a default body introduce a callable scope
        // with something to splice into.
        if node.default.is_some() {
            let facts = FunctionFacts::from_trait_fn(node);
            if let Some(block) = &mut node.default {
                self.splice_block(facts, block);
            }
        }
        visit_mut::visit_trait_item_fn_mut(self, node);
    }

    fn visit_expr_closure_mut(&mut self, node: &mut syn::ExprClosure) {
        let facts = FunctionFacts::from_closure(node);
        self.splice_closure_body(facts, &mut node.body);
        visit_mut::visit_expr_closure_mut(self, node);
    }
}
