// Core instrumentation domain: function shapes, trace synthesis, tree walk.

pub mod config;
pub mod error;
pub mod function;
pub mod synthesizer;
pub mod walker;
