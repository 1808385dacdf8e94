use crate::domain::error::InstrumentError;

/// Parses source text into a syntax tree with source positions.
pub trait SourceParser {
    fn parse(&self, source: &str) -> Result<syn::File, InstrumentError>;
}

/// Serializes a (possibly mutated) syntax tree back into source text.
pub trait SourceGenerator {
    fn generate(&self, file: &syn::File) -> String;
}
