// Parser module - Python AST parsing and import extraction

pub mod extractor;

pub use extractor::ImportExtractor;
