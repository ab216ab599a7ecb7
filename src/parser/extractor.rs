use crate::error::AiActError;
use std::collections::BTreeSet;
use tree_sitter::{Node, Parser};

/// Extracts the module names referenced by import statements in a single
/// Python source unit. Only statically visible imports are considered;
/// `__import__("x")` and friends are out of scope by design.
pub struct ImportExtractor {
    parser: Parser,
}

impl ImportExtractor {
    pub fn new() -> Result<Self, AiActError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| AiActError::ParseError(format!("failed to load Python grammar: {}", e)))?;

        Ok(Self { parser })
    }

    /// Parse `source` and return the set of imported module names.
    /// Fails with `ParseError` when the source is not valid Python.
    pub fn extract_imports(&mut self, source: &str) -> Result<BTreeSet<String>, AiActError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| AiActError::ParseError("parser produced no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(AiActError::ParseError(
                "source contains syntax errors".to_string(),
            ));
        }

        let mut imports = BTreeSet::new();
        collect_imports(root, source, &mut imports);
        Ok(imports)
    }
}

fn collect_imports(node: Node, source: &str, imports: &mut BTreeSet<String>) {
    match node.kind() {
        "import_statement" => {
            // `import a, b.c` binds "a" and "b.c"; `import a as x` binds "a"
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "dotted_name" => {
                        if let Some(name) = node_text(child, source) {
                            imports.insert(name);
                        }
                    }
                    "aliased_import" => {
                        if let Some(name) = child
                            .child_by_field_name("name")
                            .and_then(|n| node_text(n, source))
                        {
                            imports.insert(name);
                        }
                    }
                    _ => {}
                }
            }
        }
        "import_from_statement" => {
            if let Some(module) = node.child_by_field_name("module_name") {
                match module.kind() {
                    "dotted_name" => {
                        if let Some(name) = node_text(module, source) {
                            imports.insert(name);
                        }
                    }
                    // `from .pkg import x` names "pkg"; a bare relative
                    // import (`from . import x`) names nothing
                    "relative_import" => {
                        let mut cursor = module.walk();
                        for part in module.named_children(&mut cursor) {
                            if part.kind() == "dotted_name" {
                                if let Some(name) = node_text(part, source) {
                                    imports.insert(name);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_imports(child, source, imports);
    }
}

fn node_text(node: Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes())
        .ok()
        .map(|text| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> BTreeSet<String> {
        let mut extractor = ImportExtractor::new().unwrap();
        extractor.extract_imports(source).unwrap()
    }

    #[test]
    fn test_plain_imports() {
        let imports = extract("import face_recognition\nimport cv2\n");

        assert!(imports.contains("face_recognition"));
        assert!(imports.contains("cv2"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_multi_name_and_dotted_imports() {
        let imports = extract("import a, b.c\n");

        assert!(imports.contains("a"));
        assert!(imports.contains("b.c"));
    }

    #[test]
    fn test_aliased_import_yields_original_name() {
        let imports = extract("import numpy as np\n");

        assert!(imports.contains("numpy"));
        assert!(!imports.contains("np"));
    }

    #[test]
    fn test_from_import_yields_module() {
        let imports = extract("from face_recognition.api import load_image_file\n");

        assert!(imports.contains("face_recognition.api"));
        assert!(!imports.contains("load_image_file"));
    }

    #[test]
    fn test_bare_relative_import_yields_nothing() {
        let imports = extract("from . import helpers\n");

        assert!(imports.is_empty());
    }

    #[test]
    fn test_named_relative_import_yields_module() {
        let imports = extract("from .vision import detect\n");

        assert!(imports.contains("vision"));
    }

    #[test]
    fn test_nested_imports_are_found() {
        let source = "def lazy():\n    import torch\n    return torch\n";
        let imports = extract(source);

        assert!(imports.contains("torch"));
    }

    #[test]
    fn test_dynamic_imports_not_detected() {
        let imports = extract("mod = __import__(\"cv2\")\n");

        assert!(imports.is_empty());
    }

    #[test]
    fn test_invalid_source_is_a_parse_error() {
        let mut extractor = ImportExtractor::new().unwrap();
        let result = extractor.extract_imports("def broken(:\n");

        assert!(matches!(result, Err(AiActError::ParseError(_))));
    }
}
