//! Bundled example playgrounds and language detection for opened files

use std::path::Path;

/// One bundled example, shown as its own section
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Section tab label
    pub label: &'static str,
    /// Short hint next to the label
    pub subtitle: &'static str,
    /// Playground title
    pub title: &'static str,
    /// One-paragraph blurb shown above the playground
    pub description: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        label: "Backend",
        subtitle: "Express API",
        title: "server.js - Complete Backend",
        description: "Complete RESTful API with CRUD operations: MongoDB connection, \
                      schema definition and all four HTTP methods. Try modifying the \
                      routes or adding new endpoints.",
        language: "javascript",
        code: include_str!("server.js"),
    },
    Sample {
        label: "Frontend",
        subtitle: "React App",
        title: "App.js - React Todo Component",
        description: "Full React component with hooks for state management, form \
                      handling and async API calls with Axios. Experiment with adding \
                      filtering or search.",
        language: "javascript",
        code: include_str!("App.js"),
    },
    Sample {
        label: "Database",
        subtitle: "Mongoose Schema",
        title: "Todo.model.js - Database Schema",
        description: "Schema definition with validation, indexes, middleware and \
                      virtual properties.",
        language: "javascript",
        code: include_str!("Todo.model.js"),
    },
];

/// Highlighter language for a file, from its extension
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    let language = match ext.as_str() {
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "tsx" | "mts" => "typescript",
        "rs" => "rust",
        "py" => "python",
        "go" => "go",
        "json" => "json",
        "toml" => "toml",
        "sh" | "bash" | "zsh" => "bash",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "java" => "java",
        "md" | "markdown" => "markdown",
        _ => return None,
    };
    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_distinct_and_nonempty() {
        assert_eq!(SAMPLES.len(), 3);
        for sample in SAMPLES {
            assert!(!sample.code.is_empty(), "{} has no code", sample.label);
            assert_eq!(sample.language, "javascript");
        }
        assert!(SAMPLES[0].code.contains("app.listen(5000"));
        assert!(SAMPLES[1].code.contains("export default TodoApp;"));
        assert!(SAMPLES[2].code.contains("module.exports = Todo;"));
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(language_for_path(Path::new("server.js")), Some("javascript"));
        assert_eq!(language_for_path(Path::new("src/main.RS")), Some("rust"));
        assert_eq!(language_for_path(Path::new("Cargo.toml")), Some("toml"));
        assert_eq!(language_for_path(Path::new("notes.txt")), None);
        assert_eq!(language_for_path(Path::new("Makefile")), None);
    }
}
