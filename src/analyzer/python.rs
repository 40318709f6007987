//! Rule tables for Python/FastAPI sources.

use lazy_static::lazy_static;
use regex::Regex;

use super::text;
use super::{Finding, Rule, RuleSet};
use crate::source::SourceUnit;
use crate::syntax::SyntaxTree;

const LONG_FUNCTION_LINES: usize = 30;
const LARGE_FILE_LINES: usize = 300;
const MAX_LINE_LENGTH: usize = 100;
const DEEP_NESTING_COLUMNS: usize = 16;
const TRAILING_WHITESPACE_LIMIT: usize = 5;
const UTILITY_FILE_LINES: usize = 100;
const UTILITY_MIN_FUNCTIONS: usize = 3;
const STYLE_CONSISTENCY_SHARE: f64 = 0.8;

lazy_static! {
    static ref CAMEL_CASE_VAR: Regex =
        Regex::new(r"([a-z]+[A-Z][a-zA-Z0-9]*)\s*=").unwrap();
    static ref PASCAL_CASE_VAR: Regex =
        Regex::new(r"([A-Z][a-z]+[A-Za-z0-9]*)\s*=").unwrap();
    static ref CAMEL_CASE_DEF: Regex =
        Regex::new(r"def\s+([a-z]+[A-Z][a-zA-Z0-9]*)\s*\(").unwrap();
    static ref PASCAL_CASE_DEF: Regex =
        Regex::new(r"def\s+([A-Z][a-z]+[a-zA-Z0-9]*)\s*\(").unwrap();

    /// Lowercase name assigned a literal value.
    static ref LITERAL_ASSIGNMENT: Regex = Regex::new(
        r#"([a-z][A-Za-z0-9_]*)\s*=\s*(?:True|False|None|['"]{1,3}[^'"]*['"]{1,3}|\d+)"#
    )
    .unwrap();

    static ref LOWERCASE_CLASS: Regex =
        Regex::new(r"class\s+([a-z][a-zA-Z0-9_]*)\s*[:(]").unwrap();

    /// A def header and its indented body.
    static ref FUNCTION_BLOCK: Regex = Regex::new(
        r"def\s+[a-zA-Z0-9_]+\s*\([^)]*\)(?:\s*->.*?)?\s*:\s*((?:\n\s+.*)+)"
    )
    .unwrap();

    /// A def whose parameter list spans 40+ characters.
    static ref MANY_ARGS: Regex = Regex::new(
        r"def\s+([a-zA-Z0-9_]+)\s*\(([^)]{40,})\)"
    )
    .unwrap();

    static ref PY_DEF: Regex = Regex::new(r"def\s+[a-zA-Z0-9_]+\s*\(").unwrap();
    static ref PY_CLASS: Regex = Regex::new(r"class\s+[a-zA-Z0-9_]+").unwrap();
    static ref DOCSTRING: Regex =
        Regex::new(r#"(?s)"{3}.*?"{3}|'{3}.*?'{3}"#).unwrap();
    static ref HASH_COMMENT: Regex = Regex::new(r"(?m)^\s*#.*$").unwrap();

    /// A comment line that starts with a statement keyword.
    static ref COMMENTED_CODE: Regex = Regex::new(
        r"(?m)^\s*#\s*(def|class|if|for|while|return|import)"
    )
    .unwrap();

    static ref SINGLE_QUOTED: Regex = Regex::new(r"'[^']*'").unwrap();
    static ref DOUBLE_QUOTED: Regex = Regex::new(r#""[^"]*""#).unwrap();

    /// An integer literal with non-identifier characters on both sides.
    static ref MAGIC_NUMBER: Regex =
        Regex::new(r"[^_a-zA-Z0-9](\d+)[^_a-zA-Z0-9]").unwrap();

    /// Route decorator whose path contains `{...}` parameters.
    static ref ROUTE_PATH: Regex = Regex::new(
        r#"@\w+\.(?:get|post|put|delete)\s*\(["']([^"']*\{[^}]*\}[^"']*)["']"#
    )
    .unwrap();
    static ref PATH_PARAM: Regex = Regex::new(r"\{([^}:]*)\}").unwrap();
    static ref TYPED_PATH_PARAM: Regex = Regex::new(r"\{([^}:]*:[^}]*)\}").unwrap();

    static ref PRINT_CALL: Regex = Regex::new(r"print\s*\(").unwrap();
    static ref TRY_STATEMENT: Regex = Regex::new(r"try\s*:").unwrap();
    static ref EXCEPT_CLAUSE: Regex = Regex::new(r"except\s+").unwrap();
    static ref BARE_EXCEPT: Regex = Regex::new(r"except\s*:").unwrap();
    static ref WILDCARD_IMPORT: Regex =
        Regex::new(r"from\s+[a-zA-Z0-9_.]+\s+import\s+\*").unwrap();

    static ref DEF_WITH_PARAMS: Regex = Regex::new(
        r"def\s+[a-zA-Z0-9_]+\s*\(([^)]*)\)(?:\s*->.*?)?:"
    )
    .unwrap();
    static ref DEF_WITH_RETURN_HINT: Regex =
        Regex::new(r"def\s+[a-zA-Z0-9_]+\s*\([^)]*\)\s*->").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"[a-zA-Z0-9_]+").unwrap();
}

pub static PYTHON_RULES: RuleSet = RuleSet {
    naming: &[
        Rule {
            name: "snake_case_names",
            check: snake_case_names,
        },
        Rule {
            name: "uppercase_constants",
            check: uppercase_constants,
        },
        Rule {
            name: "class_naming",
            check: class_naming,
        },
    ],
    modularity: &[
        Rule {
            name: "long_functions",
            check: long_functions,
        },
        Rule {
            name: "long_parameter_lists",
            check: long_parameter_lists,
        },
        Rule {
            name: "deep_nesting",
            check: deep_nesting,
        },
        Rule {
            name: "large_file",
            check: large_file,
        },
    ],
    comments: &[
        Rule {
            name: "missing_docstrings",
            check: missing_docstrings,
        },
        Rule {
            name: "sparse_comments",
            check: sparse_comments,
        },
        Rule {
            name: "commented_out_code",
            check: commented_out_code,
        },
        Rule {
            name: "module_docstring",
            check: module_docstring,
        },
    ],
    formatting: &[
        Rule {
            name: "pep8_indentation",
            check: pep8_indentation,
        },
        Rule {
            name: "long_lines",
            check: long_lines,
        },
        Rule {
            name: "trailing_whitespace",
            check: trailing_whitespace,
        },
        Rule {
            name: "quote_consistency",
            check: quote_consistency,
        },
    ],
    reusability: &[
        Rule {
            name: "duplicated_blocks",
            check: duplicated_blocks,
        },
        Rule {
            name: "magic_numbers",
            check: magic_numbers,
        },
        Rule {
            name: "missing_utilities",
            check: missing_utilities,
        },
    ],
    best_practices: &[
        Rule {
            name: "untyped_path_parameters",
            check: untyped_path_parameters,
        },
        Rule {
            name: "missing_response_model",
            check: missing_response_model,
        },
        Rule {
            name: "print_statements",
            check: print_statements,
        },
        Rule {
            name: "missing_except_blocks",
            check: missing_except_blocks,
        },
        Rule {
            name: "bare_except_clauses",
            check: bare_except_clauses,
        },
        Rule {
            name: "wildcard_imports",
            check: wildcard_imports,
        },
        Rule {
            name: "missing_return_annotations",
            check: missing_return_annotations,
        },
        Rule {
            name: "missing_param_annotations",
            check: missing_param_annotations,
        },
    ],
};

/// Whether the file imports FastAPI.
fn is_fastapi(content: &str) -> bool {
    content.contains("from fastapi import") || content.contains("import fastapi")
}

// ---------------------------------------------------------------------------
// Naming (max 10)
// ---------------------------------------------------------------------------

fn snake_case_names(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    let mut offenders: Vec<String> = Vec::new();
    for re in [
        &*CAMEL_CASE_VAR,
        &*PASCAL_CASE_VAR,
        &*CAMEL_CASE_DEF,
        &*PASCAL_CASE_DEF,
    ] {
        for cap in re.captures_iter(content) {
            if let Some(m) = cap.get(1) {
                offenders.push(m.as_str().to_string());
            }
        }
    }
    if offenders.is_empty() {
        return None;
    }
    let shown = offenders.len().min(3);
    Some(Finding::new(
        (offenders.len() as u32).min(5),
        format!(
            "Use snake_case for variable and function names (found: {})",
            text::join_examples(&offenders[..shown])
        ),
    ))
}

fn uppercase_constants(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let mut count = 0usize;
    for cap in LITERAL_ASSIGNMENT.captures_iter(source.content()) {
        let Some(name) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        // Only assignments made at column zero count as module-level constants.
        let module_level = source.lines().iter().any(|line| {
            line.strip_prefix(name)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        });
        if module_level {
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(3),
        "Use UPPERCASE for constant values",
    ))
}

fn class_naming(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&LOWERCASE_CLASS, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(2),
        "Use PascalCase for class names",
    ))
}

// ---------------------------------------------------------------------------
// Modularity (max 20)
// ---------------------------------------------------------------------------

fn long_functions(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let long = FUNCTION_BLOCK
        .captures_iter(source.content())
        .filter_map(|cap| cap.get(1))
        .filter(|body| body.as_str().matches('\n').count() + 1 > LONG_FUNCTION_LINES)
        .count();
    if long == 0 {
        return None;
    }
    Some(Finding::new(
        (3 * long as u32).min(10),
        format!(
            "Break down functions that are too long (found {} functions over {} lines)",
            long, LONG_FUNCTION_LINES
        ),
    ))
}

fn long_parameter_lists(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&MANY_ARGS, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(5),
        "Reduce the number of arguments in functions",
    ))
}

fn deep_nesting(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if text::max_indent(source.lines(), &["#"]) <= DEEP_NESTING_COLUMNS {
        return None;
    }
    Some(Finding::new(
        5,
        "Reduce nesting depth in conditions and loops",
    ))
}

fn large_file(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if source.line_count() <= LARGE_FILE_LINES {
        return None;
    }
    Some(Finding::new(
        5,
        "Consider splitting this large file into multiple modules",
    ))
}

// ---------------------------------------------------------------------------
// Comments (max 20)
// ---------------------------------------------------------------------------

fn missing_docstrings(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    let functions = text::count_matches(&PY_DEF, content);
    let classes = text::count_matches(&PY_CLASS, content);
    let docstrings = text::count_matches(&DOCSTRING, content);
    if functions == 0 || docstrings >= functions + classes {
        return None;
    }
    Some(Finding::new(
        (2 * (functions + classes - docstrings) as u32).min(10),
        "Add docstrings to document functions and classes",
    ))
}

fn sparse_comments(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    let comments =
        text::count_matches(&HASH_COMMENT, content) + text::count_matches(&DOCSTRING, content);
    let ratio = source.line_count() as f64 / comments.max(1) as f64;
    if ratio <= 15.0 {
        return None;
    }
    Some(Finding::new(
        5,
        format!(
            "Add more comments to explain complex logic (current ratio: 1 comment per ~{:.1} lines)",
            ratio
        ),
    ))
}

fn commented_out_code(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&COMMENTED_CODE, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(5),
        "Remove commented-out code that is no longer needed",
    ))
}

fn module_docstring(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let head = source.content().trim_start();
    if head.is_empty() || head.starts_with("\"\"\"") || head.starts_with("'''") {
        return None;
    }
    Some(Finding::new(
        3,
        "Add a module-level docstring at the beginning of the file",
    ))
}

// ---------------------------------------------------------------------------
// Formatting (max 15)
// ---------------------------------------------------------------------------

fn pep8_indentation(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let widths = text::indent_widths(source.lines(), &["#"]);
    if widths.is_empty() || widths.iter().all(|w| w % 4 == 0) {
        return None;
    }
    Some(Finding::new(
        5,
        "Use consistent indentation (4 spaces per PEP8)",
    ))
}

fn long_lines(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let numbers = text::long_line_numbers(source.lines(), MAX_LINE_LENGTH);
    if numbers.is_empty() {
        return None;
    }
    let listed: Vec<String> = numbers.iter().take(3).map(|n| n.to_string()).collect();
    Some(Finding::new(
        (numbers.len() as u32).min(5),
        format!(
            "Break down long lines that exceed {} characters (found on lines: {})",
            MAX_LINE_LENGTH,
            listed.join(", ")
        ),
    ))
}

fn trailing_whitespace(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = source
        .lines()
        .iter()
        .filter(|line| !line.is_empty() && line.len() != line.trim_end().len())
        .count();
    if count <= TRAILING_WHITESPACE_LIMIT {
        return None;
    }
    Some(Finding::new(2, "Remove trailing whitespace from lines"))
}

fn quote_consistency(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    let singles = text::count_matches(&SINGLE_QUOTED, content);
    let doubles = text::count_matches(&DOUBLE_QUOTED, content);
    if singles == 0 || doubles == 0 {
        return None;
    }
    let share = singles.max(doubles) as f64 / (singles + doubles) as f64;
    if share >= STYLE_CONSISTENCY_SHARE {
        return None;
    }
    Some(Finding::new(
        3,
        "Be consistent with string quotes (either single or double)",
    ))
}

// ---------------------------------------------------------------------------
// Reusability (max 15)
// ---------------------------------------------------------------------------

fn duplicated_blocks(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let blocks = text::code_blocks(source.lines(), &["#"], 3);
    let duplicates = text::duplicate_block_count(&blocks);
    if duplicates == 0 {
        return None;
    }
    Some(Finding::new(
        (2 * duplicates as u32).min(7),
        "Extract repeated code blocks into reusable functions",
    ))
}

fn magic_numbers(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = MAGIC_NUMBER
        .captures_iter(source.content())
        .filter(|cap| {
            cap.get(1)
                .map(|m| !matches!(m.as_str(), "0" | "1" | "2"))
                .unwrap_or(false)
        })
        .count();
    if count <= 5 {
        return None;
    }
    Some(Finding::new(
        (((count - 5) / 2) as u32).min(4),
        "Replace magic numbers with named constants",
    ))
}

fn missing_utilities(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if source.line_count() <= UTILITY_FILE_LINES {
        return None;
    }
    if text::count_matches(&PY_DEF, source.content()) >= UTILITY_MIN_FUNCTIONS {
        return None;
    }
    Some(Finding::new(
        4,
        "Create utility functions for common operations",
    ))
}

// ---------------------------------------------------------------------------
// Best practices (max 20)
// ---------------------------------------------------------------------------

fn untyped_path_parameters(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !is_fastapi(content) {
        return None;
    }
    let mut missing = 0usize;
    for cap in ROUTE_PATH.captures_iter(content) {
        let Some(path) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let params = text::count_matches(&PATH_PARAM, path);
        let typed = text::count_matches(&TYPED_PATH_PARAM, path);
        if params > typed {
            missing += 1;
        }
    }
    if missing == 0 {
        return None;
    }
    Some(Finding::new(
        (2 * missing as u32).min(4),
        "Add type hints to path parameters in FastAPI routes",
    ))
}

fn missing_response_model(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !is_fastapi(content)
        || !content.contains("def")
        || !content.contains("@app.")
        || content.contains("response_model=")
    {
        return None;
    }
    Some(Finding::new(
        3,
        "Use response_model parameter in FastAPI route decorators for better API documentation",
    ))
}

fn print_statements(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&PRINT_CALL, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(3),
        "Replace print statements with proper logging",
    ))
}

fn missing_except_blocks(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !TRY_STATEMENT.is_match(content) || EXCEPT_CLAUSE.is_match(content) {
        return None;
    }
    Some(Finding::new(
        3,
        "Add proper exception handling (except blocks) after try statements",
    ))
}

fn bare_except_clauses(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if !BARE_EXCEPT.is_match(source.content()) {
        return None;
    }
    Some(Finding::new(
        3,
        "Avoid bare 'except:' clauses; catch specific exceptions",
    ))
}

fn wildcard_imports(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if !WILDCARD_IMPORT.is_match(source.content()) {
        return None;
    }
    Some(Finding::new(
        2,
        "Avoid wildcard imports (from module import *)",
    ))
}

fn missing_return_annotations(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    let defs = text::count_matches(&DEF_WITH_PARAMS, content);
    if defs == 0 {
        return None;
    }
    let hinted = text::count_matches(&DEF_WITH_RETURN_HINT, content);
    if (hinted as f64) >= defs as f64 / 2.0 {
        return None;
    }
    Some(Finding::new(3, "Add return type hints to functions"))
}

fn missing_param_annotations(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let mut annotated = 0usize;
    let mut total = 0usize;
    for cap in DEF_WITH_PARAMS.captures_iter(source.content()) {
        let Some(params) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if params.trim().is_empty() {
            continue;
        }
        annotated += params.matches(':').count();
        total += IDENTIFIER.find_iter(params).count();
    }
    if total <= 5 || (annotated as f64) >= total as f64 / 2.0 {
        return None;
    }
    Some(Finding::new(2, "Add type annotations to function parameters"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(content: &str) -> SourceUnit {
        SourceUnit::from(content)
    }

    #[test]
    fn test_snake_case_names_lists_examples() {
        let source = src("myVar = 1\ndef CalcTotal():\n    pass\n");
        let finding = snake_case_names(&source, None).unwrap();
        // "myVar =" is caught twice: as a camelCase name and again as the
        // capitalized "Var" suffix
        assert_eq!(finding.deduction, 3);
        assert!(finding.recommendation.contains("myVar, Var, CalcTotal"));

        assert!(snake_case_names(&src("my_var = 1\n"), None).is_none());
    }

    #[test]
    fn test_uppercase_constants_only_at_module_level() {
        let source = src("timeout = 30\n\ndef f():\n    local = 1\n    return local\n");
        assert_eq!(uppercase_constants(&source, None).unwrap().deduction, 1);

        let indented_only = src("def f():\n    local = 1\n    return local\n");
        assert!(uppercase_constants(&indented_only, None).is_none());
    }

    #[test]
    fn test_class_naming() {
        let source = src("class dataStore:\n    pass\n");
        assert_eq!(class_naming(&source, None).unwrap().deduction, 1);
        assert!(class_naming(&src("class DataStore:\n    pass\n"), None).is_none());
    }

    #[test]
    fn test_long_functions() {
        let body = "    x = step()\n".repeat(35);
        let source = src(&format!("def big():\n{}", body));
        let finding = long_functions(&source, None).unwrap();
        assert_eq!(finding.deduction, 3);

        let small = src("def small():\n    return 1\n");
        assert!(long_functions(&small, None).is_none());
    }

    #[test]
    fn test_long_parameter_lists() {
        let source = src(
            "def configure(alpha_value, beta_value, gamma_value, delta_value):\n    pass\n",
        );
        assert_eq!(long_parameter_lists(&source, None).unwrap().deduction, 1);
    }

    #[test]
    fn test_deep_nesting_by_indent() {
        let source = src("def f():\n                    x = 1\n");
        assert_eq!(deep_nesting(&source, None).unwrap().deduction, 5);

        let shallow = src("def f():\n    x = 1\n");
        assert!(deep_nesting(&shallow, None).is_none());
    }

    #[test]
    fn test_missing_docstrings() {
        let source = src("def a():\n    pass\n\ndef b():\n    pass\n");
        assert_eq!(missing_docstrings(&source, None).unwrap().deduction, 4);

        let documented = src("def a():\n    \"\"\"Doc.\"\"\"\n    pass\n");
        assert!(missing_docstrings(&documented, None).is_none());
    }

    #[test]
    fn test_module_docstring() {
        assert_eq!(module_docstring(&src("x = 1\n"), None).unwrap().deduction, 3);
        assert!(module_docstring(&src("\"\"\"Module doc.\"\"\"\nx = 1\n"), None).is_none());
        // Blank files have nothing to document
        assert!(module_docstring(&src(""), None).is_none());
        assert!(module_docstring(&src("   \n"), None).is_none());
    }

    #[test]
    fn test_commented_out_code() {
        let source = src("# def old():\n#     return 1\ny = 2\n");
        assert_eq!(commented_out_code(&source, None).unwrap().deduction, 2);
    }

    #[test]
    fn test_pep8_indentation() {
        let three = src("def f():\n   pass\n");
        assert_eq!(pep8_indentation(&three, None).unwrap().deduction, 5);

        let four = src("def f():\n    pass\n");
        assert!(pep8_indentation(&four, None).is_none());
    }

    #[test]
    fn test_trailing_whitespace_over_limit() {
        let dirty = "x = 1 \n".repeat(6);
        assert_eq!(trailing_whitespace(&src(&dirty), None).unwrap().deduction, 2);

        let barely = "x = 1 \n".repeat(5);
        assert!(trailing_whitespace(&src(&barely), None).is_none());
    }

    #[test]
    fn test_quote_consistency() {
        let mixed = src("a = 'x'\nb = 'y'\nc = 'z'\nd = 'w'\ne = \"q\"\nf = \"r\"\n");
        assert_eq!(quote_consistency(&mixed, None).unwrap().deduction, 3);

        let uniform = src("a = 'x'\nb = 'y'\n");
        assert!(quote_consistency(&uniform, None).is_none());
    }

    #[test]
    fn test_duplicated_blocks() {
        let source = src("a()\nb()\nc()\n\na()\nb()\nc()\n");
        assert_eq!(duplicated_blocks(&source, None).unwrap().deduction, 2);
    }

    #[test]
    fn test_magic_numbers_excludes_small_literals() {
        let counted = src("x = 99\ny = 47\nz = 88\nu = 73\nv = 64\nw = 55\np = 42\nq = 33\nr = 27\n");
        assert_eq!(magic_numbers(&counted, None).unwrap().deduction, 2);

        let small = src("x = 0\ny = 1\nz = 2\n");
        assert!(magic_numbers(&small, None).is_none());
    }

    #[test]
    fn test_untyped_path_parameters() {
        let source = src(
            "from fastapi import FastAPI\n\n@app.get(\"/users/{user_id}\")\ndef get_user(user_id):\n    return user_id\n",
        );
        assert_eq!(untyped_path_parameters(&source, None).unwrap().deduction, 2);

        let typed = src(
            "from fastapi import FastAPI\n\n@app.get(\"/users/{user_id:int}\")\ndef get_user(user_id):\n    return user_id\n",
        );
        assert!(untyped_path_parameters(&typed, None).is_none());
    }

    #[test]
    fn test_missing_response_model() {
        let source = src(
            "from fastapi import FastAPI\n\n@app.get(\"/health\")\ndef health():\n    return {}\n",
        );
        assert_eq!(missing_response_model(&source, None).unwrap().deduction, 3);
    }

    #[test]
    fn test_print_statements_cap() {
        let source = src("print(1)\nprint(2)\nprint(3)\nprint(4)\n");
        assert_eq!(print_statements(&source, None).unwrap().deduction, 3);
    }

    #[test]
    fn test_try_without_except() {
        let source = src("try:\n    risky()\n");
        assert_eq!(missing_except_blocks(&source, None).unwrap().deduction, 3);

        let handled = src("try:\n    risky()\nexcept ValueError:\n    pass\n");
        assert!(missing_except_blocks(&handled, None).is_none());
    }

    #[test]
    fn test_bare_except() {
        let source = src("try:\n    risky()\nexcept:\n    pass\n");
        assert_eq!(bare_except_clauses(&source, None).unwrap().deduction, 3);
    }

    #[test]
    fn test_wildcard_imports() {
        assert_eq!(
            wildcard_imports(&src("from os.path import *\n"), None)
                .unwrap()
                .deduction,
            2
        );
    }

    #[test]
    fn test_missing_return_annotations() {
        let source = src("def a(x):\n    return x\n\ndef b(y):\n    return y\n");
        assert_eq!(
            missing_return_annotations(&source, None).unwrap().deduction,
            3
        );

        let hinted = src("def a(x) -> int:\n    return x\n\ndef b(y) -> int:\n    return y\n");
        assert!(missing_return_annotations(&hinted, None).is_none());
    }

    #[test]
    fn test_missing_param_annotations() {
        let source = src("def f(a, b, c, d, e, g):\n    pass\n");
        assert_eq!(
            missing_param_annotations(&source, None).unwrap().deduction,
            2
        );

        let annotated = src(
            "def f(a: int, b: int, c: int, d: int, e: int, g: int):\n    pass\n",
        );
        assert!(missing_param_annotations(&annotated, None).is_none());
    }
}
