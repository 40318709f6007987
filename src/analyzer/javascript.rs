//! Rule tables for JavaScript/React sources.
//!
//! Heuristics are regex and line based, tolerant of false positives. Each
//! rule deducts a capped amount and contributes one recommendation no matter
//! how many occurrences it finds.

use lazy_static::lazy_static;
use regex::Regex;

use super::text;
use super::{Finding, Rule, RuleSet};
use crate::source::SourceUnit;
use crate::syntax::SyntaxTree;

const LONG_FUNCTION_LINES: usize = 30;
const LARGE_FILE_LINES: usize = 300;
const MAX_LINE_LENGTH: usize = 100;
const OVERSIZED_COMPONENT_LINES: usize = 100;
const UTILITY_FILE_LINES: usize = 100;
const UTILITY_MIN_FUNCTIONS: usize = 3;
const STYLE_CONSISTENCY_SHARE: f64 = 0.8;

lazy_static! {
    /// `let/var/const` names that are PascalCase or snake_case.
    static ref NON_CAMEL_VAR: Regex = Regex::new(
        r"(?:let|var|const)\s+([A-Z][a-zA-Z0-9_]*|[a-z][a-z0-9_]*_[a-z0-9_]*)\s*="
    )
    .unwrap();

    /// Function/arrow declarations whose name starts lowercase.
    static ref LOWERCASE_COMPONENT_DECL: Regex = Regex::new(
        r"(?:function|const)\s+([a-z][a-zA-Z0-9_]*)\s*(?:=\s*\([^)]*\)\s*=>|\([^)]*\)\s*\{)"
    )
    .unwrap();

    /// Lowercase `const` bound to an uppercase-looking literal.
    static ref LOWERCASE_CONSTANT: Regex = Regex::new(
        r#"const\s+([a-z][a-zA-Z0-9_]*)\s*=\s*['"]?[A-Z0-9_]+['"]?"#
    )
    .unwrap();

    /// Brace-delimited function forms (declaration, arrow, expression).
    static ref FUNCTION_BLOCK: Regex = Regex::new(
        r"(?s)function\s+\w+\s*\([^)]*\)\s*\{[^}]*\}|const\s+\w+\s*=\s*(?:\([^)]*\)|function\s*)\s*=>\s*\{[^}]*\}|const\s+\w+\s*=\s*function\s*\([^)]*\)\s*\{[^}]*\}"
    )
    .unwrap();

    /// Triple-nested braces following an `if`.
    static ref NESTED_BRACES: Regex = Regex::new(
        r"if\s*\([^)]*\)\s*\{(?:[^{}]|\{[^{}]*\})*\{(?:[^{}]|\{[^{}]*\})*\{[^}]*\}"
    )
    .unwrap();

    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)^\s*//.*$").unwrap();
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    static ref JSDOC_COMMENT: Regex = Regex::new(r"(?s)/\*\*.*?\*/").unwrap();

    /// Named functions plus arrow/function expressions bound to a const.
    static ref FUNCTION_DECL: Regex = Regex::new(
        r"function\s+\w+|const\s+\w+\s*=\s*(?:function|\([^)]*\)\s*=>)"
    )
    .unwrap();

    /// A comment line that starts with a statement keyword.
    static ref COMMENTED_CODE: Regex = Regex::new(
        r"(?m)^\s*//\s*(const|let|var|function|if|for|while)"
    )
    .unwrap();

    static ref SEMICOLON_LINE_END: Regex = Regex::new(r"(?m);\s*$").unwrap();
    static ref STATEMENT_NO_SEMICOLON: Regex = Regex::new(
        r"(?m)(const|let|var|return|await).*[^;]\s*$"
    )
    .unwrap();

    /// Quoted object keys and quoted string assignments.
    static ref HARDCODED_VALUE: Regex = Regex::new(
        r#"["']\w+["']\s*:|=\s*["'][^"']+["']"#
    )
    .unwrap();

    static ref UTILITY_FUNCTION_DECL: Regex = Regex::new(
        r"function\s+\w+|const\s+\w+\s*=\s*function"
    )
    .unwrap();

    /// `useEffect` with a body but no trailing dependency array.
    static ref USE_EFFECT_NO_DEPS: Regex = Regex::new(
        r"useEffect\(\s*\(\)\s*=>\s*\{[^}]*\}\s*\)"
    )
    .unwrap();

    /// Capitalized declarations whose body returns JSX.
    static ref COMPONENT_WITH_RETURN: Regex = Regex::new(
        r"(?s)(?:function|const)\s+([A-Z]\w*)[^{]*\{[^}]*return\s*\(.*?\);"
    )
    .unwrap();

    static ref CONSOLE_LOG: Regex = Regex::new(r"console\.log\(").unwrap();
    static ref TRY_BLOCK: Regex = Regex::new(r"try\s*\{").unwrap();
    static ref PROMISE_THEN: Regex = Regex::new(r"\.then\(").unwrap();
    static ref ASYNC_USAGE: Regex = Regex::new(r"async\s+\w+|async\s*\(").unwrap();

    static ref NESTED_PROPERTY_ACCESS: Regex = Regex::new(r"\.\w+\s*\.\w+").unwrap();
    static ref GUARDED_ACCESS: Regex = Regex::new(r"[?!]\.\w+").unwrap();
}

pub static JAVASCRIPT_RULES: RuleSet = RuleSet {
    naming: &[
        Rule {
            name: "camel_case_variables",
            check: camel_case_variables,
        },
        Rule {
            name: "pascal_case_components",
            check: pascal_case_components,
        },
        Rule {
            name: "all_caps_constants",
            check: all_caps_constants,
        },
    ],
    modularity: &[
        Rule {
            name: "long_functions",
            check: long_functions,
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
            name: "missing_jsdoc",
            check: missing_jsdoc,
        },
        Rule {
            name: "sparse_comments",
            check: sparse_comments,
        },
        Rule {
            name: "commented_out_code",
            check: commented_out_code,
        },
    ],
    formatting: &[
        Rule {
            name: "inconsistent_indentation",
            check: inconsistent_indentation,
        },
        Rule {
            name: "inconsistent_semicolons",
            check: inconsistent_semicolons,
        },
        Rule {
            name: "long_lines",
            check: long_lines,
        },
    ],
    reusability: &[
        Rule {
            name: "duplicated_blocks",
            check: duplicated_blocks,
        },
        Rule {
            name: "hardcoded_values",
            check: hardcoded_values,
        },
        Rule {
            name: "missing_utilities",
            check: missing_utilities,
        },
    ],
    best_practices: &[
        Rule {
            name: "use_effect_dependencies",
            check: use_effect_dependencies,
        },
        Rule {
            name: "oversized_components",
            check: oversized_components,
        },
        Rule {
            name: "console_logging",
            check: console_logging,
        },
        Rule {
            name: "async_error_handling",
            check: async_error_handling,
        },
        Rule {
            name: "unguarded_nested_access",
            check: unguarded_nested_access,
        },
        Rule {
            name: "image_alt_attributes",
            check: image_alt_attributes,
        },
        Rule {
            name: "button_aria_attributes",
            check: button_aria_attributes,
        },
    ],
};

/// Whether the file imports React.
fn is_react(content: &str) -> bool {
    content.contains("import React")
        || content.contains("from \"react\"")
        || content.contains("from 'react'")
}

/// Whether the file looks React-flavored even without an explicit import.
fn looks_like_react(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|line| line.contains("render") || line.contains("return <") || line.contains("React"))
}

// ---------------------------------------------------------------------------
// Naming (max 10)
// ---------------------------------------------------------------------------

fn camel_case_variables(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&NON_CAMEL_VAR, source.content());
    if count == 0 {
        return None;
    }
    let examples = text::captured_names(&NON_CAMEL_VAR, source.content(), 3);
    Some(Finding::new(
        (count as u32).min(5),
        format!(
            "Use camelCase for variable names (found: {})",
            text::join_examples(&examples)
        ),
    ))
}

fn pascal_case_components(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&LOWERCASE_COMPONENT_DECL, source.content());
    if count == 0 || !looks_like_react(source.lines()) {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(3),
        "Use PascalCase for React component names",
    ))
}

fn all_caps_constants(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&LOWERCASE_CONSTANT, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(2),
        "Consider using ALL_CAPS for constant values",
    ))
}

// ---------------------------------------------------------------------------
// Modularity (max 20)
// ---------------------------------------------------------------------------

fn long_functions(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let long = FUNCTION_BLOCK
        .find_iter(source.content())
        .filter(|m| m.as_str().matches('\n').count() + 1 > LONG_FUNCTION_LINES)
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

fn deep_nesting(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&NESTED_BRACES, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (2 * count as u32).min(5),
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

fn missing_jsdoc(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let functions = text::count_matches(&FUNCTION_DECL, source.content());
    let jsdoc = text::count_matches(&JSDOC_COMMENT, source.content());
    if functions <= jsdoc {
        return None;
    }
    Some(Finding::new(
        (2 * (functions - jsdoc) as u32).min(10),
        "Add JSDoc comments to document functions and their parameters",
    ))
}

fn sparse_comments(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let single = text::count_matches(&LINE_COMMENT, source.content());
    let block = text::count_matches(&BLOCK_COMMENT, source.content());
    let ratio = source.line_count() as f64 / (single + block).max(1) as f64;
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

// ---------------------------------------------------------------------------
// Formatting (max 15)
// ---------------------------------------------------------------------------

fn inconsistent_indentation(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let widths = text::indent_widths(source.lines(), &["//"]);
    if widths.is_empty() {
        return None;
    }
    let by_two = widths.iter().all(|w| w % 2 == 0);
    let by_four = widths.iter().all(|w| w % 4 == 0);
    if by_two || by_four {
        return None;
    }
    Some(Finding::new(5, "Use consistent indentation (2 or 4 spaces)"))
}

fn inconsistent_semicolons(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let with = text::count_matches(&SEMICOLON_LINE_END, source.content());
    let without = text::count_matches(&STATEMENT_NO_SEMICOLON, source.content());
    let total = with + without;
    if total == 0 {
        return None;
    }
    let share = with.max(without) as f64 / total as f64;
    if share >= STYLE_CONSISTENCY_SHARE {
        return None;
    }
    Some(Finding::new(5, "Be consistent with semicolon usage"))
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

// ---------------------------------------------------------------------------
// Reusability (max 15)
// ---------------------------------------------------------------------------

fn duplicated_blocks(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let blocks = text::code_blocks(source.lines(), &["//", "/*"], 3);
    let duplicates = text::duplicate_block_count(&blocks);
    if duplicates == 0 {
        return None;
    }
    Some(Finding::new(
        (2 * duplicates as u32).min(7),
        "Extract repeated code blocks into reusable functions",
    ))
}

fn hardcoded_values(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&HARDCODED_VALUE, source.content());
    if count <= 5 {
        return None;
    }
    Some(Finding::new(
        (((count - 5) / 2) as u32).min(4),
        "Extract hardcoded strings/values into named constants",
    ))
}

fn missing_utilities(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if source.line_count() <= UTILITY_FILE_LINES {
        return None;
    }
    if text::count_matches(&UTILITY_FUNCTION_DECL, source.content()) >= UTILITY_MIN_FUNCTIONS {
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

fn use_effect_dependencies(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    if !is_react(source.content()) {
        return None;
    }
    let count = text::count_matches(&USE_EFFECT_NO_DEPS, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(5),
        "Specify dependency arrays in useEffect hooks",
    ))
}

fn oversized_components(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !is_react(content) {
        return None;
    }

    let mut large: Vec<String> = Vec::new();
    for cap in COMPONENT_WITH_RETURN.captures_iter(content) {
        let Some(name) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        // Re-anchor on the component name to measure its full span.
        let pattern = format!(
            r"(?s){}[^{{]*\{{.*?return\s*\(.*?\);",
            regex::escape(name)
        );
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        if let Some(m) = re.find(content) {
            if m.as_str().matches('\n').count() > OVERSIZED_COMPONENT_LINES {
                large.push(name.to_string());
            }
        }
    }
    if large.is_empty() {
        return None;
    }
    let named: Vec<&str> = large.iter().take(2).map(String::as_str).collect();
    Some(Finding::new(
        (large.len() as u32).min(5),
        format!(
            "Break down large React components ({}) into smaller ones",
            named.join(", ")
        ),
    ))
}

fn console_logging(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let count = text::count_matches(&CONSOLE_LOG, source.content());
    if count == 0 {
        return None;
    }
    Some(Finding::new(
        (count as u32).min(3),
        "Remove console.log statements before production",
    ))
}

fn async_error_handling(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    let has_async = PROMISE_THEN.is_match(content) || ASYNC_USAGE.is_match(content);
    if !has_async || TRY_BLOCK.is_match(content) {
        return None;
    }
    Some(Finding::new(
        4,
        "Add error handling for asynchronous operations",
    ))
}

fn unguarded_nested_access(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !NESTED_PROPERTY_ACCESS.is_match(content) || GUARDED_ACCESS.is_match(content) {
        return None;
    }
    Some(Finding::new(
        3,
        "Add null/undefined checks for nested object properties",
    ))
}

fn image_alt_attributes(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !is_react(content) || !content.contains("<img") || content.contains("alt=") {
        return None;
    }
    Some(Finding::new(
        3,
        "Add alt attributes to img elements for accessibility",
    ))
}

fn button_aria_attributes(source: &SourceUnit, _tree: Option<&SyntaxTree>) -> Option<Finding> {
    let content = source.content();
    if !is_react(content) || !content.contains("<button") || content.contains("aria-") {
        return None;
    }
    Some(Finding::new(
        2,
        "Add ARIA attributes for better accessibility",
    ))
}
