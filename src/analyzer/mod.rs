//! The scoring pipeline: one generic six-category pass parameterized by a
//! per-language rule set.
//!
//! A [`Rule`] is a named heuristic evaluated uniformly: it inspects the
//! source (and the syntax tree when one is available) and either stays
//! silent or returns a [`Finding`] with a point deduction and exactly one
//! recommendation. Rule tables are static per language and evaluated in
//! fixed order, so output is deterministic for identical input.

mod javascript;
mod python;
pub mod text;

pub use javascript::JAVASCRIPT_RULES;
pub use python::PYTHON_RULES;

use crate::score::{AnalysisResult, Category, CategoryScore};
use crate::source::{LanguageKind, SourceUnit};
use crate::syntax::{self, ParseOutcome, SyntaxTree};

/// Recommendation injected when the Python source fails to parse.
const SYNTAX_ERROR_NOTE: &str = "Fix syntax errors in the code";

/// What a triggered rule reports back.
pub struct Finding {
    /// Points to subtract from the category score. May be zero: a rule can
    /// recommend without deducting.
    pub deduction: u32,
    pub recommendation: String,
}

impl Finding {
    pub fn new(deduction: u32, recommendation: impl Into<String>) -> Self {
        Self {
            deduction,
            recommendation: recommendation.into(),
        }
    }
}

/// A single heuristic check. Rules receive the syntax tree when one was
/// parsed; every current rule matches on text alone.
pub type RuleFn = fn(&SourceUnit, Option<&SyntaxTree>) -> Option<Finding>;

/// A named rule within a category table. The name identifies the rule in
/// debug output and test diagnostics.
pub struct Rule {
    pub name: &'static str,
    pub check: RuleFn,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The six category rule tables for one language.
pub struct RuleSet {
    pub naming: &'static [Rule],
    pub modularity: &'static [Rule],
    pub comments: &'static [Rule],
    pub formatting: &'static [Rule],
    pub reusability: &'static [Rule],
    pub best_practices: &'static [Rule],
}

impl RuleSet {
    pub fn for_language(kind: LanguageKind) -> &'static RuleSet {
        match kind {
            LanguageKind::JavaScript => &JAVASCRIPT_RULES,
            LanguageKind::Python => &PYTHON_RULES,
        }
    }

    /// Tables paired with their category, in evaluation order.
    pub fn categories(&self) -> [(Category, &'static [Rule]); 6] {
        [
            (Category::Naming, self.naming),
            (Category::Modularity, self.modularity),
            (Category::Comments, self.comments),
            (Category::Formatting, self.formatting),
            (Category::Reusability, self.reusability),
            (Category::BestPractices, self.best_practices),
        ]
    }
}

/// Evaluate one category table. Starts from the category max and subtracts
/// each finding's deduction, saturating at zero.
pub fn run_category(
    category: Category,
    rules: &[Rule],
    source: &SourceUnit,
    tree: Option<&SyntaxTree>,
) -> CategoryScore {
    let mut score = category.max_points();
    let mut recommendations = Vec::new();

    for rule in rules {
        if let Some(finding) = (rule.check)(source, tree) {
            score = score.saturating_sub(finding.deduction);
            recommendations.push(finding.recommendation);
        }
    }

    CategoryScore {
        score,
        recommendations,
    }
}

/// Run the full pipeline: dispatch on language, evaluate the six category
/// tables in fixed order, and assemble the result.
///
/// The core contract: given readable text and a valid language kind this
/// always returns a well-formed result. Malformed Python degrades to
/// text-only heuristics and injects [`SYNTAX_ERROR_NOTE`] ahead of the
/// category recommendations.
pub fn analyze(source: &SourceUnit, kind: LanguageKind) -> AnalysisResult {
    let mut leading = Vec::new();
    let tree = match kind {
        LanguageKind::Python => match syntax::parse_python(source.content()) {
            ParseOutcome::Tree(tree) => Some(tree),
            ParseOutcome::Invalid => {
                leading.push(SYNTAX_ERROR_NOTE.to_string());
                None
            }
            ParseOutcome::Unavailable => None,
        },
        LanguageKind::JavaScript => None,
    };

    let rules = RuleSet::for_language(kind);
    let scores: Vec<(Category, CategoryScore)> = rules
        .categories()
        .into_iter()
        .map(|(category, table)| (category, run_category(category, table, source, tree.as_ref())))
        .collect();

    AnalysisResult::assemble(leading, &scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_category_saturates_at_zero() {
        fn heavy(_: &SourceUnit, _: Option<&SyntaxTree>) -> Option<Finding> {
            Some(Finding::new(50, "too much"))
        }
        let rules = [
            Rule {
                name: "heavy_a",
                check: heavy,
            },
            Rule {
                name: "heavy_b",
                check: heavy,
            },
        ];
        let source = SourceUnit::from("x");
        let cs = run_category(Category::Naming, &rules, &source, None);
        assert_eq!(cs.score, 0);
        assert_eq!(cs.recommendations.len(), 2);
    }

    #[test]
    fn test_empty_input_scores_full_marks() {
        for kind in [LanguageKind::JavaScript, LanguageKind::Python] {
            let result = analyze(&SourceUnit::from(""), kind);
            assert_eq!(result.overall_score, 100, "language: {}", kind);
            assert!(result.recommendations.is_empty(), "language: {}", kind);
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let js = SourceUnit::from("const user_name = 1;\nconsole.log(user_name);\n");
        let first = analyze(&js, LanguageKind::JavaScript);
        let second = analyze(&js, LanguageKind::JavaScript);
        assert_eq!(first, second);

        let py = SourceUnit::from("def CamelFunc():\n    print(1)\n");
        assert_eq!(
            analyze(&py, LanguageKind::Python),
            analyze(&py, LanguageKind::Python)
        );
    }

    #[test]
    fn test_rule_names_are_unique_within_each_category() {
        for kind in [LanguageKind::JavaScript, LanguageKind::Python] {
            for (category, rules) in RuleSet::for_language(kind).categories() {
                let mut seen = std::collections::HashSet::new();
                for rule in rules {
                    assert!(!rule.name.is_empty(), "{} {:?}", category, rule);
                    assert!(
                        seen.insert(rule.name),
                        "duplicate rule in {} {}: {:?}",
                        kind,
                        category,
                        rule
                    );
                }
            }
        }
    }

    #[cfg(feature = "tree-sitter")]
    #[test]
    fn test_broken_python_leads_with_syntax_note() {
        let source = SourceUnit::from("def broken(:\n    pass\n");
        let result = analyze(&source, LanguageKind::Python);
        assert_eq!(result.all_recommendations[0], SYNTAX_ERROR_NOTE);
        // Still a well-formed result
        assert_eq!(result.overall_score, result.breakdown.total());
    }
}
