//! Score types and aggregation.
//!
//! Six fixed categories, each with a point maximum; the maxima sum to 100.
//! Category analyzers produce one [`CategoryScore`] each, and
//! [`AnalysisResult::assemble`] combines them into the final result.

use serde::{Deserialize, Serialize};

/// Most recommendations shown to the caller. Everything past this is kept in
/// [`AnalysisResult::all_recommendations`] but dropped from serialized output.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// One of the six fixed code-quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Naming,
    Modularity,
    Comments,
    Formatting,
    Reusability,
    BestPractices,
}

impl Category {
    /// All categories in evaluation (and reporting) order.
    pub const ALL: [Category; 6] = [
        Category::Naming,
        Category::Modularity,
        Category::Comments,
        Category::Formatting,
        Category::Reusability,
        Category::BestPractices,
    ];

    /// Point maximum awarded within this category.
    pub fn max_points(&self) -> u32 {
        match self {
            Category::Naming => 10,
            Category::Modularity => 20,
            Category::Comments => 20,
            Category::Formatting => 15,
            Category::Reusability => 15,
            Category::BestPractices => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Naming => "naming",
            Category::Modularity => "modularity",
            Category::Comments => "comments",
            Category::Formatting => "formatting",
            Category::Reusability => "reusability",
            Category::BestPractices => "best_practices",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The clamped point value awarded within one category, plus the
/// recommendations its rules produced (in rule order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub score: u32,
    pub recommendations: Vec<String>,
}

/// Per-category sub-scores, serialized with fixed field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub naming: u32,
    pub modularity: u32,
    pub comments: u32,
    pub formatting: u32,
    pub reusability: u32,
    pub best_practices: u32,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Naming => self.naming,
            Category::Modularity => self.modularity,
            Category::Comments => self.comments,
            Category::Formatting => self.formatting,
            Category::Reusability => self.reusability,
            Category::BestPractices => self.best_practices,
        }
    }

    fn set(&mut self, category: Category, score: u32) {
        match category {
            Category::Naming => self.naming = score,
            Category::Modularity => self.modularity = score,
            Category::Comments => self.comments = score,
            Category::Formatting => self.formatting = score,
            Category::Reusability => self.reusability = score,
            Category::BestPractices => self.best_practices = score,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// The final output of one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sum of the six sub-scores, 0-100.
    pub overall_score: u32,
    pub breakdown: Breakdown,
    /// At most [`MAX_RECOMMENDATIONS`] entries, a prefix of the full list.
    pub recommendations: Vec<String>,
    /// Every recommendation produced, in order, before truncation.
    #[serde(skip)]
    pub all_recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Combine per-category scores into the final result.
    ///
    /// `leading` holds recommendations that precede all category output
    /// (currently only the syntax-error note from the Python pipeline).
    /// Category order is fixed; recommendation order follows it.
    pub fn assemble(leading: Vec<String>, scores: &[(Category, CategoryScore)]) -> Self {
        let mut breakdown = Breakdown::default();
        let mut all = leading;
        for (category, cs) in scores {
            breakdown.set(*category, cs.score.min(category.max_points()));
            all.extend(cs.recommendations.iter().cloned());
        }
        let recommendations = all.iter().take(MAX_RECOMMENDATIONS).cloned().collect();
        AnalysisResult {
            overall_score: breakdown.total(),
            breakdown,
            recommendations,
            all_recommendations: all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(category: Category) -> (Category, CategoryScore) {
        (
            category,
            CategoryScore {
                score: category.max_points(),
                recommendations: Vec::new(),
            },
        )
    }

    #[test]
    fn test_maxima_sum_to_100() {
        let total: u32 = Category::ALL.iter().map(|c| c.max_points()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_assemble_perfect_scores() {
        let scores: Vec<_> = Category::ALL.iter().map(|c| full(*c)).collect();
        let result = AnalysisResult::assemble(Vec::new(), &scores);
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.breakdown.total(), 100);
        assert!(result.recommendations.is_empty());
        assert!(result.all_recommendations.is_empty());
    }

    #[test]
    fn test_assemble_truncates_but_keeps_full_list() {
        let mut scores: Vec<_> = Category::ALL.iter().map(|c| full(*c)).collect();
        scores[0].1 = CategoryScore {
            score: 4,
            recommendations: (0..7).map(|i| format!("naming tip {}", i)).collect(),
        };
        let result = AnalysisResult::assemble(vec!["lead".to_string()], &scores);
        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result.all_recommendations.len(), 8);
        assert_eq!(result.recommendations[0], "lead");
        // Truncation keeps a prefix: no reordering, no dedup
        assert_eq!(
            result.recommendations,
            result.all_recommendations[..MAX_RECOMMENDATIONS].to_vec()
        );
        assert_eq!(result.overall_score, 94);
    }

    #[test]
    fn test_assemble_clamps_to_category_max() {
        let mut scores: Vec<_> = Category::ALL.iter().map(|c| full(*c)).collect();
        scores[1].1 = CategoryScore {
            score: 99,
            recommendations: Vec::new(),
        };
        let result = AnalysisResult::assemble(Vec::new(), &scores);
        assert_eq!(result.breakdown.modularity, Category::Modularity.max_points());
    }

    #[test]
    fn test_wire_shape_omits_full_list() {
        let scores: Vec<_> = Category::ALL.iter().map(|c| full(*c)).collect();
        let result = AnalysisResult::assemble(vec!["only".to_string()], &scores);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overall_score"], 100);
        assert_eq!(json["breakdown"]["best_practices"], 20);
        assert!(json.get("all_recommendations").is_none());
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 1);
    }
}
