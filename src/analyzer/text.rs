//! Shared line/character scanning primitives used by both rule sets.

use regex::Regex;

/// Leading-whitespace width of a line, in characters.
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Indentation widths of indented, non-empty, non-comment lines.
/// `comment_prefixes` are matched against the trimmed line start.
pub fn indent_widths(lines: &[String], comment_prefixes: &[&str]) -> Vec<usize> {
    lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !comment_prefixes.iter().any(|p| trimmed.starts_with(p))
        })
        .map(|line| indent_width(line))
        .filter(|w| *w > 0)
        .collect()
}

/// Maximum indentation across non-empty, non-comment lines (zero included).
pub fn max_indent(lines: &[String], comment_prefixes: &[&str]) -> usize {
    lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !comment_prefixes.iter().any(|p| trimmed.starts_with(p))
        })
        .map(|line| indent_width(line))
        .max()
        .unwrap_or(0)
}

/// 1-indexed numbers of lines longer than `limit` characters.
/// Length is counted in characters, not bytes.
pub fn long_line_numbers(lines: &[String], limit: usize) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.chars().count() > limit)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Segment the file into contiguous blocks of non-empty, non-comment lines.
///
/// A blank or comment line ends the current block. Lines are trimmed before
/// joining; only blocks of at least `min_lines` lines are kept.
pub fn code_blocks(lines: &[String], comment_prefixes: &[&str], min_lines: usize) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !comment_prefixes.iter().any(|p| trimmed.starts_with(p)) {
            current.push(trimmed);
        } else if !current.is_empty() {
            if current.len() >= min_lines {
                blocks.push(current.join("\n"));
            }
            current.clear();
        }
    }
    if current.len() >= min_lines {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Number of blocks whose exact text repeats earlier in the file.
pub fn duplicate_block_count(blocks: &[String]) -> usize {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = 0;
    for block in blocks {
        if !seen.insert(block.as_str()) {
            duplicates += 1;
        }
    }
    duplicates
}

/// Count non-overlapping matches of a pattern in the text.
pub fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

/// First capture group of every match, up to `limit` entries.
pub fn captured_names(re: &Regex, text: &str, limit: usize) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .take(limit)
        .collect()
}

/// Render a short offender list, e.g. for "found: a, b, c" suffixes.
pub fn join_examples(names: &[String]) -> String {
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_indent_widths_skip_comments_and_flat_lines() {
        let lines = lines("top\n    indented\n    # comment\n\n        deep");
        assert_eq!(indent_widths(&lines, &["#"]), vec![4, 8]);
    }

    #[test]
    fn test_max_indent_counts_flat_lines() {
        let lines = lines("a\n    b\n        c");
        assert_eq!(max_indent(&lines, &["#"]), 8);
        assert_eq!(max_indent(&[], &["#"]), 0);
    }

    #[test]
    fn test_long_line_numbers_are_one_indexed() {
        let long = "x".repeat(120);
        let lines = lines(&format!("short\n{}\nshort\n{}", long, long));
        assert_eq!(long_line_numbers(&lines, 100), vec![2, 4]);
    }

    #[test]
    fn test_long_lines_measured_in_characters_not_bytes() {
        // 60 characters but 120 UTF-8 bytes
        let wide = lines(&format!("short\n{}", "é".repeat(60)));
        assert!(long_line_numbers(&wide, 100).is_empty());

        let over = lines(&"é".repeat(101));
        assert_eq!(long_line_numbers(&over, 100), vec![1]);
    }

    #[test]
    fn test_code_blocks_split_on_blank_and_comment_lines() {
        let lines = lines("a\nb\nc\n\nd\ne\n// note\nf\ng\nh");
        let blocks = code_blocks(&lines, &["//"], 3);
        assert_eq!(blocks, vec!["a\nb\nc".to_string(), "f\ng\nh".to_string()]);
    }

    #[test]
    fn test_duplicate_block_count() {
        let blocks = vec![
            "a\nb\nc".to_string(),
            "d\ne\nf".to_string(),
            "a\nb\nc".to_string(),
            "a\nb\nc".to_string(),
        ];
        assert_eq!(duplicate_block_count(&blocks), 2);
        assert_eq!(duplicate_block_count(&[]), 0);
    }
}
