//! Log parsing
//!
//! Extracts ranked (mode, affinity) pairs from a Vina log. The stock
//! parser scans the whole text with a regular expression, matching the
//! engine's result-table rows wherever they appear. That is deliberately
//! lenient and can in principle hit unrelated numeric text, so it sits
//! behind the [`LogParser`] trait: a stricter line-oriented parser can
//! replace it without touching the grouping logic.

use regex::Regex;

/// One ranked pose extracted from a round's log.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// 1-based rank assigned by the engine
    pub mode: u32,
    /// Estimated binding energy (kcal/mol); lower is stronger
    pub affinity: f64,
}

/// Extracts ranked poses from raw log text.
pub trait LogParser {
    /// Every pose found in `text`, in order of appearance.
    fn parse(&self, text: &str) -> Vec<Pose>;
}

/// Regex-based parser matching a run of digits followed by a number,
/// each preceded by whitespace, anywhere in the log.
pub struct RegexLogParser {
    pattern: Regex,
}

impl RegexLogParser {
    /// Build the parser with the stock pose pattern.
    pub fn new() -> Self {
        // Mode rank then affinity, as printed in the engine's result table.
        let pattern = Regex::new(r"\s+(\d+)\s+([-+]?\d*\.\d+|\d+)")
            .expect("pose pattern compiles");
        Self { pattern }
    }
}

impl Default for RegexLogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LogParser for RegexLogParser {
    fn parse(&self, text: &str) -> Vec<Pose> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let mode = caps[1].parse().ok()?;
                let affinity = caps[2].parse().ok()?;
                Some(Pose { mode, affinity })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_TABLE: &str = "\
mode |   affinity | dist from best mode
     | (kcal/mol) | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1         -7.5      0.000      0.000
   2         -7.2      1.931      2.911
   3         -6.9      2.223      3.540
";

    #[test]
    fn test_parses_result_table_in_order() {
        let poses = RegexLogParser::new().parse(RESULT_TABLE);
        assert_eq!(
            poses,
            vec![
                Pose { mode: 1, affinity: -7.5 },
                Pose { mode: 2, affinity: -7.2 },
                Pose { mode: 3, affinity: -6.9 },
            ]
        );
    }

    #[test]
    fn test_table_preamble_yields_no_poses() {
        let text = "Reading input ... done.\nPerforming search ... done.\n";
        assert!(RegexLogParser::new().parse(text).is_empty());
    }

    #[test]
    fn test_positive_and_integer_affinities() {
        let text = "   1         3.25\n   2         4\n";
        let poses = RegexLogParser::new().parse(text);
        assert_eq!(
            poses,
            vec![
                Pose { mode: 1, affinity: 3.25 },
                Pose { mode: 2, affinity: 4.0 },
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(RegexLogParser::new().parse("").is_empty());
    }
}
