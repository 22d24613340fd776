use crate::rules::Sport;

/// Summary of one finished match, as kept in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Commit time in ms; two commits in the same millisecond share an id.
    pub id: i64,
    pub timestamp: i64,
    pub sport: Sport,
    pub left_name: String,
    pub right_name: String,
    /// Set-by-set line such as "6-0 7-6(5)".
    pub set_summary: String,
    pub left_sets: u32,
    pub right_sets: u32,
    pub left_games: u32,
    pub right_games: u32,
}

impl MatchRecord {
    pub fn title(&self) -> String {
        format!("{} vs {}", self.left_name, self.right_name)
    }

    /// "Tennis 2-0 (6-0 6-1)"; the parenthesised part is left out when there
    /// is no set summary.
    pub fn result_line(&self) -> String {
        let mut line = format!("{} {}-{}", self.sport.label(), self.left_sets, self.right_sets);
        if !self.set_summary.trim().is_empty() {
            line.push_str(&format!(" ({})", self.set_summary));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(summary: &str) -> MatchRecord {
        MatchRecord {
            id: 1,
            timestamp: 1,
            sport: Sport::Padel,
            left_name: "Ana".into(),
            right_name: "Bea".into(),
            set_summary: summary.into(),
            left_sets: 2,
            right_sets: 1,
            left_games: 0,
            right_games: 0,
        }
    }

    #[test]
    fn title_and_result_line() {
        let rec = record("6-4 3-6 7-6(2)");
        assert_eq!(rec.title(), "Ana vs Bea");
        assert_eq!(rec.result_line(), "Padel 2-1 (6-4 3-6 7-6(2))");
    }

    #[test]
    fn blank_summary_is_omitted() {
        assert_eq!(record("").result_line(), "Padel 2-1");
        assert_eq!(record("  ").result_line(), "Padel 2-1");
    }
}
