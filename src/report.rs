use std::fmt;

use stats::TagSummary;

/// The two-line report printed on success.
#[derive(Clone, Debug)]
pub struct Report {
    requested: usize,
    summary: TagSummary,
}

impl Report {
    /// `requested` is the K the user asked for, which may exceed the number of distinct tags.
    pub fn new(requested: usize, summary: TagSummary) -> Self {
        Self { requested, summary }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "There are {} tags", self.summary.total)?;
        writeln!(
            f,
            "The top {} tags are {}",
            self.requested, self.summary.top
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats::summarize;

    #[test]
    fn renders_total_and_ranking() {
        let summary = summarize("<a></a><a></a><a></a><b></b><b></b><c/>", 2);
        let report = Report::new(2, summary);
        assert_eq!(
            report.to_string(),
            "There are 6 tags\nThe top 2 tags are [('a', 3), ('b', 2)]\n"
        );
    }

    #[test]
    fn keeps_requested_k_when_fewer_tags_exist() {
        let report = Report::new(5, summarize("<p>hi</p>", 5));
        assert_eq!(
            report.to_string(),
            "There are 1 tags\nThe top 5 tags are [('p', 1)]\n"
        );
    }

    #[test]
    fn renders_empty_page() {
        let report = Report::new(5, summarize("", 5));
        assert_eq!(report.to_string(), "There are 0 tags\nThe top 5 tags are []\n");
    }
}
