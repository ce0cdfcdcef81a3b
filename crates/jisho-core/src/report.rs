use crate::batch::BatchOutcome;

const DONE: &str = "Done.";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub label: &'static str,
    pub items: Vec<String>,
}

impl ReportSection {
    fn render(&self) -> String {
        format!("{}\n{}", self.label, self.items.join("\n"))
    }
}

/// End-of-batch summary, one warning section per non-empty outcome list
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    warnings: Vec<ReportSection>,
}

impl BatchReport {
    pub fn new(outcome: &BatchOutcome) -> Self {
        let warnings = [
            ("Could not find:", &outcome.missing),
            ("Changed:", &outcome.changed),
            ("Duplicates:", &outcome.duplicates),
            ("Could not save:", &outcome.failed),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| ReportSection {
            label,
            items: items.clone(),
        })
        .collect();

        Self { warnings }
    }

    pub fn warnings(&self) -> &[ReportSection] {
        &self.warnings
    }

    pub fn done(&self) -> &'static str {
        DONE
    }

    pub fn render(&self) -> String {
        self.warnings
            .iter()
            .map(ReportSection::render)
            .chain(std::iter::once(DONE.to_string()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<&BatchOutcome> for BatchReport {
    fn from(outcome: &BatchOutcome) -> Self {
        Self::new(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_batch_only_says_done() {
        let report = BatchReport::new(&BatchOutcome {
            added: vec!["猫".into()],
            ..Default::default()
        });

        assert!(report.warnings().is_empty());
        assert_eq!(report.render(), "Done.");
    }

    #[test]
    fn renders_non_empty_sections_in_order() {
        let outcome = BatchOutcome {
            added: vec![],
            missing: vec!["zzzz".into(), "qqqq".into()],
            changed: vec![],
            duplicates: vec!["猫".into()],
            failed: vec![],
        };

        let report = BatchReport::from(&outcome);

        assert_eq!(report.warnings().len(), 2);
        assert_eq!(
            report.render(),
            "Could not find:\nzzzz\nqqqq\n\nDuplicates:\n猫\n\nDone."
        );
    }

    #[test]
    fn changed_section_lists_arrows() {
        let outcome = BatchOutcome {
            changed: vec!["さすが → 流石".into()],
            ..Default::default()
        };

        let report = BatchReport::new(&outcome);
        assert_eq!(report.warnings()[0].label, "Changed:");
        assert_eq!(report.warnings()[0].items, vec!["さすが → 流石"]);
        assert_eq!(report.done(), "Done.");
    }

    #[test]
    fn rejected_saves_are_listed_last() {
        let outcome = BatchOutcome {
            missing: vec!["zzzz".into()],
            failed: vec!["犬".into()],
            ..Default::default()
        };

        assert_eq!(
            BatchReport::new(&outcome).render(),
            "Could not find:\nzzzz\n\nCould not save:\n犬\n\nDone."
        );
    }
}
