use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use pset_core::responses::{EntryOutcome, ImportReport};

use crate::ui;

const WIDE_TEMPLATE: &str = "{bar:40.cyan/blue} {pos}/{len} {msg}";
const NARROW_TEMPLATE: &str = "{wide_bar:.cyan/blue} {percent}% {msg}";

/// Per-entry progress of `pset import run`, drawn on stderr.
///
/// Every method is a no-op when progress display is off.
pub struct ImportProgress {
    bar: Option<ProgressBar>,
}

fn template() -> &'static str {
    let wide = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .is_some_and(|cols| cols >= 80);
    if wide { WIDE_TEMPLATE } else { NARROW_TEMPLATE }
}

impl ImportProgress {
    #[must_use]
    pub fn start(entries: usize) -> Self {
        if !ui::prefs().progress {
            return Self::hidden();
        }

        let total = u64::try_from(entries).unwrap_or(u64::MAX);
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::with_template(template()).unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("importing problems");
        Self { bar: Some(bar) }
    }

    #[must_use]
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Advance by one entry, naming it (and flagging it when the write failed).
    pub fn record(&self, outcome: &EntryOutcome) {
        let Some(bar) = &self.bar else { return };
        if outcome.is_created() {
            bar.set_message(outcome.key().to_string());
        } else {
            bar.set_message(format!("{} failed", outcome.key()));
        }
        bar.inc(1);
    }

    /// Close the bar with the import totals.
    pub fn finish(&self, report: &ImportReport) {
        let Some(bar) = &self.bar else { return };
        if report.is_complete() {
            bar.finish_with_message(format!("imported {} problems", report.created));
        } else {
            bar.abandon_with_message(format!(
                "imported {} problems, {} failed",
                report.created, report.failed
            ));
        }
    }

    /// Remove the bar after the import was aborted.
    pub fn abandon(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImportProgress, NARROW_TEMPLATE, WIDE_TEMPLATE};
    use indicatif::ProgressStyle;
    use pset_core::responses::EntryOutcome;

    #[test]
    fn templates_are_valid() {
        assert!(ProgressStyle::with_template(WIDE_TEMPLATE).is_ok());
        assert!(ProgressStyle::with_template(NARROW_TEMPLATE).is_ok());
    }

    #[test]
    fn hidden_progress_ignores_updates() {
        let progress = ImportProgress::hidden();
        progress.record(&EntryOutcome::Failed {
            key: "content1".into(),
            error: "boom".into(),
        });
        progress.abandon();
        assert!(progress.bar.is_none());
    }
}
