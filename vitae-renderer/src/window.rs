//! Recency window — per-record inclusion for "last N years" builds.
//!
//! The current calendar year is injected by the caller; nothing in this
//! module (or anywhere downstream of it) reads the clock, so a render
//! pass is deterministic for a given window.

use vitae_core::types::{PubStatus, Publication, YearSpan};

/// Year cutoff filter. A cutoff of zero or less admits everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    cutoff: i32,
}

impl YearWindow {
    /// No filtering — the full document.
    pub fn unbounded() -> Self {
        YearWindow { cutoff: 0 }
    }

    /// Admit items overlapping the last `years` years.
    pub fn last_years(current_year: i32, years: u32) -> Self {
        YearWindow {
            cutoff: current_year - years as i32,
        }
    }

    /// Build from an optional `years` parameter; `None` means unbounded.
    pub fn from_years(current_year: i32, years: Option<u32>) -> Self {
        match years {
            Some(n) => YearWindow::last_years(current_year, n),
            None => YearWindow::unbounded(),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.cutoff <= 0
    }

    /// The active cutoff year, or `None` when unbounded.
    pub fn cutoff(&self) -> Option<i32> {
        if self.is_unbounded() {
            None
        } else {
            Some(self.cutoff)
        }
    }

    /// Point-in-time policy. An absent year never hides a record.
    pub fn admits_year(&self, year: Option<i32>) -> bool {
        match year {
            None => true,
            Some(y) => self.is_unbounded() || y >= self.cutoff,
        }
    }

    /// Range policy. Ongoing items (no end year) are always admitted;
    /// otherwise the item's end must overlap or postdate the window.
    pub fn admits_span(&self, span: &YearSpan) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match span.end {
            None => true,
            Some(end) => end >= self.cutoff,
        }
    }

    /// Publication policy: accepted/forthcoming work has no stable year
    /// yet and bypasses the year check entirely.
    pub fn admits_publication(&self, publication: &Publication) -> bool {
        publication.status == PubStatus::Accepted || self.admits_year(publication.year)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::types::PublicationKind;

    fn publication(year: Option<i32>, status: PubStatus) -> Publication {
        Publication {
            key: None,
            kind: PublicationKind::Article,
            status,
            authors: "Doe, J.".to_owned(),
            year,
            title: "T".to_owned(),
            journal: None,
            volume: None,
            number: None,
            pages: None,
            booktitle: None,
            editor: None,
            url: None,
            note: None,
        }
    }

    #[test]
    fn unbounded_admits_everything() {
        let w = YearWindow::unbounded();
        assert!(w.admits_year(Some(1950)));
        assert!(w.admits_year(None));
        assert!(w.admits_span(&YearSpan::new(1950, Some(1955))));
        assert!(w.cutoff().is_none());
    }

    #[test]
    fn cutoff_excludes_older_years() {
        let w = YearWindow::last_years(2024, 5);
        assert_eq!(w.cutoff(), Some(2019));
        assert!(w.admits_year(Some(2019)));
        assert!(w.admits_year(Some(2024)));
        assert!(!w.admits_year(Some(2018)));
    }

    #[test]
    fn absent_year_is_always_admitted() {
        let w = YearWindow::last_years(2024, 5);
        assert!(w.admits_year(None));
    }

    #[test]
    fn ongoing_span_is_always_admitted() {
        let w = YearWindow::last_years(2024, 5);
        assert!(w.admits_span(&YearSpan::new(1990, None)));
    }

    #[test]
    fn ended_span_respects_cutoff() {
        let w = YearWindow::last_years(2024, 5);
        assert!(!w.admits_span(&YearSpan::new(2005, Some(2010))));
        assert!(w.admits_span(&YearSpan::new(2005, Some(2019))));
    }

    #[test]
    fn accepted_publication_bypasses_window() {
        let w = YearWindow::last_years(2024, 5);
        assert!(w.admits_publication(&publication(Some(1999), PubStatus::Accepted)));
        assert!(w.admits_publication(&publication(None, PubStatus::Accepted)));
        assert!(!w.admits_publication(&publication(Some(1999), PubStatus::Published)));
    }

    #[test]
    fn from_years_none_is_unbounded() {
        assert!(YearWindow::from_years(2024, None).is_unbounded());
        assert!(!YearWindow::from_years(2024, Some(5)).is_unbounded());
    }
}
