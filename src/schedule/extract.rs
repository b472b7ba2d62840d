// src/schedule/extract.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::trace;

static RUNS_FOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td.right[data-stat="R"]"#).expect("runs-scored selector should parse")
});

static RUNS_AGAINST: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td.right[data-stat="RA"]"#).expect("runs-allowed selector should parse")
});

static OPPONENT: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td.left[data-stat="opp_ID"]"#).expect("opponent selector should parse")
});

/// Cell text of the three stat columns, each in document order.
///
/// The columns are matched independently, so nothing here guarantees they
/// line up; see [`super::assemble`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawColumns {
    pub runs_for: Vec<String>,
    pub runs_against: Vec<String>,
    pub opponent: Vec<String>,
}

impl RawColumns {
    pub fn lengths(&self) -> (usize, usize, usize) {
        (
            self.runs_for.len(),
            self.runs_against.len(),
            self.opponent.len(),
        )
    }

    pub fn is_aligned(&self) -> bool {
        let (f, a, o) = self.lengths();
        f == a && a == o
    }
}

/// Pull the runs-scored, runs-allowed and opponent cells out of a schedule page.
pub fn extract_columns(html: &str) -> RawColumns {
    let document = Html::parse_document(html);
    let columns = RawColumns {
        runs_for: cell_texts(&document, &RUNS_FOR),
        runs_against: cell_texts(&document, &RUNS_AGAINST),
        opponent: cell_texts(&document, &OPPONENT),
    };
    trace!(lengths = ?columns.lengths(), "extracted stat cells");
    columns
}

fn cell_texts(document: &Html, selector: &Selector) -> Vec<String> {
    document.select(selector).map(text_of).collect()
}

fn text_of(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}
