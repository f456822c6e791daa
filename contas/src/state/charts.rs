use contas_api::endpoints::{reports::CategoryTotal, Amount, EntryKind};
use ratatui::style::Color;

use super::{LoadingState, RequestTracker};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// Share of the whole per category (purchases)
    Proportion,
    /// One bar per category, height by value (bills)
    Bars,
}

impl ChartStyle {
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Purchase => Self::Proportion,
            EntryKind::Bill => Self::Bars,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub value: Amount,
    /// Fraction of the chart total in `0.0..=1.0`
    pub share: f64,
    pub color: Color,
}

/// A rendered-ready chart built from one category report
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub style: ChartStyle,
    pub segments: Vec<ChartSegment>,
}

impl Chart {
    pub fn build(style: ChartStyle, totals: &[CategoryTotal]) -> Self {
        let sum: f64 = totals.iter().map(|t| t.total.as_f64()).sum();
        let segments = totals
            .iter()
            .enumerate()
            .map(|(i, t)| ChartSegment {
                label: t.category.clone(),
                value: t.total,
                share: if sum > 0.0 { t.total.as_f64() / sum } else { 0.0 },
                color: theme::chart_color(i),
            })
            .collect();

        Self { style, segments }
    }

    pub fn total(&self) -> Amount {
        self.segments.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn dispose(self) {
        tracing::debug!(
            "Disposing {:?} chart with {} segments",
            self.style,
            self.segments.len()
        );
    }
}

/// One report panel. Holds at most one live chart.
#[derive(Default, Debug, Clone)]
pub struct ChartSlot {
    pub tracker: RequestTracker,
    pub loading: LoadingState,
    chart: Option<Chart>,
    disposed: usize,
}

impl ChartSlot {
    /// Replace the live chart, disposing the previous one first
    pub fn install(&mut self, chart: Chart) {
        if let Some(previous) = self.chart.take() {
            previous.dispose();
            self.disposed += 1;
        }
        self.chart = Some(chart);
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Number of charts this slot has torn down so far
    pub fn disposed_count(&self) -> usize {
        self.disposed
    }
}

#[derive(Default, Debug, Clone)]
pub struct ReportsState {
    pub purchases: ChartSlot,
    pub bills: ChartSlot,
}

impl ReportsState {
    pub fn slot(&self, kind: EntryKind) -> &ChartSlot {
        match kind {
            EntryKind::Purchase => &self.purchases,
            EntryKind::Bill => &self.bills,
        }
    }

    pub fn slot_mut(&mut self, kind: EntryKind) -> &mut ChartSlot {
        match kind {
            EntryKind::Purchase => &mut self.purchases,
            EntryKind::Bill => &mut self.bills,
        }
    }
}
