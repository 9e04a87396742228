//! Daily series builder
//!
//! Turns a filtered view into per-category day-by-day totals for charting:
//! restrict to one category, sum per day, then reindex over every calendar
//! day of the range so gaps come out as explicit zeros. All series built
//! from one view share the same day index and can be plotted on one axis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Category, Money};
use crate::services::query::FilteredView;

/// One day of a daily series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    /// The calendar day
    pub date: NaiveDate,
    /// Summed amount for the day; zero when nothing happened
    pub amount: Money,
}

/// A category's summed amount for every day of a queried range
#[derive(Debug, Clone, Serialize)]
pub struct DailySeries {
    /// The category this series covers
    pub category: Category,
    /// One point per calendar day, in order, gaps zero-filled
    pub points: Vec<SeriesPoint>,
}

impl DailySeries {
    /// Build the series for one category over a view's full range
    pub fn build(view: &FilteredView, category: Category) -> Self {
        let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for record in view.records().iter().filter(|r| r.category == category) {
            *by_day.entry(record.date).or_insert(Money::zero()) += record.amount;
        }

        let points = view
            .range()
            .iter_days()
            .map(|date| SeriesPoint {
                date,
                amount: by_day.get(&date).copied().unwrap_or(Money::zero()),
            })
            .collect();

        Self { category, points }
    }

    /// Number of days covered, always the range's inclusive day count
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True only for a zero-day series, which a valid range never produces
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build one aligned series per recognized category
pub fn daily_series(view: &FilteredView) -> Vec<DailySeries> {
    Category::recognized()
        .into_iter()
        .map(|category| DailySeries::build(view, category))
        .collect()
}
