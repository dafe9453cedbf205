//! Calendar window expansion
//!
//! Expands the visible window into month groups of full Sunday-first weeks,
//! adding the minimum leading/trailing filler days to complete week rows.
//! Filler days are flagged `out_of_range` but still classified, so stays
//! crossing the window boundary render correctly.

use chrono::{Datelike, Days, NaiveDate};
use staygrid_domain::constants::DAYS_PER_WEEK;
use staygrid_domain::{CalendarError, Result, VisibleWindow};

/// One grid day before classification: a date plus its filler flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    pub out_of_range: bool,
}

/// A month's worth of full week rows, dates only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSpan {
    pub year: i32,
    pub month: u32,
    /// Sunday-first rows of exactly seven days each.
    pub weeks: Vec<Vec<GridDay>>,
}

/// Expand the window into ordered month spans of full weeks.
///
/// Fails fast with [`CalendarError::EmptyWindow`] on a degenerate window;
/// there is nothing sensible to render.
pub fn expand(window: &VisibleWindow) -> Result<Vec<MonthSpan>> {
    window.validate()?;

    let mut months = Vec::new();
    let (mut year, mut month) = (window.first_day.year(), window.first_day.month());
    let until = (window.last_day.year(), window.last_day.month());

    while (year, month) <= until {
        months.push(expand_month(window, year, month)?);
        (year, month) = next_month(year, month);
    }

    Ok(months)
}

/// First and last grid day across all month spans, for index construction.
pub fn grid_bounds(months: &[MonthSpan]) -> Option<(NaiveDate, NaiveDate)> {
    let first = months.first()?.weeks.first()?.first()?.date;
    let last = months.last()?.weeks.last()?.last()?.date;
    Some((first, last))
}

fn expand_month(window: &VisibleWindow, year: i32, month: u32) -> Result<MonthSpan> {
    let month_first = first_of_month(year, month)?;
    let (next_year, next_month) = next_month(year, month);
    let month_last = first_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or_else(|| CalendarError::InvalidDate(format!("{year}-{month:02}")))?;

    // The part of the month the window actually shows.
    let span_first = month_first.max(window.first_day);
    let span_last = month_last.min(window.last_day);

    let lead = u64::from(span_first.weekday().num_days_from_sunday());
    let trail = 6 - u64::from(span_last.weekday().num_days_from_sunday());
    let grid_first = span_first.checked_sub_days(Days::new(lead)).unwrap_or(span_first);
    let grid_last = span_last.checked_add_days(Days::new(trail)).unwrap_or(span_last);

    let days: Vec<GridDay> = grid_first
        .iter_days()
        .take_while(|d| *d <= grid_last)
        .map(|date| GridDay { date, out_of_range: !window.contains(date) })
        .collect();
    let weeks = days.chunks(DAYS_PER_WEEK).map(<[GridDay]>::to_vec).collect();

    Ok(MonthSpan { year, month, weeks })
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalendarError::InvalidDate(format!("{year}-{month:02}-01")))
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn august_2024_expands_to_five_sunday_first_weeks() {
        let window = VisibleWindow::new(day(2024, 8, 1), day(2024, 8, 31));
        let months = expand(&window).unwrap();

        assert_eq!(months.len(), 1);
        let august = &months[0];
        assert_eq!((august.year, august.month), (2024, 8));
        assert_eq!(august.weeks.len(), 5);

        for week in &august.weeks {
            assert_eq!(week.len(), 7);
            assert_eq!(week[0].date.weekday(), Weekday::Sun);
        }

        // Aug 1, 2024 is a Thursday: the grid leads with Jul 28 - Jul 31.
        assert_eq!(august.weeks[0][0].date, day(2024, 7, 28));
        assert!(august.weeks[0][0].out_of_range);
        assert!(!august.weeks[0][4].out_of_range);
        // Aug 31 is a Saturday: no trailing filler.
        assert_eq!(august.weeks[4][6].date, day(2024, 8, 31));
        assert!(!august.weeks[4][6].out_of_range);
    }

    #[test]
    fn multi_month_window_yields_ordered_month_spans() {
        let window = VisibleWindow::new(day(2024, 8, 1), day(2024, 10, 31));
        let months = expand(&window).unwrap();

        let labels: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(labels, vec![(2024, 8), (2024, 9), (2024, 10)]);
    }

    #[test]
    fn year_boundary_rolls_over() {
        let window = VisibleWindow::new(day(2024, 12, 1), day(2025, 1, 31));
        let months = expand(&window).unwrap();

        let labels: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(labels, vec![(2024, 12), (2025, 1)]);
    }

    #[test]
    fn mid_month_window_marks_preceding_days_out_of_range() {
        // Window starts Thursday Aug 15; its week row leads from Sunday Aug 11.
        let window = VisibleWindow::new(day(2024, 8, 15), day(2024, 8, 31));
        let months = expand(&window).unwrap();

        let first_week = &months[0].weeks[0];
        assert_eq!(first_week[0].date, day(2024, 8, 11));
        assert!(first_week[0].out_of_range);
        assert!(first_week[3].out_of_range); // Aug 14
        assert!(!first_week[4].out_of_range); // Aug 15
    }

    #[test]
    fn empty_window_fails_fast() {
        let window = VisibleWindow::new(day(2024, 9, 1), day(2024, 8, 1));
        assert!(matches!(expand(&window), Err(CalendarError::EmptyWindow { .. })));
    }

    #[test]
    fn grid_bounds_cover_all_filler_days() {
        let window = VisibleWindow::new(day(2024, 8, 1), day(2024, 9, 30));
        let months = expand(&window).unwrap();
        let (first, last) = grid_bounds(&months).unwrap();

        assert_eq!(first, day(2024, 7, 28));
        // Sep 30, 2024 is a Monday; its week trails through Sat Oct 5.
        assert_eq!(last, day(2024, 10, 5));
    }
}
