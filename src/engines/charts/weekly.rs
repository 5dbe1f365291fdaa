use crate::config::ChartTheme;
use crate::data::TransactionTable;
use crate::error::{DashboardError, Result};
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBar {
    /// Sunday closing the Monday to Sunday week
    pub week_ending: NaiveDate,
    pub total: f64,
}

impl WeeklyBar {
    pub fn label(&self) -> String {
        self.week_ending.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBarChart {
    pub bars: Vec<WeeklyBar>,
    /// Purchase total of rows whose date could not be parsed
    pub unassigned_total: f64,
    pub x_label: String,
    pub y_label: String,
    pub label_rotation_deg: f32,
    pub label_font_size: f32,
}

impl WeeklyBarChart {
    pub fn weekly_sum(&self) -> f64 {
        self.bars.iter().map(|b| b.total).sum()
    }
}

/// Sunday on or after `date`
pub fn week_ending(date: NaiveDate) -> Result<NaiveDate> {
    let days_to_sunday = 6 - date.weekday().num_days_from_monday() as i64;
    date.checked_add_signed(TimeDelta::days(days_to_sunday))
        .ok_or_else(|| DashboardError::Computation(format!("no week ending for {}", date)))
}

/// Sum purchase amounts per calendar week, filling empty weeks with zero.
pub fn purchases_over_time(table: &TransactionTable, theme: &ChartTheme) -> Result<WeeklyBarChart> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut unassigned_total = 0.0;

    for transaction in table {
        match transaction.purchase_date.date() {
            Some(date) => *totals.entry(week_ending(date)?).or_insert(0.0) += transaction.purchase_amount,
            None => unassigned_total += transaction.purchase_amount,
        }
    }

    let (Some(&first), Some(&last)) = (totals.keys().next(), totals.keys().next_back()) else {
        return Err(DashboardError::EmptyData(
            "no valid purchase dates to group by week".to_string(),
        ));
    };

    let mut bars = Vec::new();
    let mut week = first;
    while week <= last {
        bars.push(WeeklyBar {
            week_ending: week,
            total: totals.get(&week).copied().unwrap_or(0.0),
        });
        week = match week.checked_add_signed(TimeDelta::days(7)) {
            Some(next) => next,
            None => break,
        };
    }

    if unassigned_total != 0.0 {
        log::info!("{:.2} in purchases have no valid date and are left out of the weekly chart", unassigned_total);
    }

    Ok(WeeklyBarChart {
        bars,
        unassigned_total,
        x_label: "Week".to_string(),
        y_label: "Total $".to_string(),
        label_rotation_deg: theme.tick_rotation_deg,
        label_font_size: theme.small_font_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_ending_is_next_sunday() {
        // 2024-01-01 was a Monday
        assert_eq!(week_ending(date(2024, 1, 1)).unwrap(), date(2024, 1, 7));
        assert_eq!(week_ending(date(2024, 1, 6)).unwrap(), date(2024, 1, 7));
        assert_eq!(week_ending(date(2024, 1, 7)).unwrap(), date(2024, 1, 7));
        assert_eq!(week_ending(date(2024, 1, 8)).unwrap(), date(2024, 1, 14));
        assert_eq!(week_ending(date(2023, 12, 31)).unwrap(), date(2023, 12, 31));
    }

    #[test]
    fn test_week_ending_past_last_representable_date() {
        let result = week_ending(NaiveDate::MAX);
        if NaiveDate::MAX.weekday() == chrono::Weekday::Sun {
            assert_eq!(result.unwrap(), NaiveDate::MAX);
        } else {
            assert!(matches!(result, Err(DashboardError::Computation(_))));
        }
    }
}
