use chrono::{Datelike, NaiveDate, Weekday};
use custdash::config::{BandwidthMode, ChartTheme, DensityConfig};
use custdash::data::{CleanedGender, CleaningStats, PurchaseDate, Transaction, TransactionTable};
use custdash::engines::charts::{
    age_density, category_pie, gender_pie, purchase_histogram, purchases_over_time, sturges_bin_count,
};
use custdash::DashboardError;

fn transaction(age: f64, gender: &str, category: &str, amount: f64, date: Option<(i32, u32, u32)>) -> Transaction {
    let purchase_date = date
        .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(PurchaseDate::Parsed)
        .unwrap_or(PurchaseDate::Invalid);

    Transaction {
        index: 0,
        customer_id: "c".to_string(),
        age,
        gender: gender.to_string(),
        product_category: category.to_string(),
        purchase_amount: amount,
        purchase_date,
        cleaned_gender: CleanedGender::from_raw(gender),
    }
}

fn sample_table() -> TransactionTable {
    let records = vec![
        transaction(23.0, "Male", "Books", 12.0, Some((2024, 1, 1))),
        transaction(35.0, "Female", "Toys", 48.5, Some((2024, 1, 3))),
        transaction(41.0, "Female", "Books", 7.25, Some((2024, 1, 16))),
        transaction(29.0, "Other", "Garden", 101.0, Some((2024, 1, 17))),
        transaction(56.0, "Male", "Books", 33.0, None),
        transaction(62.0, "Unknown", "Toys", 64.0, Some((2024, 2, 4))),
        transaction(38.0, "Male", "Books", 19.99, Some((2024, 2, 5))),
    ];
    TransactionTable::from_records(records, CleaningStats::default())
}

fn empty_table() -> TransactionTable {
    TransactionTable::from_records(Vec::new(), CleaningStats::default())
}

#[test]
fn test_histogram_counts_every_row() {
    let table = sample_table();
    let chart = purchase_histogram(&table, &ChartTheme::default()).unwrap();

    assert_eq!(chart.bins.len(), sturges_bin_count(table.len()));
    assert_eq!(chart.total_count(), table.len());
    assert_eq!(chart.edges.len(), chart.bins.len() + 1);
    assert_eq!(chart.edges.first().copied(), Some(7.25));
    assert_eq!(chart.edges.last().copied(), Some(101.0));
    assert_eq!(chart.tick_rotation_deg, 45.0);
    assert!(chart.integer_y_ticks);
}

#[test]
fn test_histogram_with_identical_amounts() {
    let records = vec![
        transaction(30.0, "Male", "Books", 20.0, Some((2024, 1, 1))),
        transaction(31.0, "Male", "Books", 20.0, Some((2024, 1, 1))),
    ];
    let table = TransactionTable::from_records(records, CleaningStats::default());
    let chart = purchase_histogram(&table, &ChartTheme::default()).unwrap();

    assert_eq!(chart.edges.first().copied(), Some(19.5));
    assert_eq!(chart.edges.last().copied(), Some(20.5));
    assert_eq!(chart.total_count(), 2);
}

#[test]
fn test_category_pie() {
    let chart = category_pie(&sample_table(), &ChartTheme::default()).unwrap();

    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Books", "Toys", "Garden"]);
    assert_eq!(chart.slices[0].percent_label(), "57.1%");
    let fractions: f64 = chart.slices.iter().map(|s| s.fraction).sum();
    assert!((fractions - 1.0).abs() < 1e-9);
    assert_eq!(chart.slices[0].start_angle_deg, 140.0);
}

#[test]
fn test_gender_pie_uses_cleaned_buckets() {
    let chart = gender_pie(&sample_table(), &ChartTheme::default()).unwrap();

    let slices: Vec<(&str, usize)> = chart.slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
    assert_eq!(slices, vec![("Male", 3), ("Female", 2), ("Other", 2)]);
}

#[test]
fn test_weekly_totals_cover_every_amount() {
    let table = sample_table();
    let chart = purchases_over_time(&table, &ChartTheme::default()).unwrap();

    let total: f64 = table.iter().map(|t| t.purchase_amount).sum();
    assert!((chart.weekly_sum() + chart.unassigned_total - total).abs() < 1e-9);
    assert!((chart.unassigned_total - 33.0).abs() < 1e-9);

    // First week ends 2024-01-07, last week ends 2024-02-11; empty weeks are kept
    assert_eq!(chart.bars.len(), 6);
    assert_eq!(chart.bars[0].week_ending, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    assert_eq!(chart.bars[1].total, 0.0);
    for pair in chart.bars.windows(2) {
        assert_eq!((pair[1].week_ending - pair[0].week_ending).num_days(), 7);
    }
    assert!(chart.bars.iter().all(|b| b.week_ending.weekday() == Weekday::Sun));
    assert_eq!(chart.bars[0].label(), "2024-01-07");
}

#[test]
fn test_weekly_without_valid_dates() {
    let records = vec![transaction(30.0, "Male", "Books", 20.0, None)];
    let table = TransactionTable::from_records(records, CleaningStats::default());

    let result = purchases_over_time(&table, &ChartTheme::default());
    assert!(matches!(result, Err(DashboardError::EmptyData(_))));
}

#[test]
fn test_density_integrates_to_one() {
    let chart = age_density(&sample_table(), &DensityConfig::default()).unwrap();

    assert_eq!(chart.points.len(), 200);
    assert_eq!(chart.mode, BandwidthMode::Fixed);
    assert_eq!(chart.bw_adjust, 0.5);
    assert!(chart.points.iter().all(|p| p[1] >= 0.0));

    let area: f64 = chart
        .points
        .windows(2)
        .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
        .sum();
    assert!((area - 1.0).abs() < 0.02, "area was {}", area);
}

#[test]
fn test_density_adaptive_bandwidth() {
    let table = sample_table();
    let fixed = age_density(&table, &DensityConfig::default()).unwrap();
    let config = DensityConfig {
        bandwidth_mode: BandwidthMode::Adaptive,
        ..DensityConfig::default()
    };
    let adaptive = age_density(&table, &config).unwrap();

    assert_eq!(adaptive.bw_adjust, fixed.adaptive_adjust);
    assert!((0.3..=1.0).contains(&adaptive.adaptive_adjust));
    assert!((adaptive.bandwidth / fixed.bandwidth - adaptive.bw_adjust / 0.5).abs() < 1e-9);
}

#[test]
fn test_density_rejects_constant_ages() {
    let records = vec![
        transaction(40.0, "Male", "Books", 1.0, None),
        transaction(40.0, "Female", "Toys", 2.0, None),
    ];
    let table = TransactionTable::from_records(records, CleaningStats::default());

    let result = age_density(&table, &DensityConfig::default());
    assert!(matches!(result, Err(DashboardError::Degenerate(_))));
}

#[test]
fn test_every_chart_rejects_empty_table() {
    let table = empty_table();
    let theme = ChartTheme::default();

    assert!(matches!(purchase_histogram(&table, &theme), Err(DashboardError::EmptyData(_))));
    assert!(matches!(category_pie(&table, &theme), Err(DashboardError::EmptyData(_))));
    assert!(matches!(gender_pie(&table, &theme), Err(DashboardError::EmptyData(_))));
    assert!(matches!(purchases_over_time(&table, &theme), Err(DashboardError::EmptyData(_))));
    assert!(matches!(age_density(&table, &DensityConfig::default()), Err(DashboardError::EmptyData(_))));
}
