//! Shaping of dashboard rows into chart series
//!
//! Dashboard endpoints return loosely typed JSON arrays. Rows are grouped by a
//! normalized `YYYY-MM` key (lexicographic order of that key is chronological)
//! and summed; labels are rendered as short pt-BR month names.

use std::collections::BTreeMap;

use serde_json::Value;

use super::serde_utils::{number_of, text_of};

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// `YYYY-MM`, `YYYY-MM-DD` or an ISO timestamp -> `YYYY-MM`
pub fn normalize_month_key(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let bytes = raw.as_bytes();
    if bytes.len() < 7 {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !digits(0..4) || bytes[4] != b'-' || !digits(5..7) {
        return None;
    }
    if bytes.len() > 7 && (bytes[7] != b'-' || bytes.len() < 10 || !digits(8..10)) {
        return None;
    }
    let month: u32 = raw[5..7].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(raw[..7].to_string())
}

/// Compact pt-BR axis label, `2025-01` -> `jan/25`
///
/// Shorter than the browser's `toLocaleDateString` form (`jan. de 25`).
/// Input that is not a month key is returned unchanged.
pub fn format_month_label(key: &str) -> String {
    match normalize_month_key(key) {
        Some(k) => {
            let month: usize = k[5..7].parse().unwrap_or(1);
            format!("{}/{}", MONTHS_PT_BR[month - 1], &k[2..4])
        }
        None => key.to_string(),
    }
}

/// Field names to group on and to sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub label_field: String,
    pub value_field: String,
}

impl AggregateSpec {
    pub fn new(label_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            label_field: label_field.into(),
            value_field: value_field.into(),
        }
    }
}

/// Month-grouped totals in chronological order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    /// `YYYY-MM`
    pub keys: Vec<String>,
    /// Display labels, same order as `keys`
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl MonthlySeries {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.keys.iter().cloned().zip(self.values.iter().copied()).collect()
    }
}

fn field_text(row: &Value, field: &str) -> Option<String> {
    row.get(field).and_then(text_of)
}

fn field_number(row: &Value, field: &str) -> f64 {
    row.get(field).and_then(number_of).unwrap_or(0.0)
}

/// Sums `value_field` per normalized month of `label_field`
///
/// Rows whose label is not a date are skipped; non-numeric values count as 0.
pub fn aggregate_by_month(rows: &[Value], spec: &AggregateSpec) -> MonthlySeries {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        let Some(key) = field_text(row, &spec.label_field).and_then(|l| normalize_month_key(&l)) else {
            continue;
        };
        *totals.entry(key).or_insert(0.0) += field_number(row, &spec.value_field);
    }
    MonthlySeries {
        labels: totals.keys().map(|k| format_month_label(k)).collect(),
        keys: totals.keys().cloned().collect(),
        values: totals.into_values().collect(),
    }
}

/// One named series aligned to the month keys of a [`PivotSeries`]
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotSeries {
    pub keys: Vec<String>,
    pub labels: Vec<String>,
    /// In first-seen order of the series field
    pub series: Vec<NamedSeries>,
}

/// One series per distinct `series_field` value, summed per month; months a
/// series has no rows for are 0
pub fn pivot_by_month(
    rows: &[Value],
    label_field: &str,
    series_field: &str,
    value_field: &str,
) -> PivotSeries {
    let mut months: BTreeMap<String, ()> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut cells: BTreeMap<(String, String), f64> = BTreeMap::new();

    for row in rows {
        let Some(key) = field_text(row, label_field).and_then(|l| normalize_month_key(&l)) else {
            continue;
        };
        let name = field_text(row, series_field).unwrap_or_else(|| "---".to_string());
        if !order.contains(&name) {
            order.push(name.clone());
        }
        months.insert(key.clone(), ());
        *cells.entry((name, key)).or_insert(0.0) += field_number(row, value_field);
    }

    let keys: Vec<String> = months.into_keys().collect();
    let series = order
        .into_iter()
        .map(|name| NamedSeries {
            values: keys
                .iter()
                .map(|k| cells.get(&(name.clone(), k.clone())).copied().unwrap_or(0.0))
                .collect(),
            name,
        })
        .collect();

    PivotSeries {
        labels: keys.iter().map(|k| format_month_label(k)).collect(),
        keys,
        series,
    }
}

fn first_row_keys(rows: &[Value]) -> Option<Vec<&String>> {
    rows.first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().collect())
}

fn find_candidate(keys: &[&String], candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|c| {
        keys.iter()
            .find(|k| k.eq_ignore_ascii_case(c))
            .map(|k| k.to_string())
    })
}

/// First candidate present in the first row (case-insensitive), else its first key
pub fn detect_label_field(rows: &[Value], candidates: &[&str]) -> String {
    let Some(keys) = first_row_keys(rows) else {
        return "label".to_string();
    };
    find_candidate(&keys, candidates)
        .or_else(|| keys.first().map(|k| k.to_string()))
        .unwrap_or_else(|| "label".to_string())
}

/// First candidate present, else the first numeric key, else the second key
pub fn detect_value_field(rows: &[Value], candidates: &[&str]) -> String {
    let Some(keys) = first_row_keys(rows) else {
        return "value".to_string();
    };
    if let Some(found) = find_candidate(&keys, candidates) {
        return found;
    }
    let first = &rows[0];
    keys.iter()
        .find(|k| first.get(k.as_str()).is_some_and(Value::is_number))
        .or_else(|| keys.get(1))
        .map(|k| k.to_string())
        .unwrap_or_else(|| "value".to_string())
}

/// Labels and values ready for a single-dataset chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Detects the label and value fields; month-like labels are grouped with
/// [`aggregate_by_month`], anything else is plotted row by row
pub fn chart_series(
    rows: &[Value],
    label_candidates: &[&str],
    value_candidates: &[&str],
) -> ChartSeries {
    if rows.is_empty() {
        return ChartSeries::default();
    }
    let spec = AggregateSpec::new(
        detect_label_field(rows, label_candidates),
        detect_value_field(rows, value_candidates),
    );
    let monthly = rows.iter().all(|r| {
        field_text(r, &spec.label_field)
            .and_then(|l| normalize_month_key(&l))
            .is_some()
    });
    if monthly {
        let series = aggregate_by_month(rows, &spec);
        return ChartSeries {
            labels: series.labels,
            values: series.values,
        };
    }
    ChartSeries {
        labels: rows
            .iter()
            .map(|r| field_text(r, &spec.label_field).unwrap_or_else(|| "---".to_string()))
            .collect(),
        values: rows.iter().map(|r| field_number(r, &spec.value_field)).collect(),
    }
}

/// Chart type of the switchable dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Doughnut,
    Line,
}

impl ChartKind {
    /// Chart.js `type`
    pub fn code(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Line => "line",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Barras",
            ChartKind::Pie => "Pizza",
            ChartKind::Doughnut => "Rosca",
            ChartKind::Line => "Linha",
        }
    }

    /// Bar -> Pie -> Doughnut -> Bar; Line leaves the cycle back to Bar
    pub fn next(&self) -> Self {
        match self {
            ChartKind::Bar => ChartKind::Pie,
            ChartKind::Pie => ChartKind::Doughnut,
            ChartKind::Doughnut | ChartKind::Line => ChartKind::Bar,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bar" => Some(ChartKind::Bar),
            "pie" => Some(ChartKind::Pie),
            "doughnut" => Some(ChartKind::Doughnut),
            "line" => Some(ChartKind::Line),
            _ => None,
        }
    }

    /// Pie-like charts have no axes
    pub fn has_axes(&self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::Line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sales_rows() -> Vec<Value> {
        vec![
            json!({"month": "2025-01-05", "total_sold": 3}),
            json!({"month": "2025-01-20", "total_sold": 2}),
            json!({"month": "2025-02-01", "total_sold": 5}),
        ]
    }

    #[test]
    fn test_aggregate_sums_per_month() {
        let series = aggregate_by_month(&sales_rows(), &AggregateSpec::new("month", "total_sold"));
        let expected: BTreeMap<String, f64> =
            [("2025-01".to_string(), 5.0), ("2025-02".to_string(), 5.0)].into();
        assert_eq!(series.to_map(), expected);
        assert_eq!(series.labels, vec!["jan/25", "fev/25"]);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let spec = AggregateSpec::new("month", "total_sold");
        let mut rows = sales_rows();
        rows.push(json!({"month": "2024-12", "total_sold": "7"}));
        rows.push(json!({"month": "not a date", "total_sold": 100}));
        let forward = aggregate_by_month(&rows, &spec);
        rows.reverse();
        let backward = aggregate_by_month(&rows, &spec);
        rows.rotate_left(2);
        let rotated = aggregate_by_month(&rows, &spec);
        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
        assert_eq!(forward.keys, vec!["2024-12", "2025-01", "2025-02"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["2025-01", "2025-01-31", "2025-11-02T13:45:00Z"] {
            let once = normalize_month_key(raw).unwrap();
            assert_eq!(normalize_month_key(&once).as_deref(), Some(once.as_str()));
        }
        assert_eq!(normalize_month_key("2025-13"), None);
        assert_eq!(normalize_month_key("2025/01"), None);
        assert_eq!(normalize_month_key("2025-01x"), None);
        assert_eq!(normalize_month_key("Janeiro"), None);
    }

    #[test]
    fn test_format_month_label() {
        assert_eq!(format_month_label("2025-01"), "jan/25");
        assert_eq!(format_month_label("2024-12-10"), "dez/24");
        assert_eq!(format_month_label("Q1"), "Q1");
    }

    #[test]
    fn test_detect_fields() {
        let rows = vec![json!({"Month": "2025-01", "label": "x", "TotalRevenue": 10.0})];
        assert_eq!(detect_label_field(&rows, &["month", "productName"]), "Month");
        assert_eq!(detect_value_field(&rows, &["totalRevenue", "sales"]), "TotalRevenue");

        let fallback = vec![json!({"name": "Pikachu", "note": "x", "days": 12})];
        assert_eq!(detect_label_field(&fallback, &["productName"]), "name");
        assert_eq!(detect_value_field(&fallback, &["daysInStock"]), "days");

        let no_numbers = vec![json!({"a": "x", "b": "y"})];
        assert_eq!(detect_value_field(&no_numbers, &["value"]), "b");

        assert_eq!(detect_label_field(&[], &["month"]), "label");
        assert_eq!(detect_value_field(&[], &["value"]), "value");
    }

    #[test]
    fn test_chart_series_row_by_row() {
        let rows = vec![
            json!({"productName": "Pikachu", "daysInStock": 30}),
            json!({"productName": "Mew", "daysInStock": "12"}),
            json!({"daysInStock": 1}),
        ];
        let series = chart_series(&rows, &["productName", "item", "name"], &["daysInStock"]);
        assert_eq!(series.labels, vec!["Pikachu", "Mew", "---"]);
        assert_eq!(series.values, vec![30.0, 12.0, 1.0]);
    }

    #[test]
    fn test_chart_series_groups_months() {
        let series = chart_series(&sales_rows(), &["month"], &["total_sold"]);
        assert_eq!(series.labels, vec!["jan/25", "fev/25"]);
        assert_eq!(series.values, vec![5.0, 5.0]);
    }

    #[test]
    fn test_pivot_by_month() {
        let rows = vec![
            json!({"month": "2025-02-03", "productName": "Mew", "totalRevenue": 10}),
            json!({"month": "2025-01-10", "productName": "Pikachu", "totalRevenue": 4}),
            json!({"month": "2025-01-11", "productName": "Mew", "totalRevenue": 1}),
            json!({"month": "2025-02-20", "productName": "Mew", "totalRevenue": 2}),
        ];
        let pivot = pivot_by_month(&rows, "month", "productName", "totalRevenue");
        assert_eq!(pivot.keys, vec!["2025-01", "2025-02"]);
        assert_eq!(pivot.series.len(), 2);
        assert_eq!(pivot.series[0].name, "Mew");
        assert_eq!(pivot.series[0].values, vec![1.0, 12.0]);
        assert_eq!(pivot.series[1].values, vec![4.0, 0.0]);
    }

    #[test]
    fn test_chart_kind_cycle() {
        let mut kind = ChartKind::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(seen, vec![ChartKind::Bar, ChartKind::Pie, ChartKind::Doughnut]);
        assert_eq!(kind, ChartKind::Bar);
        assert_eq!(ChartKind::from_code(ChartKind::Doughnut.code()), Some(ChartKind::Doughnut));
    }
}
