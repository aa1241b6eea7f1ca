/// Utilities for date and time formatting
///
/// Dates are shown the pt-BR way: `dd/mm/yyyy` and `dd/mm/yyyy hh:mm`.
use contracts::domain::a004_movement::audit::parse_timestamp;

/// Format an ISO datetime to `DD/MM/YYYY HH:MM`
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_timestamp(datetime_str) {
        Some(ts) => ts.format("%d/%m/%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format an ISO date or datetime to `DD/MM/YYYY`
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if year.len() == 4 => {
            format!("{}/{}/{}", day, month, year)
        }
        _ => date_str.to_string(),
    }
}

/// `format_datetime` for optional values; missing values print as `---`
pub fn format_datetime_opt(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "---".to_string())
}

/// Today in the browser's local time as `YYYY-MM-DD`, the value format of `<input type="date">`
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime_opt(None), "---");
        assert_eq!(format_datetime_opt(Some("")), "---");
    }
}
