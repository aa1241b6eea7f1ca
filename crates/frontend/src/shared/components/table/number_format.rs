//! Number formatting in the pt-BR convention: `.` groups thousands, `,` separates decimals

/// Formats a number with thousands separators and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(4) as usize;
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i.to_string(), Some(d.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{sign}{grouped},{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Brazilian real, as `Intl.NumberFormat("pt-BR", {currency: "BRL"})` prints it
///
/// ```
/// use frontend::shared::components::table::format_brl;
/// assert_eq!(format_brl(1234.5), "R$ 1.234,50");
/// ```
pub fn format_brl(value: f64) -> String {
    let amount = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && amount != "0,00" {
        format!("-R$ {amount}")
    } else {
        format!("R$ {amount}")
    }
}

/// `format_brl` for optional prices; missing values print as `---`
pub fn format_brl_opt(value: Option<f64>) -> String {
    value.map(format_brl).unwrap_or_else(|| "---".to_string())
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(9.9), "R$ 9,90");
        assert_eq!(format_brl(-1234.56), "-R$ 1.234,56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1.234");
    }

    #[test]
    fn test_format_brl_opt() {
        assert_eq!(format_brl_opt(None), "---");
        assert_eq!(format_brl_opt(Some(10.0)), "R$ 10,00");
    }
}
