//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Денежное значение: 2 знака и код валюты, если он известен
pub fn format_money(value: f64, currency: &str) -> String {
    let amount = format_number_with_decimals(value, 2);
    if currency.is_empty() {
        amount
    } else {
        format!("{} {}", amount, currency)
    }
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Дни запаса; `∞` когда продаж нет
pub fn format_days(days: Option<f64>) -> String {
    match days {
        Some(d) => format_number_with_decimals(d, 1),
        None => "∞".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56, ""), "1,234.56");
        assert_eq!(format_money(1234567.89, "USD"), "1,234,567.89 USD");
        assert_eq!(format_money(0.0, ""), "0.00");
        assert_eq!(format_money(-1234.56, ""), "-1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(Some(12.345)), "12.3");
        assert_eq!(format_days(None), "∞");
    }
}
