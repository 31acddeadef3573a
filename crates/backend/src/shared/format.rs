/// Число с разделителями триад (точками): `1234567` → `1.234.567`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let first = digits.len() % 3;
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - first) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}

/// Размер тела ответа для лога запросов
pub fn format_size(bytes: usize) -> String {
    if bytes == 0 {
        "-".to_string()
    } else {
        format_number(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(123456), "123.456");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_size_marks_empty_body() {
        assert_eq!(format_size(0), "-");
        assert_eq!(format_size(2048), "2.048");
    }
}
