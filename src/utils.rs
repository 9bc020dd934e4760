/// Formats a floating point number the way the C `%g` conversion
/// does, with given number of significant digits.
pub(crate) fn format_g(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let significant = significant.max(1);
    let scientific = format!("{:.*e}", significant - 1, value);

    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= significant as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (significant as i32 - 1 - exponent) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod test {
    use super::format_g;
    #[test]
    fn test_format_g() {
        assert_eq!(format_g(0.0, 6), "0");
        assert_eq!(format_g(1000.0, 6), "1000");
        assert_eq!(format_g(-500.0, 6), "-500");
        assert_eq!(format_g(0.0001, 6), "0.0001");
        assert_eq!(format_g(0.05, 6), "0.05");
        assert_eq!(format_g(1.5, 6), "1.5");
        assert_eq!(format_g(1.446445072869704e-11, 6), "1.44645e-11");
        assert_eq!(format_g(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_g(0.00001, 6), "1e-05");
        assert_eq!(format_g(123456.0, 6), "123456");
    }
}
