const CURRENCY: &str = "VND";

pub fn format_price(price: f64) -> String {
    let total_cents = (price.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 { "-" } else { "" };

    if cents == 0 {
        format!("{sign}{grouped} {CURRENCY}")
    } else {
        format!("{sign}{grouped}.{cents:02} {CURRENCY}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(250000.0), "250,000 VND");
        assert_eq!(format_price(1234567.0), "1,234,567 VND");
        assert_eq!(format_price(999.0), "999 VND");
    }

    #[test]
    fn keeps_fraction() {
        assert_eq!(format_price(1500.5), "1,500.50 VND");
    }
}
