//! Display formatting for numbers, money and timestamps.

use chrono::{DateTime, Utc};

/// `1234567` -> `1,234,567`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rupees with Indian digit grouping: `123456.5` -> `₹1,23,456.50`.
pub fn inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as u64;
    let (rupees, paise) = (paise / 100, paise % 100);

    let digits = rupees.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut out = String::new();
        for (i, c) in head.chars().enumerate() {
            if i > 0 && (head.len() - i) % 2 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        format!("{out},{tail}")
    };
    format!("{sign}₹{grouped}.{paise:02}")
}

fn parse(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// `Just now`, `5 minutes ago`, `3 hours ago`, `2 days ago`.
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse(timestamp) else {
        return String::new();
    };
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} minutes ago")
    } else if minutes < 1440 {
        format!("{} hours ago", minutes / 60)
    } else {
        format!("{} days ago", minutes / 1440)
    }
}

/// `Jan 15, 2024`; `YYYY-MM-DD` dates are accepted as well.
pub fn short_date(timestamp: &str) -> String {
    if let Some(t) = parse(timestamp) {
        return t.format("%b %-d, %Y").to_string();
    }
    timestamp
        .get(..10)
        .and_then(|day| chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// `full-time` -> `Full Time`, `new` -> `New`.
pub fn title_case(label: &str) -> String {
    label
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(inr(0.0), "₹0.00");
        assert_eq!(inr(3499.0), "₹3,499.00");
        assert_eq!(inr(123456.5), "₹1,23,456.50");
        assert_eq!(inr(12345678.0), "₹1,23,45,678.00");
        assert_eq!(inr(-15.25), "-₹15.25");
    }

    #[test]
    fn relative_times() {
        let now = parse("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(relative_time("2024-01-15T11:59:30Z", now), "Just now");
        assert_eq!(relative_time("2024-01-15T11:15:00Z", now), "45 minutes ago");
        assert_eq!(relative_time("2024-01-15T07:00:00Z", now), "5 hours ago");
        assert_eq!(relative_time("2024-01-12T12:00:00Z", now), "3 days ago");
        assert_eq!(relative_time("garbage", now), "");
    }

    #[test]
    fn dates_and_labels() {
        assert_eq!(short_date("2024-01-15T10:00:00.000Z"), "Jan 15, 2024");
        assert_eq!(short_date("1990-05-05"), "May 5, 1990");
        assert_eq!(short_date(""), "N/A");
        assert_eq!(title_case("full-time"), "Full Time");
        assert_eq!(title_case("replied"), "Replied");
    }
}
