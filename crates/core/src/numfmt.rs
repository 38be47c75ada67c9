/// Rounds to the nearest integer and groups digits with commas, matching the
/// `toLocaleString`-style figures embedded in recommendation and chat text.
pub fn thousands(v: f64) -> String {
    let rounded = v.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::thousands;

    #[test]
    fn groups_digits() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1_000.0), "1,000");
        assert_eq!(thousands(4_360_000.0), "4,360,000");
        assert_eq!(thousands(11_500_000.4), "11,500,000");
    }

    #[test]
    fn handles_negative_values() {
        assert_eq!(thousands(-1_250_000.0), "-1,250,000");
    }

    #[test]
    fn rounds_before_grouping() {
        assert_eq!(thousands(999.6), "1,000");
    }
}
