/// Format a count with thousands separators, e.g. `1234567` -> `"1,234,567"`.
pub fn format_number(num: u64) -> String {
    num.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",")
}

/// Format an axis tick compactly: `950` -> `"950"`, `1500` -> `"1.5K"`,
/// `2000000` -> `"2M"`. One decimal at most, dropped once the scaled value
/// reaches two digits or lands on a whole number.
pub fn format_axis_value(num: u64) -> String {
    const SCALES: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (scale, suffix) in SCALES {
        if num >= scale {
            let scaled = num as f64 / scale as f64;
            if scaled >= 10.0 || scaled.fract() == 0.0 {
                return format!("{:.0}{}", scaled, suffix);
            }
            return format!("{:.1}{}", scaled, suffix);
        }
    }

    num.to_string()
}
