//! Text formatting for axis ticks, pills, tooltips and card counters.

use crate::dataset::valence_caption;

/// Y-axis pill text for an integer valence level, e.g. `+5 Joy`, `0 Neutral`,
/// `-3 Conflict`.
#[must_use]
pub fn format_valence_pill(level: i32) -> String {
    let caption = valence_caption(level).unwrap_or_default();
    let number = if level > 0 {
        format!("+{level}")
    } else {
        level.to_string()
    };
    if caption.is_empty() {
        number
    } else {
        format!("{number} {caption}")
    }
}

/// Revenue tick label: `$2.1B`, `$800M`, or the plain dollar value.
#[must_use]
pub fn format_revenue_axis(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.0}M", value / 1e6)
    } else {
        format!("${}", trim_decimal(format!("{value:.6}")))
    }
}

/// Revenue in whole millions, as shown in the scatter tooltip.
#[must_use]
pub fn format_revenue_millions(value: f64) -> String {
    format!("${:.0}M", value / 1e6)
}

/// Box office counter text: `1.01B`, `839M`, `48k`, `512`.
#[must_use]
pub fn format_box_office(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.0}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.0}k", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

#[must_use]
pub fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

#[must_use]
pub fn format_rmsd(value: f64) -> String {
    format!("{value:.2}")
}

/// Numeric tick label with just enough decimals for `tick_step`, grouped
/// with thousands separators.
#[must_use]
pub fn format_linear_tick(value: f64, tick_step: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let precision = precision_from_step(tick_step);
    let text = format!("{value:.precision$}");
    let text = if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_owned()
    } else {
        text
    };
    group_thousands(&text)
}

fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().min(12)
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" { "0".to_owned() } else { text }
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_linear_tick, format_revenue_axis, format_valence_pill};

    #[test]
    fn pills_carry_sign_and_caption() {
        assert_eq!(format_valence_pill(5), "+5 Joy");
        assert_eq!(format_valence_pill(0), "0 Neutral");
        assert_eq!(format_valence_pill(-10), "-10 Despair");
        assert_eq!(format_valence_pill(11), "+11");
    }

    #[test]
    fn small_revenue_values_print_without_trailing_zeros() {
        assert_eq!(format_revenue_axis(0.0), "$0");
        assert_eq!(format_revenue_axis(500_000.0), "$500000");
        assert_eq!(format_revenue_axis(200_000_000.0), "$200M");
        assert_eq!(format_revenue_axis(1_200_000_000.0), "$1.2B");
    }

    #[test]
    fn linear_ticks_follow_step_precision() {
        assert_eq!(format_linear_tick(1.5, 0.5), "1.5");
        assert_eq!(format_linear_tick(2.0, 0.5), "2.0");
        assert_eq!(format_linear_tick(4.0, 1.0), "4");
        assert_eq!(format_linear_tick(12_000.0, 2000.0), "12,000");
        assert_eq!(format_linear_tick(-0.0, 1.0), "0");
    }
}
