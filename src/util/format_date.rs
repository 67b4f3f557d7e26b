//! Birthday display formatting.

#[cfg(test)]
#[path = "format_date_test.rs"]
mod format_date_test;

/// Reformat an ISO `YYYY-MM-DD` date as `DD.MM.YYYY` for tables.
///
/// Anything that does not look like an ISO date is returned unchanged.
pub fn format_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    if !is_digits(year, 4) || !is_digits(month, 2) || !is_digits(day, 2) {
        return iso.to_owned();
    }
    format!("{day}.{month}.{year}")
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.chars().all(|c| c.is_ascii_digit())
}
