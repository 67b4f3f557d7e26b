use super::*;

#[test]
fn formats_iso_date_for_display() {
    assert_eq!(format_date("2019-05-04"), "04.05.2019");
}

#[test]
fn passes_through_non_iso_input() {
    assert_eq!(format_date("04.05.2019"), "04.05.2019");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2019-5-4"), "2019-5-4");
}

#[test]
fn passes_through_datetime_suffix() {
    assert_eq!(format_date("2019-05-04T00:00:00"), "2019-05-04T00:00:00");
}
