use super::*;

fn child_input() -> ChildFormInput {
    ChildFormInput {
        first_name: "Anna".to_owned(),
        last_name: "Kovalenko".to_owned(),
        patronymic: "Ivanivna".to_owned(),
        birthday_date: "2019-05-04".to_owned(),
        group_id: "3".to_owned(),
    }
}

#[test]
fn group_name_trims_and_requires_two_chars() {
    assert_eq!(validate_group_name("  Sunflowers  "), Ok("Sunflowers".to_owned()));
    assert_eq!(
        validate_group_name(" A "),
        Err("Group name must be at least 2 characters.")
    );
}

#[test]
fn child_form_builds_trimmed_payload() {
    let mut input = child_input();
    input.first_name = "  Anna ".to_owned();
    input.group_id = " 3 ".to_owned();
    let payload = validate_child_form(&input).expect("valid form");
    assert_eq!(payload.first_name, "Anna");
    assert_eq!(payload.last_name, "Kovalenko");
    assert_eq!(payload.birthday_date, "2019-05-04");
    assert_eq!(payload.group_id, 3);
}

#[test]
fn child_form_rejects_short_names() {
    let mut input = child_input();
    input.last_name = "K".to_owned();
    assert_eq!(validate_child_form(&input), Err("Last name is too short."));

    let mut input = child_input();
    input.first_name = " ".to_owned();
    assert_eq!(validate_child_form(&input), Err("First name is too short."));

    let mut input = child_input();
    input.patronymic = "I".to_owned();
    assert_eq!(validate_child_form(&input), Err("Patronymic is too short."));
}

#[test]
fn child_form_requires_birthday() {
    let mut input = child_input();
    input.birthday_date = "  ".to_owned();
    assert_eq!(validate_child_form(&input), Err("Pick a birthday date."));
}

#[test]
fn child_form_requires_a_selected_group() {
    let mut input = child_input();
    input.group_id = String::new();
    assert_eq!(validate_child_form(&input), Err("Pick a group."));

    let mut input = child_input();
    input.group_id = "0".to_owned();
    assert_eq!(validate_child_form(&input), Err("Pick a group."));

    let mut input = child_input();
    input.group_id = "abc".to_owned();
    assert_eq!(validate_child_form(&input), Err("Pick a group."));
}
