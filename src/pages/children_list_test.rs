use super::*;

fn child() -> Child {
    Child {
        id: 12,
        first_name: "Anna".to_owned(),
        last_name: "Kovalenko".to_owned(),
        patronymic: "Ivanivna".to_owned(),
        birthday_date: "2019-05-04".to_owned(),
        group: Group {
            id: 3,
            name: "Sunflowers".to_owned(),
            child_count: 14,
        },
    }
}

#[test]
fn full_name_is_last_first_patronymic() {
    assert_eq!(full_name(&child()), "Kovalenko Anna Ivanivna");
}

#[test]
fn group_label_includes_id() {
    assert_eq!(group_label(&child().group), "Sunflowers (#3)");
}
