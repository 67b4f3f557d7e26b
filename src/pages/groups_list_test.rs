use super::*;

fn group(id: i64, name: &str, child_count: i64) -> Group {
    Group { id, name: name.to_owned(), child_count }
}

#[test]
fn sort_groups_by_id() {
    let groups = vec![group(3, "Bees", 0), group(1, "Acorns", 2), group(2, "Cats", 1)];
    let sorted = sort_groups(groups, GroupSort::Id);
    let ids = sorted.iter().map(|g| g.id).collect::<Vec<_>>();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn sort_groups_by_name() {
    let groups = vec![group(3, "Cats", 0), group(1, "Bees", 2), group(2, "Acorns", 1)];
    let sorted = sort_groups(groups, GroupSort::Name);
    let names = sorted.iter().map(|g| g.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["Acorns", "Bees", "Cats"]);
}

#[test]
fn delete_refusal_blocks_non_empty_group() {
    let refusal = delete_refusal(&group(1, "Bees", 14)).expect("refusal");
    assert!(refusal.contains("14"));
}

#[test]
fn delete_refusal_allows_empty_group() {
    assert_eq!(delete_refusal(&group(1, "Bees", 0)), None);
}

#[test]
fn sort_selector_value_maps_to_column() {
    assert_eq!(GroupSort::from_value("name"), GroupSort::Name);
    assert_eq!(GroupSort::from_value("id"), GroupSort::Id);
    assert_eq!(GroupSort::from_value("bogus"), GroupSort::Id);
}
