use super::*;

#[test]
fn child_deserializes_camel_case_wire_shape() {
    let json = r#"{
        "id": 12,
        "firstName": "Anna",
        "lastName": "Kovalenko",
        "patronymic": "Ivanivna",
        "birthdayDate": "2019-05-04",
        "group": { "id": 3, "name": "Sunflowers", "childCount": 14 }
    }"#;
    let child: Child = serde_json::from_str(json).expect("child json");
    assert_eq!(child.id, 12);
    assert_eq!(child.first_name, "Anna");
    assert_eq!(child.birthday_date, "2019-05-04");
    assert_eq!(child.group.name, "Sunflowers");
    assert_eq!(child.group.child_count, 14);
}

#[test]
fn create_child_serializes_camel_case() {
    let payload = CreateChild {
        first_name: "Anna".to_owned(),
        last_name: "Kovalenko".to_owned(),
        patronymic: "Ivanivna".to_owned(),
        birthday_date: "2019-05-04".to_owned(),
        group_id: 3,
    };
    let value = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "firstName": "Anna",
            "lastName": "Kovalenko",
            "patronymic": "Ivanivna",
            "birthdayDate": "2019-05-04",
            "groupId": 3
        })
    );
}

#[test]
fn login_response_tolerates_missing_fields() {
    let resp: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).expect("login json");
    assert_eq!(resp.message, "ok");
    assert_eq!(resp.data, "");
}
