use chrono::NaiveDate;
use serde_json::json;

use super::*;

fn row() -> JsonValue {
    json!({
        "ID": "5",
        "name": "www",
        "ttl": "1800",
        "rdtype": "a",
        "rdata": "1.2.3.4",
        "changed_date": "2024-01-01 00:00:00",
        "author_comment": "",
    })
}

#[test]
fn type_parsing() {
    assert_eq!(Type::parse("A").unwrap(), Type::A);
    assert_eq!(Type::parse("aaaa").unwrap(), Type::Aaaa);
    assert_eq!(Type::parse("Mx").unwrap(), Type::Mx);
    assert_eq!(Type::parse("sshfp").unwrap(), Type::Sshfp);
    assert_eq!(Type::parse("TXT").unwrap(), Type::Txt);

    assert!(matches!(
        Type::parse("cnamex"),
        Err(ApiError::UnknownRecordType(t)) if t == "CNAMEX"
    ));
}

#[test]
fn type_strings() {
    assert_eq!(Type::Aaaa.as_str(), "AAAA");
    assert_eq!(Type::Sshfp.to_string(), "SSHFP");
    assert_eq!(serde_json::to_value(Type::Txt).unwrap(), json!("TXT"));
}

#[test]
fn row_decoding() {
    let record = Record::from_row(row()).unwrap();

    assert_eq!(record.id, 5);
    assert_eq!(record.name, "www");
    assert_eq!(record.ttl, 1800);
    assert_eq!(record.type_, Type::A);
    assert_eq!(record.content, "1.2.3.4");
    assert_eq!(
        record.changed,
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
    assert_eq!(record.author_comment, "");
}

#[test]
fn dict_form() {
    let dict = Record::from_row(row()).unwrap().to_dict();

    assert_eq!(dict.changed, "2024-01-01 00:00:00");
    assert_eq!(dict.record_type, "A");
    assert_eq!(
        serde_json::to_value(&dict).unwrap(),
        json!({
            "id": 5,
            "name": "www",
            "ttl": 1800,
            "record_type": "A",
            "content": "1.2.3.4",
            "changed": "2024-01-01 00:00:00",
            "author_comment": "",
        })
    );
}

#[test]
fn numeric_fields_as_numbers() {
    let mut row = row();
    row["ID"] = json!(17);
    row["ttl"] = json!(300);
    row.as_object_mut().unwrap().remove("author_comment");

    let record = Record::try_from(row).unwrap();
    assert_eq!(record.id, 17);
    assert_eq!(record.ttl, 300);
    assert_eq!(record.author_comment, "");
}

#[test]
fn unknown_type() {
    let mut row = row();
    row["rdtype"] = json!("CNAMEX");

    assert!(matches!(
        Record::from_row(row),
        Err(ClientError::Api(ApiError::UnknownRecordType(_)))
    ));
}

#[test]
fn bad_rows() {
    let mut bad_date = row();
    bad_date["changed_date"] = json!("01.01.2024 00:00");
    assert!(matches!(
        Record::from_row(bad_date),
        Err(ClientError::Timestamp(_))
    ));

    let mut bad_id = row();
    bad_id["ID"] = json!("five");
    assert!(matches!(Record::from_row(bad_id), Err(ClientError::Json(_))));

    let mut missing = row();
    missing.as_object_mut().unwrap().remove("rdata");
    assert!(matches!(Record::from_row(missing), Err(ClientError::Json(_))));
}
