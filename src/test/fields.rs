use crate::log::{DELAY_FIELD, FieldList, LineError, PAYLOAD_FIELD};

const DATA: &str = " Bundle Arrived: from:b::to:a::creationTime:227462327::seqNum:0; \
                    Time (ms) since creation: 117; Size of bundle payload (bytes):88";

#[test]
fn header_is_the_first_two_words() {
    let fields = FieldList::split(DATA);
    assert_eq!(fields.header(), Some(("Bundle", "Arrived")));
}

#[test]
fn named_lookup_finds_delay_and_payload() {
    let fields = FieldList::split(DATA);
    assert_eq!(fields.named_i64(DELAY_FIELD).unwrap(), 117);
    assert_eq!(fields.named_u64(PAYLOAD_FIELD).unwrap(), 88);
}

#[test]
fn missing_named_field_is_reported() {
    let fields = FieldList::split(" Bundle Arrived: from:b::to:a");
    assert_eq!(
        fields.named_i64(DELAY_FIELD),
        Err(LineError::MissingField { name: DELAY_FIELD })
    );
}

#[test]
fn non_numeric_value_is_reported() {
    let fields = FieldList::split(" Bundle Arrived: Time (ms) since creation: soon");
    assert!(matches!(
        fields.named_i64(DELAY_FIELD),
        Err(LineError::BadValue { .. })
    ));
}

#[test]
fn field_name_at_end_of_list_has_no_value() {
    let fields = FieldList::split(" Bundle Arrived; Time (ms) since creation");
    assert_eq!(
        fields.named_i64(DELAY_FIELD),
        Err(LineError::MissingValue { name: DELAY_FIELD })
    );
}

#[test]
fn header_absent_on_empty_segment() {
    assert_eq!(FieldList::split("   ").header(), None);
}
