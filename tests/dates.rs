use chrono::{NaiveDate, TimeZone, Utc};
use inline_json::{
    json_object, to_string, to_string_with_options, DateTimeFormat, DateTimeKind, JsonDateTime,
    Options, UnspecifiedDateTimeKindBehavior,
};

fn instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
}

#[test]
fn microsoft_style_is_the_default() {
    assert_eq!(
        to_string(&instant()).unwrap(),
        r#""\/Date(1609459200000)\/""#
    );
}

#[test]
fn milliseconds_since_epoch() {
    assert_eq!(
        to_string_with_options(&instant(), &Options::MILLISECONDS_SINCE_EPOCH).unwrap(),
        "1609459200000"
    );
}

#[test]
fn seconds_since_epoch() {
    assert_eq!(
        to_string_with_options(&instant(), &Options::SECONDS_SINCE_EPOCH).unwrap(),
        "1609459200"
    );
}

#[test]
fn iso8601() {
    assert_eq!(
        to_string_with_options(&instant(), &Options::ISO8601).unwrap(),
        r#""2021-01-01T00:00:00Z""#
    );
}

#[test]
fn iso8601_with_fractional_seconds() {
    let naive = NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_milli_opt(12, 30, 5, 250)
        .unwrap();
    let date = JsonDateTime::new(naive, DateTimeKind::Utc);
    assert_eq!(
        to_string_with_options(&date, &Options::ISO8601).unwrap(),
        r#""2021-01-01T12:30:05.25Z""#
    );
}

#[test]
fn rfc1123() {
    assert_eq!(
        to_string_with_options(&instant(), &Options::RFC1123).unwrap(),
        r#""Fri, 01 Jan 2021 00:00:00 GMT""#
    );
}

#[test]
fn unspecified_kind_treated_as_utc_when_configured() {
    let naive = NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let options = Options::SECONDS_SINCE_EPOCH
        .with_unspecified_kind(UnspecifiedDateTimeKindBehavior::IsUtc);
    assert_eq!(
        to_string_with_options(&naive, &options).unwrap(),
        "1609459200"
    );
}

#[test]
fn unspecified_kind_treated_as_local_still_produces_a_number() {
    // The local-zone interpretation depends on the machine, so only the
    // shape of the output is asserted.
    let naive = NaiveDate::from_ymd_opt(2021, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let rendered =
        to_string_with_options(&naive, &Options::SECONDS_SINCE_EPOCH).unwrap();
    assert!(rendered.parse::<i64>().is_ok(), "got {rendered}");
}

struct Event {
    name: String,
    at: JsonDateTime,
}

json_object!(Event {
    "Name" => name: String,
    "At" => at: JsonDateTime,
});

#[test]
fn dates_inside_objects_follow_the_option_set() {
    let event = Event {
        name: "launch".to_string(),
        at: JsonDateTime::from(instant()),
    };
    assert_eq!(
        to_string_with_options(&event, &Options::ISO8601).unwrap(),
        r#"{"Name":"launch","At":"2021-01-01T00:00:00Z"}"#
    );
    assert_eq!(
        to_string(&event).unwrap(),
        r#"{"Name":"launch","At":"\/Date(1609459200000)\/"}"#
    );
}
