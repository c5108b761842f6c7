use inline_json::{json_enum, json_object, to_string, to_string_with_options, Options};

enum Color {
    Red,
    Green,
    Blue,
}

json_enum!(Color { Red, Green, Blue });

enum Priority {
    Low,
    Normal,
    Critical,
}

json_enum!(Priority as numbers {
    Low = 0,
    Normal = 1,
    Critical = 9,
});

struct Ticket {
    color: Color,
    priority: Priority,
}

json_object!(Ticket {
    "Color" => color: Color,
    "Priority" => priority: Priority,
});

#[test]
fn name_representation() {
    assert_eq!(to_string(&Color::Red).unwrap(), "\"Red\"");
    assert_eq!(to_string(&Color::Blue).unwrap(), "\"Blue\"");
}

#[test]
fn underlying_number_representation() {
    assert_eq!(to_string(&Priority::Low).unwrap(), "0");
    assert_eq!(to_string(&Priority::Critical).unwrap(), "9");
}

#[test]
fn enums_inside_objects() {
    let ticket = Ticket {
        color: Color::Green,
        priority: Priority::Normal,
    };
    assert_eq!(
        to_string(&ticket).unwrap(),
        r#"{"Color":"Green","Priority":1}"#
    );
}

#[test]
fn enum_members_in_sequences() {
    let colors = vec![Color::Red, Color::Green];
    assert_eq!(to_string(&colors).unwrap(), r#"["Red","Green"]"#);
}

#[test]
fn optional_enums_respect_exclude_nulls() {
    struct Labelled {
        color: Option<Color>,
    }

    json_object!(Labelled {
        "Color" => color: Option<Color>,
    });

    let none = Labelled { color: None };
    assert_eq!(to_string(&none).unwrap(), r#"{"Color":null}"#);
    assert_eq!(
        to_string_with_options(&none, &Options::EXCLUDE_NULLS).unwrap(),
        "{}"
    );
}
