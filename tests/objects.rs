use inline_json::{json_object, to_string, to_string_with_options, Options};

struct User {
    name: String,
    age: u32,
}

json_object!(User {
    "Name" => name: String,
    "Age" => age: u32,
});

struct Profile {
    user: User,
    active: bool,
}

json_object!(Profile {
    "User" => user: User,
    "Active" => active: bool,
});

struct Sparse {
    a: Option<i64>,
    b: Option<i64>,
    c: Option<i64>,
}

json_object!(Sparse {
    "a" => a: Option<i64>,
    "b" => b: Option<i64>,
    "c" => c: Option<i64>,
});

struct Account {
    user_id: u64,
    display_name: String,
}

json_object!(Account {
    "UserID" => user_id: u64,
    "DisplayName" => display_name: String,
});

struct Empty;

json_object!(Empty {});

struct Employee {
    name: String,
    years: u32,
}

json_object!(Employee {
    "Name" => name: String,
    "Years" => years: u32,
});

struct Manager {
    employee: Employee,
    reports: u32,
}

json_object!(Manager: employee as Employee {
    "Reports" => reports: u32,
});

fn user() -> User {
    User {
        name: "Alice".to_string(),
        age: 30,
    }
}

#[test]
fn simple_object() {
    assert_eq!(to_string(&user()).unwrap(), r#"{"Name":"Alice","Age":30}"#);
}

#[test]
fn nested_object() {
    let profile = Profile {
        user: user(),
        active: true,
    };
    assert_eq!(
        to_string(&profile).unwrap(),
        r#"{"User":{"Name":"Alice","Age":30},"Active":true}"#
    );
}

#[test]
fn pretty_printed_object() {
    let profile = Profile {
        user: user(),
        active: false,
    };
    assert_eq!(
        to_string_with_options(&profile, &Options::PRETTY_PRINT).unwrap(),
        "{\n  \"User\": {\n    \"Name\": \"Alice\",\n    \"Age\": 30\n  },\n  \"Active\": false\n}"
    );
}

#[test]
fn exclude_nulls_skips_members_without_dangling_commas() {
    let sparse = Sparse {
        a: None,
        b: Some(5),
        c: None,
    };
    assert_eq!(
        to_string_with_options(&sparse, &Options::EXCLUDE_NULLS).unwrap(),
        r#"{"b":5}"#
    );
}

#[test]
fn exclude_nulls_with_every_member_null() {
    let sparse = Sparse {
        a: None,
        b: None,
        c: None,
    };
    assert_eq!(
        to_string_with_options(&sparse, &Options::EXCLUDE_NULLS).unwrap(),
        "{}"
    );
}

#[test]
fn nulls_kept_by_default() {
    let sparse = Sparse {
        a: None,
        b: Some(5),
        c: None,
    };
    assert_eq!(
        to_string(&sparse).unwrap(),
        r#"{"a":null,"b":5,"c":null}"#
    );
}

#[test]
fn camel_case_lowercases_only_the_first_character() {
    let account = Account {
        user_id: 7,
        display_name: "ada".to_string(),
    };
    assert_eq!(
        to_string_with_options(&account, &Options::CAMEL_CASE).unwrap(),
        r#"{"userID":7,"displayName":"ada"}"#
    );
}

#[test]
fn verbatim_names_pass_through() {
    let account = Account {
        user_id: 7,
        display_name: "ada".to_string(),
    };
    assert_eq!(
        to_string(&account).unwrap(),
        r#"{"UserID":7,"DisplayName":"ada"}"#
    );
}

#[test]
fn empty_object_stays_compact_under_pretty_print() {
    assert_eq!(to_string(&Empty).unwrap(), "{}");
    assert_eq!(
        to_string_with_options(&Empty, &Options::PRETTY_PRINT).unwrap(),
        "{}"
    );
}

#[test]
fn inherited_members_excluded_by_default() {
    let manager = Manager {
        employee: Employee {
            name: "Grace".to_string(),
            years: 11,
        },
        reports: 4,
    };
    assert_eq!(to_string(&manager).unwrap(), r#"{"Reports":4}"#);
}

#[test]
fn inherited_members_precede_declared_ones() {
    let manager = Manager {
        employee: Employee {
            name: "Grace".to_string(),
            years: 11,
        },
        reports: 4,
    };
    let options = Options::new().with_include_inherited(true);
    assert_eq!(
        to_string_with_options(&manager, &options).unwrap(),
        r#"{"Name":"Grace","Years":11,"Reports":4}"#
    );
}

#[test]
fn repeated_calls_are_byte_identical() {
    let first = to_string(&user()).unwrap();
    let second = to_string(&user()).unwrap();
    assert_eq!(first, second);
}
