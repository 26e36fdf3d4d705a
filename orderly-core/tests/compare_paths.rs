mod support;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use orderly_core::model::{Order, SortValue, Value};
use orderly_core::{Comparator, GetterConfig, PathConfig, SortArg};
use support::{init_tracing, numbers, record, texts, users};

fn sort_by(items: &mut [Value], args: &[&str]) -> Result<()> {
    Comparator::<Value>::new(args.iter().copied())?.sort(items)?;
    Ok(())
}

#[test]
fn sorts_by_top_level_field() -> Result<()> {
    init_tracing();
    let mut users = users();

    sort_by(&mut users, &["id"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Charlie", "Bob", "Alice"]);

    sort_by(&mut users, &["admin"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Bob", "Charlie", "Alice"]);

    sort_by(&mut users, &["name"])?;
    assert_eq!(texts(&users, "name")?, ["Alice", "Bob", "Charlie", "David"]);
    Ok(())
}

#[test]
fn dash_prefix_reverses() -> Result<()> {
    let mut users = users();

    sort_by(&mut users, &["-id"])?;
    assert_eq!(texts(&users, "name")?, ["Alice", "Bob", "Charlie", "David"]);

    sort_by(&mut users, &["-admin"])?;
    assert_eq!(texts(&users, "name")?, ["Alice", "Charlie", "Bob", "David"]);

    sort_by(&mut users, &["-name"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Charlie", "Bob", "Alice"]);
    Ok(())
}

fn with_city(name: &str, city: Option<&str>) -> Value {
    let mut entries = vec![("name", Value::from(name))];
    if let Some(city) = city {
        entries.push(("address", record([("city", city)])));
    }
    record(entries)
}

#[test]
fn sorts_by_nested_field() -> Result<()> {
    let mut users = vec![
        with_city("Alice", Some("Zagreb")),
        with_city("Bob", Some("Yerevan")),
        with_city("Charlie", Some("Xalapa")),
        with_city("David", Some("Wellington")),
    ];

    sort_by(&mut users, &["address.city"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Charlie", "Bob", "Alice"]);
    Ok(())
}

#[test]
fn absent_intermediate_sorts_as_missing() -> Result<()> {
    let mut users = vec![
        with_city("Alice", None),
        with_city("Bob", Some("Zagreb")),
        with_city("Charlie", Some("Yerevan")),
        with_city("David", Some("Xalapa")),
    ];

    sort_by(&mut users, &["address.city"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Charlie", "Bob", "Alice"]);

    sort_by(&mut users, &["-address.city"])?;
    assert_eq!(texts(&users, "name")?, ["Alice", "Bob", "Charlie", "David"]);
    Ok(())
}

#[test]
fn sorts_by_list_element() -> Result<()> {
    let mut users = vec![
        record([
            ("name", Value::from("Alice")),
            ("emails", Value::list(["alice@ltd.test", "xoxo-aly@mail.test"])),
        ]),
        record([
            ("name", Value::from("Bob")),
            ("emails", Value::list(["robert@ltd.test", "bob@mail.test"])),
        ]),
        record([
            ("name", Value::from("Charlie")),
            ("emails", Value::list(["charles@ltd.test", "chuck@m.test"])),
        ]),
    ];

    sort_by(&mut users, &["emails.0"])?;
    assert_eq!(texts(&users, "name")?, ["Alice", "Charlie", "Bob"]);

    sort_by(&mut users, &["emails.1"])?;
    assert_eq!(texts(&users, "name")?, ["Bob", "Charlie", "Alice"]);
    Ok(())
}

#[test]
fn sorts_by_field_inside_list_element() -> Result<()> {
    let candidate = |company: &str, years: i64| {
        record([(
            "positions",
            Value::list([record([
                ("company", Value::from(company)),
                ("years", Value::from(years)),
            ])]),
        )])
    };
    let mut candidates = vec![
        candidate("Amazon", 5),
        candidate("Google", 2),
        candidate("Facebook", 3),
    ];
    let years = |items: &[Value]| -> Vec<i64> {
        items
            .iter()
            .filter_map(|item| match item.get("positions") {
                Some(Value::List(positions)) => match positions[0].get("years") {
                    Some(Value::Number(n)) => Some(*n as i64),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    };

    sort_by(&mut candidates, &["positions.0.years"])?;
    assert_eq!(years(&candidates), [2, 3, 5]);

    sort_by(&mut candidates, &["positions.0.company"])?;
    assert_eq!(years(&candidates), [5, 3, 2]);
    Ok(())
}

#[test]
fn sorts_by_list_length() -> Result<()> {
    let pet = |name: &str, favorites: &[&str]| {
        record([
            ("name", Value::from(name)),
            ("favorites", Value::list(favorites.iter().copied())),
        ])
    };
    let mut pets = vec![
        pet("Cat", &[]),
        pet("Dog", &["banana", "bread", "cheese"]),
        pet("Fish", &["krill"]),
        pet("Hamster", &["grapes", "broccoli"]),
    ];

    sort_by(&mut pets, &["favorites.length"])?;
    assert_eq!(texts(&pets, "name")?, ["Cat", "Fish", "Hamster", "Dog"]);
    Ok(())
}

#[test]
fn path_config_order() -> Result<()> {
    let mut users = users();

    Comparator::<Value>::new([PathConfig::new("id")])?.sort(&mut users)?;
    assert_eq!(numbers(&users, "id")?, [1.0, 2.0, 3.0, 4.0]);

    Comparator::<Value>::new([PathConfig::new("id").order(Order::Desc)])?.sort(&mut users)?;
    assert_eq!(numbers(&users, "id")?, [4.0, 3.0, 2.0, 1.0]);
    Ok(())
}

fn birthdays() -> Vec<Value> {
    let date = |y, m, d| -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .unwrap_or_default()
    };

    vec![
        record([("name", Value::from("Alice")), ("birthday", Value::from(date(1990, 12, 1)))]),
        record([("name", Value::from("Bob")), ("birthday", Value::from(date(1970, 9, 1)))]),
        record([("name", Value::from("Charlie")), ("birthday", Value::from(date(1980, 10, 1)))]),
        record([("name", Value::from("David")), ("birthday", Value::from(date(2000, 1, 1)))]),
    ]
}

fn age(record: &Value) -> SortValue {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default();

    match record.get("birthday") {
        Some(Value::Date(birthday)) => {
            SortValue::from(((today - *birthday).num_days() as f64 / 365.25).floor())
        }
        _ => SortValue::Missing,
    }
}

#[test]
fn sorts_by_getter() -> Result<()> {
    let mut users = birthdays();

    Comparator::<Value>::new([SortArg::getter(age)])?.sort(&mut users)?;
    assert_eq!(texts(&users, "name")?, ["David", "Alice", "Charlie", "Bob"]);

    Comparator::<Value>::new([GetterConfig::new(age)])?.sort(&mut users)?;
    assert_eq!(texts(&users, "name")?, ["David", "Alice", "Charlie", "Bob"]);

    Comparator::<Value>::new([GetterConfig::new(age).order(Order::Desc)])?.sort(&mut users)?;
    assert_eq!(texts(&users, "name")?, ["Bob", "Charlie", "Alice", "David"]);
    Ok(())
}

#[test]
fn sorts_by_date_path() -> Result<()> {
    let mut users = birthdays();

    sort_by(&mut users, &["-birthday"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Alice", "Charlie", "Bob"]);
    Ok(())
}

#[test]
fn secondary_keys_break_ties() -> Result<()> {
    let mut users = users();

    sort_by(&mut users, &["admin", "id"])?;
    assert_eq!(texts(&users, "name")?, ["David", "Bob", "Charlie", "Alice"]);
    Ok(())
}

#[test]
fn mixes_getters_and_paths() -> Result<()> {
    let person = |id: i64, name: &str, surname: &str, age: i64| {
        record([
            ("id", Value::from(id)),
            ("name", Value::from(name)),
            ("surname", Value::from(surname)),
            ("age", Value::from(age)),
        ])
    };
    let mut users = vec![
        person(1, "Bob", "Smith", 20),
        person(2, "Bob", "J. Jones", 50),
        person(3, "Bob J.", "Jones", 30),
        person(4, "Bob", "Black", 40),
    ];

    let full_name = |record: &Value| match (record.get("name"), record.get("surname")) {
        (Some(Value::Text(name)), Some(Value::Text(surname))) => {
            SortValue::from(format!("{name} {surname}"))
        }
        _ => SortValue::Missing,
    };

    let comparator = Comparator::<Value>::new([
        SortArg::from(GetterConfig::new(full_name)),
        SortArg::from("age"),
    ])?;
    comparator.sort(&mut users)?;

    assert_eq!(numbers(&users, "id")?, [4.0, 3.0, 2.0, 1.0]);
    Ok(())
}
