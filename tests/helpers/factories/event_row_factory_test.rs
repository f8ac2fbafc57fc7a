use crate::engine::EntityId;
use crate::test_helpers::factories::events;
use crate::test_helpers::factory::Factory;

#[test]
fn test_event_row_factory() {
    let row = Factory::event_row()
        .with("id", 7)
        .with("name", "Anna")
        .with("exception", "on time")
        .create();

    assert_eq!(row.id, EntityId::from(7));
    assert_eq!(row.name, "Anna");
    assert_eq!(row.exception, "on time");
}

#[test]
fn test_event_row_factory_list_and_shorthand() {
    let rows = Factory::event_row().with("id", 5).create_list(3);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.id.as_str() == "5" && r.exception == "late"));

    let batch = events(&[(1, "Mike", "late"), (2, "John", "on time")]);
    assert_eq!(batch[1].name, "John");
    assert_eq!(batch[1].exception, "on time");
}

#[test]
fn test_event_row_factory_string_id() {
    let row = Factory::event_row().with("id", "E17").create();
    assert_eq!(row.id.as_str(), "E17");
}
