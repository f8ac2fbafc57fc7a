use crate::engine::types::{EntityId, EntityKey};
use crate::test_helpers::factories::table;
use crate::test_helpers::factory::Factory;

#[test]
fn test_total_row_factory() {
    let row = Factory::total_row().with("id", 2).with("name", "John").with("count", 20).create();

    assert_eq!(row.id, EntityId::from(2));
    assert_eq!(row.name, "John");
    assert_eq!(row.count, 20);
}

#[test]
fn test_table_shorthand_sums_repeated_keys() {
    let t = table(&[(1, "Mike", 10), (1, "Mike", 5)]);
    assert_eq!(t.len(), 1);
    assert_eq!(t.get(&EntityKey::new(1, "Mike")), Some(15));
}
