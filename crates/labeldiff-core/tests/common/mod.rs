use labeldiff_core::comparer::{comparable, slice, Comparers};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub id: u32,
    pub items: Vec<Item>,
}

/// Build an item from string literals
#[allow(dead_code)]
pub fn item(key: &str, value: &str) -> Item {
    Item {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// The two objects of the canonical report example
#[allow(dead_code)]
pub fn sample_objects() -> (Object, Object) {
    let a = Object {
        id: 1,
        items: vec![item("item1", "value1"), item("item2", "value2")],
    };
    let b = Object {
        id: 2,
        items: vec![item("item1", "value1"), item("item3", "value3")],
    };
    (a, b)
}

/// `ID` by equality, `Items` element-wise by `Key` and `Value`
#[allow(dead_code)]
pub fn object_comparers(obj: &Object) -> Comparers {
    vec![
        comparable("ID", obj.id),
        slice("Items", obj.items.clone(), item_comparers),
    ]
}

#[allow(dead_code)]
pub fn item_comparers(item: &Item) -> Comparers {
    vec![
        comparable("Key", item.key.clone()),
        comparable("Value", item.value.clone()),
    ]
}
