use crate::*;

/// A mutable path being built up during a value traversal.
#[derive(Eq, PartialEq, Clone, Debug, Default)]
pub struct SborPathBuf(Vec<usize>);

impl SborPathBuf {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn push(&mut self, path: usize) {
        self.0.push(path);
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }
}

impl From<SborPathBuf> for SborPath {
    fn from(mutable: SborPathBuf) -> Self {
        SborPath::new(mutable.0)
    }
}

/// A series of indexes which describes some value in the sbor value model. Some examples:
///
/// * `[]` - the root value
/// * `[0]` - the first field of the root tuple
/// * `[1, 3]` - the fourth element of the array in the second field of the root tuple
///
/// Map values consume two indexes: the entry index, and then `0` for the key or `1`
/// for the value.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SborPath(Vec<usize>);

impl SborPath {
    pub fn new(path: Vec<usize>) -> Self {
        SborPath(path)
    }

    pub fn get_from_value<'a, X: CustomValueKind, Y>(
        &self,
        value: &'a Value<X, Y>,
    ) -> Option<&'a Value<X, Y>> {
        let mut current = value;
        let mut remaining = self.0.as_slice();
        while let Some((&index, rest)) = remaining.split_first() {
            let (next, rest) = match current {
                Value::Enum { fields, .. } | Value::Tuple { fields } => {
                    (fields.get(index)?, rest)
                }
                Value::Array { elements, .. } => (elements.get(index)?, rest),
                Value::Map { entries, .. } => {
                    let entry = entries.get(index)?;
                    let (&side, rest) = rest.split_first()?;
                    let next = match side {
                        0 => &entry.0,
                        1 => &entry.1,
                        _ => return None,
                    };
                    (next, rest)
                }
                _ => return None,
            };
            current = next;
            remaining = rest;
        }
        Some(current)
    }

    pub fn get_from_value_mut<'a, X: CustomValueKind, Y>(
        &self,
        value: &'a mut Value<X, Y>,
    ) -> Option<&'a mut Value<X, Y>> {
        let mut current = value;
        let mut remaining = self.0.as_slice();
        while let Some((&index, rest)) = remaining.split_first() {
            let (next, rest) = match current {
                Value::Enum { fields, .. } | Value::Tuple { fields } => {
                    (fields.get_mut(index)?, rest)
                }
                Value::Array { elements, .. } => (elements.get_mut(index)?, rest),
                Value::Map { entries, .. } => {
                    let entry = entries.get_mut(index)?;
                    let (&side, rest) = rest.split_first()?;
                    let next = match side {
                        0 => &mut entry.0,
                        1 => &mut entry.1,
                        _ => return None,
                    };
                    (next, rest)
                }
                _ => return None,
            };
            current = next;
            remaining = rest;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal_prelude::*;

    fn example_value() -> BasicValue {
        BasicValue::Tuple {
            fields: vec![
                BasicValue::U8 { value: 7 },
                BasicValue::Array {
                    element_value_kind: ValueKind::String,
                    elements: vec![
                        BasicValue::String {
                            value: "a".to_string(),
                        },
                        BasicValue::String {
                            value: "b".to_string(),
                        },
                    ],
                },
                BasicValue::Map {
                    key_value_kind: ValueKind::U8,
                    value_value_kind: ValueKind::String,
                    entries: vec![(
                        BasicValue::U8 { value: 1 },
                        BasicValue::String {
                            value: "one".to_string(),
                        },
                    )],
                },
            ],
        }
    }

    #[test]
    fn test_root_path() {
        let value = example_value();
        assert_eq!(SborPath::new(vec![]).get_from_value(&value), Some(&value));
    }

    #[test]
    fn test_nested_paths() {
        let value = example_value();
        assert_eq!(
            SborPath::new(vec![0]).get_from_value(&value),
            Some(&BasicValue::U8 { value: 7 })
        );
        assert_eq!(
            SborPath::new(vec![1, 1]).get_from_value(&value),
            Some(&BasicValue::String {
                value: "b".to_string()
            })
        );
        // Map entries consume two indexes
        assert_eq!(
            SborPath::new(vec![2, 0, 1]).get_from_value(&value),
            Some(&BasicValue::String {
                value: "one".to_string()
            })
        );
        assert_eq!(SborPath::new(vec![3]).get_from_value(&value), None);
        assert_eq!(SborPath::new(vec![0, 0]).get_from_value(&value), None);
    }

    #[test]
    fn test_mutation_through_path() {
        let mut value = example_value();
        let target = SborPath::new(vec![0]).get_from_value_mut(&mut value).unwrap();
        *target = BasicValue::U8 { value: 8 };
        assert_eq!(
            SborPath::new(vec![0]).get_from_value(&value),
            Some(&BasicValue::U8 { value: 8 })
        );
    }
}
