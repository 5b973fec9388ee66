//!
//! Properties handling module.
//!
//! Provides the dynamic property storage attached to container values, as
//! well as property access and assignment over any runtime value.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::{
    errors::{PropsError, PropsResult},
    gc::GcCell,
    values::RuntimeValue,
};

/// A single property slot
#[derive(Debug, Clone)]
pub struct Prop {
    /// Value stored in the slot
    pub value: RuntimeValue,

    /// Is the slot visible to generic enumeration?
    pub enumerable: bool,
}

/// Ordered table of named properties
///
/// Every property is stored along its enumerability flag, which makes the
/// enumeration filter a plain predicate over the table.
#[derive(Debug, Clone, Default)]
pub struct PropsTable {
    entries: IndexMap<String, Prop>,
}

impl PropsTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Assign a property
    ///
    /// Overwriting an existing slot keeps its enumerability flag ; creating a
    /// new slot marks it enumerable.
    pub fn set(&mut self, key: impl Into<String>, value: RuntimeValue) {
        match self.entries.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().value = value;
            }

            Entry::Vacant(entry) => {
                entry.insert(Prop {
                    value,
                    enumerable: true,
                });
            }
        }
    }

    /// Define a property with an explicit enumerability flag
    ///
    /// Unlike [`PropsTable::set`], this overwrites the flag of an existing
    /// slot.
    pub fn define(&mut self, key: impl Into<String>, value: RuntimeValue, enumerable: bool) {
        self.entries
            .insert(key.into(), Prop { value, enumerable });
    }

    /// Get an own property, enumerable or not
    pub fn get(&self, key: &str) -> Option<&RuntimeValue> {
        self.entries.get(key).map(|prop| &prop.value)
    }

    /// Get an own property, ignoring non-enumerable slots
    pub fn get_enumerable(&self, key: &str) -> Option<&RuntimeValue> {
        self.entries
            .get(key)
            .filter(|prop| prop.enumerable)
            .map(|prop| &prop.value)
    }

    /// Remove a property, preserving the order of the remaining ones
    pub fn remove(&mut self, key: &str) -> Option<RuntimeValue> {
        self.entries.shift_remove(key).map(|prop| prop.value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.entries.iter().map(|(key, prop)| (key.as_str(), prop))
    }

    /// Keys visible to generic enumeration, in insertion order
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, prop)| prop.enumerable)
            .map(|(key, _)| key.as_str())
    }

    /// Entries visible to generic enumeration, in insertion order
    pub fn enumerable_entries(&self) -> impl Iterator<Item = (&str, &RuntimeValue)> {
        self.entries
            .iter()
            .filter(|(_, prop)| prop.enumerable)
            .map(|(key, prop)| (key.as_str(), &prop.value))
    }
}

impl FromIterator<(String, RuntimeValue)> for PropsTable {
    fn from_iter<I: IntoIterator<Item = (String, RuntimeValue)>>(iter: I) -> Self {
        let mut table = Self::new();

        for (key, value) in iter {
            table.set(key, value);
        }

        table
    }
}

/// Assign a named property on a value
///
/// Fails on targets without writable property storage (sentinels, scalars,
/// raw text, symbols and custom values).
pub fn set_prop(
    target: &RuntimeValue,
    key: impl Into<String>,
    value: RuntimeValue,
) -> PropsResult<()> {
    with_props_mut(target, |props| props.set(key, value))
}

/// Define a named property on a value with an explicit enumerability flag
///
/// Fails on the same targets as [`set_prop`].
pub fn define_prop(
    target: &RuntimeValue,
    key: impl Into<String>,
    value: RuntimeValue,
    enumerable: bool,
) -> PropsResult<()> {
    with_props_mut(target, |props| props.define(key, value, enumerable))
}

/// Remove a named property from a value
///
/// Element slots of lists and character slots of texts are not removable
/// through this ; only named properties are.
pub fn remove_prop(target: &RuntimeValue, key: &str) -> PropsResult<Option<RuntimeValue>> {
    with_props_mut(target, |props| props.remove(key))
}

fn with_props_mut<T>(
    target: &RuntimeValue,
    with: impl FnOnce(&mut PropsTable) -> T,
) -> PropsResult<T> {
    match target {
        RuntimeValue::BoxedString(cell) => Ok(with(&mut cell.write().props)),
        RuntimeValue::List(cell) => Ok(with(&mut cell.write().props)),
        RuntimeValue::Struct(cell) => Ok(with(&mut cell.write().props)),
        RuntimeValue::Function(cell) => Ok(with(&mut cell.write().props)),

        RuntimeValue::Void
        | RuntimeValue::Null
        | RuntimeValue::Bool(_)
        | RuntimeValue::Int(_)
        | RuntimeValue::Float(_)
        | RuntimeValue::String(_)
        | RuntimeValue::Symbol(_)
        | RuntimeValue::Custom(_) => Err(PropsError::PropsNotSupported {
            typ: target.compute_type(),
        }),
    }
}

/// Read an own property of a value, enumerable or not
///
/// Index keys address element slots of lists and character positions of
/// texts ; the read is a clone, the target is left untouched.
pub fn get_own_prop(target: &RuntimeValue, key: &str) -> Option<RuntimeValue> {
    match target {
        RuntimeValue::String(string) => {
            let index = parse_index_key(key)?;
            string
                .chars()
                .nth(index)
                .map(|c| RuntimeValue::String(c.to_string()))
        }

        RuntimeValue::BoxedString(cell) => {
            let boxed = cell.read();

            if let Some(index) = parse_index_key(key) {
                return boxed
                    .text
                    .chars()
                    .nth(index)
                    .map(|c| RuntimeValue::String(c.to_string()));
            }

            boxed.props.get(key).cloned()
        }

        RuntimeValue::List(cell) => {
            let list = cell.read();

            if let Some(index) = parse_index_key(key) {
                return list.items.get(index).cloned();
            }

            list.props.get(key).cloned()
        }

        RuntimeValue::Struct(cell) => cell.read().props.get(key).cloned(),

        RuntimeValue::Function(cell) => cell.read().props.get(key).cloned(),

        RuntimeValue::Void
        | RuntimeValue::Null
        | RuntimeValue::Bool(_)
        | RuntimeValue::Int(_)
        | RuntimeValue::Float(_)
        | RuntimeValue::Symbol(_)
        | RuntimeValue::Custom(_) => None,
    }
}

/// Read a property of a value, following the prototype chain of structs when
/// the property is not an own one
pub fn get_prop(target: &RuntimeValue, key: &str) -> Option<RuntimeValue> {
    if let Some(found) = get_own_prop(target, key) {
        return Some(found);
    }

    if let RuntimeValue::Struct(cell) = target {
        let mut visited = vec![cell.clone()];
        let mut current = cell.read().proto.clone();

        while let Some(proto) = current {
            // Prototype cycles can be built through direct mutation ; stop
            // instead of walking them forever
            if visited.iter().any(|seen| GcCell::is_same_cell(seen, &proto)) {
                break;
            }

            let owned = proto.read();

            if let Some(prop) = owned.props.get(key) {
                return Some(prop.clone());
            }

            let next = owned.proto.clone();
            drop(owned);

            visited.push(proto);
            current = next;
        }
    }

    None
}

/// Check if a value owns a property under the provided key
pub fn has_own_prop(target: &RuntimeValue, key: &str) -> bool {
    get_own_prop(target, key).is_some()
}

/// Parse a key as a canonical index: decimal digits without a leading zero
fn parse_index_key(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if key != "0" && key.starts_with('0') {
        return None;
    }

    key.parse::<usize>().ok()
}
