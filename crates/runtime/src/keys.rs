//!
//! Own-key enumeration module.
//!
//! Lists the property keys a value directly owns and exposes to generic
//! enumeration. Inherited properties (found through a prototype link) and
//! properties defined as non-enumerable never show up here.

use indexmap::IndexSet;

use crate::{props::PropsTable, values::RuntimeValue};

/// List the own enumerable property keys of a value
///
/// The operation is total: every value category produces a (possibly empty)
/// key list, and the input is never mutated.
///
/// * Sentinels (`Void`, `Null`), non-textual scalars and symbols own no
///   enumerable keys.
/// * Raw text produces one key per character position, as decimal text
///   (`"0"`, `"1"`, ...).
/// * Boxed text and lists produce the same index keys, followed by their own
///   enumerable named properties.
/// * Functions and structs produce their own enumerable named properties
///   only.
///
/// Index keys come first, then named keys in insertion order ; the result
/// contains no duplicates.
pub fn enum_own_keys(value: &RuntimeValue) -> Vec<String> {
    match value {
        // Sentinels carry no property storage, and inspecting them would be
        // an error in most dynamic hosts ; they are short-circuited before
        // anything else
        RuntimeValue::Void | RuntimeValue::Null => vec![],

        // Non-textual scalars have no own property storage either
        RuntimeValue::Bool(_) | RuntimeValue::Int(_) | RuntimeValue::Float(_) => vec![],

        // Raw text only exposes the read-only indexed view over its
        // characters ; nothing can be attached to it
        RuntimeValue::String(string) => index_keys(string.chars().count()).collect(),

        RuntimeValue::BoxedString(cell) => {
            let boxed = cell.read();

            with_named_keys(index_keys(boxed.text.chars().count()), &boxed.props)
        }

        RuntimeValue::List(cell) => {
            let list = cell.read();

            with_named_keys(index_keys(list.items.len()), &list.props)
        }

        RuntimeValue::Struct(cell) => cell
            .read()
            .props
            .enumerable_keys()
            .map(str::to_owned)
            .collect(),

        RuntimeValue::Function(cell) => cell
            .read()
            .props
            .enumerable_keys()
            .map(str::to_owned)
            .collect(),

        // Symbols are permanently keyless tokens
        RuntimeValue::Symbol(_) => vec![],

        RuntimeValue::Custom(custom) => custom.own_enumerable_keys(),
    }
}

/// Generate the index keys of an indexed view, in ascending order
fn index_keys(len: usize) -> impl Iterator<Item = String> {
    (0..len).map(|index| index.to_string())
}

/// Append the own enumerable named keys of a property table to a set of
/// index keys, deduplicating should a named property shadow an index
fn with_named_keys(
    index_keys: impl Iterator<Item = String>,
    props: &PropsTable,
) -> Vec<String> {
    let mut keys: IndexSet<String> = index_keys.collect();

    for key in props.enumerable_keys() {
        keys.insert(key.to_owned());
    }

    keys.into_iter().collect()
}
