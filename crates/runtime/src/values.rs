use std::{
    any::Any,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use dyn_clone::DynClone;
use dynaval_prettify::PrettyPrintable;

use crate::{
    gc::{GcCell, GcReadOnlyCell},
    props::PropsTable,
};

#[derive(Debug, Clone)]
pub enum RuntimeValue {
    // Sentinels and primitive scalars
    // These carry no own property storage at all
    Void,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),

    // Raw text
    // Immutable with respect to property storage ; only exposes the
    // read-only indexed view over its characters
    String(String),

    // Containers
    // These can be cloned cheaply thanks to them using a GcCell
    BoxedString(GcCell<BoxedStringValue>),
    List(GcCell<ListValue>),
    Struct(GcCell<StructValue>),
    Function(GcCell<FunctionValue>),

    // Opaque unique token ; permanently keyless
    Symbol(SymbolValue),

    // Custom value type
    // We use a `Box` to get a 'static lifetime with the dynamic dispatch
    // And we wrap it inside a `GcReadOnlyCell` as `Box` is costly to clone
    Custom(GcReadOnlyCell<Box<dyn CustomValueType>>),
}

impl RuntimeValue {
    /// Compute the type of a runtime value
    pub fn compute_type(&self) -> ValueType {
        match self {
            RuntimeValue::Void => ValueType::Void,
            RuntimeValue::Null => ValueType::Null,
            RuntimeValue::Bool(_) => ValueType::Bool,
            RuntimeValue::Int(_) => ValueType::Int,
            RuntimeValue::Float(_) => ValueType::Float,
            RuntimeValue::String(_) => ValueType::String,
            RuntimeValue::BoxedString(_) => ValueType::BoxedString,
            RuntimeValue::List(_) => ValueType::List,
            RuntimeValue::Struct(_) => ValueType::Struct,
            RuntimeValue::Function(_) => ValueType::Function,
            RuntimeValue::Symbol(_) => ValueType::Symbol,
            RuntimeValue::Custom(custom) => ValueType::Custom(custom.typename()),
        }
    }

    /// Check if a value is a container carrying a writable property table
    pub fn is_container(&self) -> bool {
        match self {
            RuntimeValue::Void
            | RuntimeValue::Null
            | RuntimeValue::Bool(_)
            | RuntimeValue::Int(_)
            | RuntimeValue::Float(_)
            | RuntimeValue::String(_)
            | RuntimeValue::Symbol(_)
            | RuntimeValue::Custom(_) => false,

            RuntimeValue::BoxedString(_)
            | RuntimeValue::List(_)
            | RuntimeValue::Struct(_)
            | RuntimeValue::Function(_) => true,
        }
    }
}

impl From<bool> for RuntimeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RuntimeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for RuntimeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RuntimeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for RuntimeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<RuntimeValue>> for RuntimeValue {
    fn from(items: Vec<RuntimeValue>) -> Self {
        Self::List(GcCell::new(ListValue::new(items)))
    }
}

impl From<SymbolValue> for RuntimeValue {
    fn from(symbol: SymbolValue) -> Self {
        Self::Symbol(symbol)
    }
}

/// Category of a runtime value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Void,
    Null,
    Bool,
    Int,
    Float,
    String,
    BoxedString,
    List,
    Struct,
    Function,
    Symbol,
    Custom(&'static str),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Void => write!(f, "void"),
            ValueType::Null => write!(f, "null"),
            ValueType::Bool => write!(f, "boolean"),
            ValueType::Int => write!(f, "int"),
            ValueType::Float => write!(f, "float"),
            ValueType::String => write!(f, "string"),
            ValueType::BoxedString => write!(f, "boxed string"),
            ValueType::List => write!(f, "list"),
            ValueType::Struct => write!(f, "struct"),
            ValueType::Function => write!(f, "function"),
            ValueType::Symbol => write!(f, "symbol"),
            ValueType::Custom(typename) => write!(f, "{typename}"),
        }
    }
}

/// Boxed text value
///
/// A mutable wrapper object around an immutable text, able to carry ad-hoc
/// named properties in addition to the indexed view over its characters.
#[derive(Debug, Clone)]
pub struct BoxedStringValue {
    pub text: String,
    pub props: PropsTable,
}

impl BoxedStringValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            props: PropsTable::new(),
        }
    }
}

/// List value: an ordered sequence of elements, plus a property table for
/// out-of-band named keys
#[derive(Debug, Clone, Default)]
pub struct ListValue {
    pub items: Vec<RuntimeValue>,
    pub props: PropsTable,
}

impl ListValue {
    pub fn new(items: Vec<RuntimeValue>) -> Self {
        Self {
            items,
            props: PropsTable::new(),
        }
    }
}

/// Structured object value
///
/// An ordered table of named properties, optionally linked to a prototype
/// struct. Properties found through the prototype link are inherited, never
/// own.
#[derive(Debug, Clone, Default)]
pub struct StructValue {
    pub props: PropsTable,
    pub proto: Option<GcCell<StructValue>>,
}

impl StructValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: PropsTable) -> Self {
        Self { props, proto: None }
    }

    pub fn with_proto(props: PropsTable, proto: GcCell<StructValue>) -> Self {
        Self {
            props,
            proto: Some(proto),
        }
    }
}

/// Body of a native function value
pub type NativeFnBody = fn(&[RuntimeValue]) -> RuntimeValue;

/// Runtime function value
#[derive(Clone)]
pub struct FunctionValue {
    pub name: Option<String>,
    pub body: NativeFnBody,
    pub props: PropsTable,
}

impl FunctionValue {
    pub fn new(name: Option<&str>, body: NativeFnBody) -> Self {
        Self {
            name: name.map(str::to_owned),
            body,
            props: PropsTable::new(),
        }
    }

    /// Invoke the callable with the provided arguments
    pub fn call(&self, args: &[RuntimeValue]) -> RuntimeValue {
        (self.body)(args)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

static SYMBOLS_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opaque unique token value
///
/// Every created symbol is distinct from every other one, even with an
/// identical description. Symbols cannot carry properties ; only clones of a
/// symbol compare equal to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: SYMBOLS_COUNTER.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_owned),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Custom value type (used for host-defined value categories)
pub trait CustomValueType: Any + fmt::Debug + PrettyPrintable + DynClone + Send + Sync {
    fn typename(&self) -> &'static str;

    fn typename_static() -> &'static str
    where
        Self: Sized;

    /// Own enumerable keys exposed by this value
    ///
    /// Most custom categories have no inspectable property storage, in which
    /// case the enumeration view is empty.
    fn own_enumerable_keys(&self) -> Vec<String> {
        Vec::new()
    }
}

dyn_clone::clone_trait_object!(CustomValueType);

/// Check if two values are equal
///
/// Containers are compared through their enumerable view: list elements,
/// boxed text contents and enumerable own properties. Prototype contents are
/// never considered.
pub fn are_values_equal(
    left: &RuntimeValue,
    right: &RuntimeValue,
) -> Result<bool, NotComparableTypesErr> {
    match (left, right) {
        (_, RuntimeValue::Void) | (RuntimeValue::Void, _) => Ok(false),

        (RuntimeValue::Null, RuntimeValue::Null) => Ok(true),
        (RuntimeValue::Null, _) | (_, RuntimeValue::Null) => Ok(false),

        (RuntimeValue::Bool(a), RuntimeValue::Bool(b)) => Ok(a == b),
        (RuntimeValue::Bool(_), _) | (_, RuntimeValue::Bool(_)) => Ok(false),

        (RuntimeValue::Int(a), RuntimeValue::Int(b)) => Ok(a == b),
        (RuntimeValue::Int(_), _) | (_, RuntimeValue::Int(_)) => Ok(false),

        (RuntimeValue::Float(a), RuntimeValue::Float(b)) => Ok(a == b),
        (RuntimeValue::Float(_), _) | (_, RuntimeValue::Float(_)) => Ok(false),

        (RuntimeValue::String(a), RuntimeValue::String(b)) => Ok(a == b),
        (RuntimeValue::String(_), _) | (_, RuntimeValue::String(_)) => Ok(false),

        (RuntimeValue::BoxedString(a), RuntimeValue::BoxedString(b)) => {
            let a = a.read();
            let b = b.read();

            Ok(a.text == b.text && are_props_equal(&a.props, &b.props)?)
        }
        (RuntimeValue::BoxedString(_), _) | (_, RuntimeValue::BoxedString(_)) => Ok(false),

        (RuntimeValue::List(a), RuntimeValue::List(b)) => {
            let a = a.read();
            let b = b.read();

            if a.items.len() != b.items.len() {
                return Ok(false);
            }

            for (a_item, b_item) in a.items.iter().zip(b.items.iter()) {
                if !are_values_equal(a_item, b_item)? {
                    return Ok(false);
                }
            }

            are_props_equal(&a.props, &b.props)
        }
        (RuntimeValue::List(_), _) | (_, RuntimeValue::List(_)) => Ok(false),

        (RuntimeValue::Struct(a), RuntimeValue::Struct(b)) => {
            are_props_equal(&a.read().props, &b.read().props)
        }
        (RuntimeValue::Struct(_), _) | (_, RuntimeValue::Struct(_)) => Ok(false),

        (RuntimeValue::Symbol(a), RuntimeValue::Symbol(b)) => Ok(a == b),
        (RuntimeValue::Symbol(_), _) | (_, RuntimeValue::Symbol(_)) => Ok(false),

        (RuntimeValue::Function(_), RuntimeValue::Function(_)) => Err(NotComparableTypesErr {
            reason: "cannot compare functions",
        }),
        (RuntimeValue::Function(_), _) | (_, RuntimeValue::Function(_)) => Ok(false),

        (RuntimeValue::Custom(_), RuntimeValue::Custom(_)) => Err(NotComparableTypesErr {
            reason: "cannot compare custom types",
        }),
    }
}

/// Compare the enumerable view of two property tables
fn are_props_equal(
    left: &PropsTable,
    right: &PropsTable,
) -> Result<bool, NotComparableTypesErr> {
    if left.enumerable_keys().count() != right.enumerable_keys().count() {
        return Ok(false);
    }

    for (key, value) in left.enumerable_entries() {
        match right.get_enumerable(key) {
            None => return Ok(false),
            Some(other) => {
                if !are_values_equal(value, other)? {
                    return Ok(false);
                }
            }
        }
    }

    Ok(true)
}

/// Error returned when two values are not comparable
#[derive(Debug)]
pub struct NotComparableTypesErr {
    pub reason: &'static str,
}
