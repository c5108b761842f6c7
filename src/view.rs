use crate::date::JsonDateTime;
use crate::shape::KeyKind;

/// A dictionary key as seen at serialization time.
#[derive(Debug, Clone, Copy)]
pub enum MapKey<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
}

/// Runtime projection of a value, read by compiled routines.
///
/// Container variants hand out borrowed iterators so no intermediate tree
/// is ever materialized; text streams straight from the value to the sink.
pub enum View<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
    Date(JsonDateTime),
    Enum { name: &'static str },
    Seq(Box<dyn Iterator<Item = &'a dyn JsonView> + 'a>),
    Map(Box<dyn Iterator<Item = (MapKey<'a>, &'a dyn JsonView)> + 'a>),
    Object(&'a dyn ObjectAccess),
}

impl View<'_> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            View::Null => "null",
            View::Bool(_) => "bool",
            View::Int(_) => "integer",
            View::UInt(_) => "unsigned integer",
            View::Float(_) => "float",
            View::Char(_) => "char",
            View::Str(_) => "string",
            View::Date(_) => "date",
            View::Enum { .. } => "enum",
            View::Seq(_) => "sequence",
            View::Map(_) => "map",
            View::Object(_) => "object",
        }
    }
}

/// Runtime half of the reflection surface. Object safe, so routines can
/// walk heterogeneous members through `&dyn JsonView`.
pub trait JsonView {
    fn view(&self) -> View<'_>;

    /// Cheap null probe, used for member omission without constructing a
    /// full view. Only absent values (`Option::None` and friends) return
    /// true.
    fn is_null(&self) -> bool {
        false
    }
}

/// Indexed member access for object types. Indices address the full member
/// table in declaration order, base members first.
pub trait ObjectAccess {
    fn member(&self, index: usize) -> &dyn JsonView;
}

/// Types usable as dictionary keys: strings and integers.
pub trait JsonKey {
    fn kind() -> KeyKind
    where
        Self: Sized;

    fn key(&self) -> MapKey<'_>;
}
