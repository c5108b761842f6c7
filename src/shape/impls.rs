//! Reflection-surface implementations for std, chrono and indexmap types.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use indexmap::IndexMap;

use crate::date::JsonDateTime;
use crate::shape::{JsonType, KeyKind, PrimitiveKind, ShapeGraph, ShapeId};
use crate::view::{JsonKey, JsonView, MapKey, View};

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl JsonType for $ty {
            fn describe(graph: &mut ShapeGraph) -> ShapeId {
                graph.primitive(PrimitiveKind::I64)
            }
        }

        impl JsonView for $ty {
            fn view(&self) -> View<'_> {
                View::Int(*self as i64)
            }
        }

        impl JsonKey for $ty {
            fn kind() -> KeyKind {
                KeyKind::Int
            }

            fn key(&self) -> MapKey<'_> {
                MapKey::Int(*self as i64)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl JsonType for $ty {
            fn describe(graph: &mut ShapeGraph) -> ShapeId {
                graph.primitive(PrimitiveKind::U64)
            }
        }

        impl JsonView for $ty {
            fn view(&self) -> View<'_> {
                View::UInt(*self as u64)
            }
        }

        impl JsonKey for $ty {
            fn kind() -> KeyKind {
                KeyKind::UInt
            }

            fn key(&self) -> MapKey<'_> {
                MapKey::UInt(*self as u64)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl JsonType for $ty {
            fn describe(graph: &mut ShapeGraph) -> ShapeId {
                graph.primitive(PrimitiveKind::F64)
            }
        }

        impl JsonView for $ty {
            fn view(&self) -> View<'_> {
                View::Float(*self as f64)
            }
        }
    )*};
}

impl_float!(f32, f64);

impl JsonType for bool {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.primitive(PrimitiveKind::Bool)
    }
}

impl JsonView for bool {
    fn view(&self) -> View<'_> {
        View::Bool(*self)
    }
}

impl JsonType for char {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.primitive(PrimitiveKind::Char)
    }
}

impl JsonView for char {
    fn view(&self) -> View<'_> {
        View::Char(*self)
    }
}

impl JsonType for String {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.string()
    }
}

impl JsonView for String {
    fn view(&self) -> View<'_> {
        View::Str(self)
    }
}

impl JsonKey for String {
    fn kind() -> KeyKind {
        KeyKind::Str
    }

    fn key(&self) -> MapKey<'_> {
        MapKey::Str(self)
    }
}

impl<T: JsonType> JsonType for Option<T> {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        let inner = T::describe(graph);
        graph.nullable(inner)
    }
}

impl<T: JsonView> JsonView for Option<T> {
    fn view(&self) -> View<'_> {
        match self {
            Some(value) => value.view(),
            None => View::Null,
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Some(value) => value.is_null(),
            None => true,
        }
    }
}

impl<T: JsonType> JsonType for Vec<T> {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        let element = T::describe(graph);
        graph.sequence(element)
    }
}

impl<T: JsonView> JsonView for Vec<T> {
    fn view(&self) -> View<'_> {
        View::Seq(Box::new(self.iter().map(|item| item as &dyn JsonView)))
    }
}

impl<T: JsonType> JsonType for VecDeque<T> {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        let element = T::describe(graph);
        graph.sequence(element)
    }
}

impl<T: JsonView> JsonView for VecDeque<T> {
    fn view(&self) -> View<'_> {
        View::Seq(Box::new(self.iter().map(|item| item as &dyn JsonView)))
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),* $(,)?) => {$(
        impl<T: JsonType> JsonType for $ptr<T> {
            fn describe(graph: &mut ShapeGraph) -> ShapeId {
                T::describe(graph)
            }
        }

        impl<T: JsonView + ?Sized> JsonView for $ptr<T> {
            fn view(&self) -> View<'_> {
                (**self).view()
            }

            fn is_null(&self) -> bool {
                (**self).is_null()
            }
        }
    )*};
}

impl_pointer!(Box, Rc, Arc);

macro_rules! impl_map {
    ($($map:ident),* $(,)?) => {$(
        impl<K: JsonKey + 'static, V: JsonType> JsonType for $map<K, V> {
            fn describe(graph: &mut ShapeGraph) -> ShapeId {
                let value = V::describe(graph);
                graph.dictionary(K::kind(), value)
            }
        }

        impl<K: JsonKey, V: JsonView> JsonView for $map<K, V> {
            fn view(&self) -> View<'_> {
                View::Map(Box::new(
                    self.iter().map(|(key, value)| (key.key(), value as &dyn JsonView)),
                ))
            }
        }
    )*};
}

impl_map!(HashMap, BTreeMap, IndexMap);

impl JsonType for JsonDateTime {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.date()
    }
}

impl JsonView for JsonDateTime {
    fn view(&self) -> View<'_> {
        View::Date(*self)
    }
}

impl JsonType for DateTime<Utc> {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.date()
    }
}

impl JsonView for DateTime<Utc> {
    fn view(&self) -> View<'_> {
        View::Date(JsonDateTime::from(*self))
    }
}

impl JsonType for DateTime<Local> {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.date()
    }
}

impl JsonView for DateTime<Local> {
    fn view(&self) -> View<'_> {
        View::Date(JsonDateTime::from(*self))
    }
}

impl JsonType for NaiveDateTime {
    fn describe(graph: &mut ShapeGraph) -> ShapeId {
        graph.date()
    }
}

impl JsonView for NaiveDateTime {
    fn view(&self) -> View<'_> {
        View::Date(JsonDateTime::from(*self))
    }
}
