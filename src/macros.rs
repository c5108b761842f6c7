#[doc(hidden)]
#[macro_export]
macro_rules! __json_member_one {
    ($field:ident) => {
        1usize
    };
}

/// Declares the serialization surface of a struct: its shape, member
/// access and view.
///
/// Member names are declared verbatim; casing is applied per option set
/// when the routine is built. An optional flattened base makes its members
/// precede the declaring type's, and they are serialized only when
/// `include_inherited` is set.
///
/// ```
/// use inline_json::{json_object, to_string};
///
/// struct User {
///     name: String,
///     id: u32,
/// }
///
/// json_object!(User {
///     "Name" => name: String,
///     "ID" => id: u32,
/// });
///
/// let user = User { name: "Ada".to_string(), id: 7 };
/// assert_eq!(to_string(&user)?, r#"{"Name":"Ada","ID":7}"#);
/// # Ok::<(), inline_json::Error>(())
/// ```
#[macro_export]
macro_rules! json_object {
    ($ty:ident { $($name:literal => $field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::JsonObject for $ty {
            const MEMBER_COUNT: usize = 0 $(+ $crate::__json_member_one!($field))*;

            #[allow(unused_mut, unused_variables)]
            fn push_members(
                graph: &mut $crate::ShapeGraph,
                members: &mut ::std::vec::Vec<$crate::Member>,
            ) {
                let mut index = 0usize;
                $(
                    members.push($crate::Member {
                        name: $name,
                        index,
                        shape: <$fty as $crate::JsonType>::describe(graph),
                    });
                    index += 1;
                )*
            }
        }

        impl $crate::JsonType for $ty {
            fn describe(graph: &mut $crate::ShapeGraph) -> $crate::ShapeId {
                graph.object::<Self>(stringify!($ty), |graph| {
                    let mut members = ::std::vec::Vec::new();
                    <Self as $crate::JsonObject>::push_members(graph, &mut members);
                    members
                })
            }
        }

        impl $crate::ObjectAccess for $ty {
            #[allow(unused_mut, unused_variables)]
            fn member(&self, index: usize) -> &dyn $crate::JsonView {
                let mut next = 0usize;
                $(
                    if index == next {
                        return &self.$field;
                    }
                    next += 1;
                )*
                panic!(
                    "member index {} out of range for {}",
                    index,
                    stringify!($ty)
                );
            }
        }

        impl $crate::JsonView for $ty {
            fn view(&self) -> $crate::View<'_> {
                $crate::View::Object(self)
            }
        }
    };

    ($ty:ident : $base_field:ident as $base_ty:ty { $($name:literal => $field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::JsonObject for $ty {
            const MEMBER_COUNT: usize =
                <$base_ty as $crate::JsonObject>::MEMBER_COUNT
                    $(+ $crate::__json_member_one!($field))*;

            #[allow(unused_mut, unused_variables)]
            fn push_members(
                graph: &mut $crate::ShapeGraph,
                members: &mut ::std::vec::Vec<$crate::Member>,
            ) {
                if graph.include_inherited() {
                    <$base_ty as $crate::JsonObject>::push_members(graph, members);
                }
                let mut index = <$base_ty as $crate::JsonObject>::MEMBER_COUNT;
                $(
                    members.push($crate::Member {
                        name: $name,
                        index,
                        shape: <$fty as $crate::JsonType>::describe(graph),
                    });
                    index += 1;
                )*
            }
        }

        impl $crate::JsonType for $ty {
            fn describe(graph: &mut $crate::ShapeGraph) -> $crate::ShapeId {
                graph.object::<Self>(stringify!($ty), |graph| {
                    let mut members = ::std::vec::Vec::new();
                    <Self as $crate::JsonObject>::push_members(graph, &mut members);
                    members
                })
            }
        }

        impl $crate::ObjectAccess for $ty {
            #[allow(unused_mut, unused_variables)]
            fn member(&self, index: usize) -> &dyn $crate::JsonView {
                const BASE: usize = <$base_ty as $crate::JsonObject>::MEMBER_COUNT;
                if index < BASE {
                    return $crate::ObjectAccess::member(&self.$base_field, index);
                }
                let mut next = BASE;
                $(
                    if index == next {
                        return &self.$field;
                    }
                    next += 1;
                )*
                panic!(
                    "member index {} out of range for {}",
                    index,
                    stringify!($ty)
                );
            }
        }

        impl $crate::JsonView for $ty {
            fn view(&self) -> $crate::View<'_> {
                $crate::View::Object(self)
            }
        }
    };
}

/// Declares how an enum serializes: as its variant names or as its
/// underlying numbers. The convention is fixed per type at declaration.
///
/// ```
/// use inline_json::{json_enum, to_string};
///
/// enum Color {
///     Red,
///     Green,
/// }
///
/// json_enum!(Color { Red, Green });
///
/// assert_eq!(to_string(&Color::Red)?, "\"Red\"");
/// # Ok::<(), inline_json::Error>(())
/// ```
#[macro_export]
macro_rules! json_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::JsonType for $ty {
            fn describe(graph: &mut $crate::ShapeGraph) -> $crate::ShapeId {
                const VARIANTS: &[$crate::EnumVariant] = &[
                    $($crate::EnumVariant {
                        name: stringify!($variant),
                        value: 0,
                    }),+
                ];
                graph.enumeration($crate::EnumShape {
                    type_name: stringify!($ty),
                    repr: $crate::EnumRepr::Name,
                    variants: VARIANTS,
                })
            }
        }

        impl $crate::JsonView for $ty {
            fn view(&self) -> $crate::View<'_> {
                $crate::View::Enum {
                    name: match self {
                        $(Self::$variant => stringify!($variant)),+
                    },
                }
            }
        }
    };

    ($ty:ident as numbers { $($variant:ident = $value:expr),+ $(,)? }) => {
        impl $crate::JsonType for $ty {
            fn describe(graph: &mut $crate::ShapeGraph) -> $crate::ShapeId {
                const VARIANTS: &[$crate::EnumVariant] = &[
                    $($crate::EnumVariant {
                        name: stringify!($variant),
                        value: $value,
                    }),+
                ];
                graph.enumeration($crate::EnumShape {
                    type_name: stringify!($ty),
                    repr: $crate::EnumRepr::Underlying,
                    variants: VARIANTS,
                })
            }
        }

        impl $crate::JsonView for $ty {
            fn view(&self) -> $crate::View<'_> {
                $crate::View::Enum {
                    name: match self {
                        $(Self::$variant => stringify!($variant)),+
                    },
                }
            }
        }
    };
}
