mod impls;

use std::any::TypeId;
use std::collections::HashMap;

use smallvec::SmallVec;

/// Index of a node inside a [`ShapeGraph`].
pub type ShapeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I64,
    U64,
    F64,
}

/// Kinds a dictionary key may have. Anything else is rejected when the
/// routine is built — there is no guessed stringification for other kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Str,
    Int,
    UInt,
}

#[derive(Debug, Clone, Copy)]
pub struct EnumVariant {
    pub name: &'static str,
    /// Underlying numeric value; only read under [`EnumRepr::Underlying`].
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRepr {
    /// Variants render as their quoted names.
    Name,
    /// Variants render as their underlying numbers.
    Underlying,
}

#[derive(Debug, Clone)]
pub struct EnumShape {
    pub type_name: &'static str,
    pub repr: EnumRepr,
    pub variants: &'static [EnumVariant],
}

/// One serializable member of an object shape.
///
/// `index` addresses the owning type's full member table (base members
/// first), so the same accessor works whether or not inherited members are
/// being serialized.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: &'static str,
    pub index: usize,
    pub shape: ShapeId,
}

#[derive(Debug)]
pub struct ObjectShape {
    pub type_name: &'static str,
    pub type_id: TypeId,
    pub members: Vec<Member>,
}

#[derive(Debug)]
pub enum ShapeNode {
    Primitive(PrimitiveKind),
    /// A value that may be absent; renders `null` when it is.
    Nullable(ShapeId),
    Str,
    Date,
    Enum(EnumShape),
    Sequence(ShapeId),
    Dictionary { key: KeyKind, value: ShapeId },
    Object(ObjectShape),
    /// Back-reference to an ancestor object still being described.
    Recursive(ShapeId),
    /// A construct the builder cannot encode; turns into a memoized build
    /// failure.
    Unsupported(&'static str),
}

/// Arena of shape nodes for one root type under one describe pass.
///
/// `object` owns cycle detection: describing a type already on the
/// in-progress stack yields a [`ShapeNode::Recursive`] back-reference, and
/// a type that finished describing is reused by id, so the graph stays
/// finite for arbitrarily recursive type families.
pub struct ShapeGraph {
    nodes: Vec<ShapeNode>,
    building: SmallVec<[(TypeId, ShapeId); 8]>,
    finished: HashMap<TypeId, ShapeId>,
    include_inherited: bool,
}

impl ShapeGraph {
    pub(crate) fn new(include_inherited: bool) -> Self {
        ShapeGraph {
            nodes: Vec::new(),
            building: SmallVec::new(),
            finished: HashMap::new(),
            include_inherited,
        }
    }

    /// Whether inherited members participate in object shapes for this
    /// describe pass.
    pub fn include_inherited(&self) -> bool {
        self.include_inherited
    }

    pub(crate) fn node(&self, id: ShapeId) -> &ShapeNode {
        &self.nodes[id]
    }

    fn push(&mut self, node: ShapeNode) -> ShapeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub fn primitive(&mut self, kind: PrimitiveKind) -> ShapeId {
        self.push(ShapeNode::Primitive(kind))
    }

    pub fn string(&mut self) -> ShapeId {
        self.push(ShapeNode::Str)
    }

    pub fn date(&mut self) -> ShapeId {
        self.push(ShapeNode::Date)
    }

    pub fn nullable(&mut self, inner: ShapeId) -> ShapeId {
        self.push(ShapeNode::Nullable(inner))
    }

    pub fn sequence(&mut self, element: ShapeId) -> ShapeId {
        self.push(ShapeNode::Sequence(element))
    }

    pub fn dictionary(&mut self, key: KeyKind, value: ShapeId) -> ShapeId {
        self.push(ShapeNode::Dictionary { key, value })
    }

    pub fn enumeration(&mut self, shape: EnumShape) -> ShapeId {
        self.push(ShapeNode::Enum(shape))
    }

    pub fn unsupported(&mut self, reason: &'static str) -> ShapeId {
        self.push(ShapeNode::Unsupported(reason))
    }

    /// Describe an object shape for `T`, with `members` producing the
    /// member list. Re-entrant describes of `T` (directly or through other
    /// members) become back-references instead of recursing forever.
    pub fn object<T: 'static>(
        &mut self,
        type_name: &'static str,
        members: impl FnOnce(&mut Self) -> Vec<Member>,
    ) -> ShapeId {
        let type_id = TypeId::of::<T>();
        if let Some(&id) = self.finished.get(&type_id) {
            return id;
        }
        let in_progress = self
            .building
            .iter()
            .find(|entry| entry.0 == type_id)
            .map(|entry| entry.1);
        if let Some(target) = in_progress {
            return self.push(ShapeNode::Recursive(target));
        }

        let id = self.push(ShapeNode::Object(ObjectShape {
            type_name,
            type_id,
            members: Vec::new(),
        }));
        self.building.push((type_id, id));
        let resolved = members(self);
        self.building.pop();
        if let ShapeNode::Object(shape) = &mut self.nodes[id] {
            shape.members = resolved;
        }
        self.finished.insert(type_id, id);
        id
    }
}

/// Static half of the reflection surface: how a type's data decomposes
/// into primitives, containers and nested objects.
///
/// Deterministic for a given (type, `include_inherited`) pair — the
/// routine cache relies on that.
pub trait JsonType: 'static {
    fn describe(graph: &mut ShapeGraph) -> ShapeId;
}

/// Implemented (normally through `json_object!`) by object types so
/// derived types can flatten their base's member list ahead of their own.
pub trait JsonObject: 'static {
    /// Size of the full member table, base chain included.
    const MEMBER_COUNT: usize;

    fn push_members(graph: &mut ShapeGraph, members: &mut Vec<Member>);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    struct Looped;

    #[rstest::rstest]
    fn test_object_is_memoized() {
        let mut graph = ShapeGraph::new(false);
        let first = graph.object::<Plain>("Plain", |_| Vec::new());
        let second = graph.object::<Plain>("Plain", |_| Vec::new());
        assert_eq!(first, second);
    }

    #[rstest::rstest]
    fn test_self_reference_becomes_back_reference() {
        let mut graph = ShapeGraph::new(false);
        let id = graph.object::<Looped>("Looped", |graph| {
            let inner = graph.object::<Looped>("Looped", |_| Vec::new());
            vec![Member {
                name: "Next",
                index: 0,
                shape: inner,
            }]
        });

        let members = match graph.node(id) {
            ShapeNode::Object(shape) => &shape.members,
            other => panic!("expected object node, got {other:?}"),
        };
        assert!(matches!(
            graph.node(members[0].shape),
            ShapeNode::Recursive(target) if *target == id
        ));
    }

    #[rstest::rstest]
    fn test_include_inherited_flag() {
        assert!(ShapeGraph::new(true).include_inherited());
        assert!(!ShapeGraph::new(false).include_inherited());
    }
}
