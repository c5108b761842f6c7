mod writer;

pub(crate) use writer::JsonWriter;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use smallvec::SmallVec;

use crate::cache;
use crate::constants::MAX_DEPTH;
use crate::error::{Error, Result};
use crate::options::{Options, SerializationNameFormat};
use crate::shape::{EnumRepr, KeyKind, PrimitiveKind, ShapeGraph, ShapeId, ShapeNode};
use crate::utils::number;
use crate::utils::string::{escape_str_into, EscapeMode};
use crate::utils::validation::validate_depth;
use crate::view::{JsonView, MapKey, View};

/// A compiled serialization routine. Closes over the type's shape and the
/// option set; shares no mutable state, so one instance serves unlimited
/// concurrent callers.
pub(crate) type Routine =
    Arc<dyn Fn(&mut JsonWriter<'_>, &dyn JsonView, usize) -> Result<()> + Send + Sync>;

/// Back-references that leave a subtree and target a still-open ancestor.
/// A sub-routine with none of these is complete and safe to publish at its
/// own cache key.
type EscapeSet = HashSet<ShapeId>;

/// Builds the routine for `root` by recursive descent over the shape
/// graph, folding every option-dependent decision into the closures so
/// none is revisited per value.
pub(crate) fn compile(graph: &ShapeGraph, root: ShapeId, options: Options) -> Result<Routine> {
    let mut compiler = Compiler {
        graph,
        options,
        root,
        slots: HashMap::new(),
        built: HashMap::new(),
        open: SmallVec::new(),
    };
    let (routine, _) = compiler.node(root)?;
    Ok(routine)
}

struct Compiler<'g> {
    graph: &'g ShapeGraph,
    options: Options,
    root: ShapeId,
    /// Late-bound slots for object routines, registered before their
    /// members compile so self-references can resolve.
    slots: HashMap<ShapeId, Arc<OnceLock<Routine>>>,
    built: HashMap<ShapeId, (Routine, EscapeSet)>,
    /// Object nodes currently being compiled, outermost first.
    open: SmallVec<[ShapeId; 8]>,
}

impl<'g> Compiler<'g> {
    fn slot(&mut self, id: ShapeId) -> Arc<OnceLock<Routine>> {
        self.slots
            .entry(id)
            .or_insert_with(|| Arc::new(OnceLock::new()))
            .clone()
    }

    fn node(&mut self, id: ShapeId) -> Result<(Routine, EscapeSet)> {
        if let Some((routine, escapes)) = self.built.get(&id) {
            return Ok((routine.clone(), escapes.clone()));
        }

        let graph = self.graph;
        let built = match graph.node(id) {
            ShapeNode::Primitive(kind) => (self.primitive(*kind), EscapeSet::new()),

            ShapeNode::Str => {
                let mode = EscapeMode::for_jsonp(self.options.jsonp);
                let routine: Routine = Arc::new(move |w, v, _| match v.view() {
                    View::Str(s) => w.write_quoted(s, mode),
                    other => Err(Error::mismatch("string", other.kind_name())),
                });
                (routine, EscapeSet::new())
            }

            ShapeNode::Date => {
                let format = self.options.date_format;
                let behavior = self.options.unspecified_kind;
                let routine: Routine = Arc::new(move |w, v, _| match v.view() {
                    View::Date(date) => w.write_date(date, format, behavior),
                    other => Err(Error::mismatch("date", other.kind_name())),
                });
                (routine, EscapeSet::new())
            }

            ShapeNode::Nullable(inner) => {
                let (inner, escapes) = self.node(*inner)?;
                let routine: Routine = Arc::new(move |w, v, depth| {
                    if v.is_null() {
                        w.write_str("null")
                    } else {
                        inner(w, v, depth)
                    }
                });
                (routine, escapes)
            }

            ShapeNode::Enum(shape) => {
                if shape.variants.is_empty() {
                    return Err(Error::UnsupportedShape(format!(
                        "enum {} has no variants",
                        shape.type_name
                    )));
                }
                let mode = EscapeMode::for_jsonp(self.options.jsonp);
                let mut table = Vec::with_capacity(shape.variants.len());
                for variant in shape.variants {
                    let rendered = match shape.repr {
                        EnumRepr::Name => {
                            let mut buf = String::with_capacity(variant.name.len() + 2);
                            buf.push('"');
                            escape_str_into(&mut buf, variant.name, mode)?;
                            buf.push('"');
                            buf
                        }
                        EnumRepr::Underlying => number::format_i64(variant.value),
                    };
                    table.push((variant.name, rendered));
                }
                let type_name = shape.type_name;
                let routine: Routine = Arc::new(move |w, v, _| match v.view() {
                    View::Enum { name } => {
                        match table.iter().find(|(variant, _)| *variant == name) {
                            Some((_, rendered)) => w.write_str(rendered),
                            None => Err(Error::InvalidValue(format!(
                                "unknown variant `{name}` for enum {type_name}"
                            ))),
                        }
                    }
                    other => Err(Error::mismatch("enum", other.kind_name())),
                });
                (routine, EscapeSet::new())
            }

            ShapeNode::Sequence(element) => {
                let (element, escapes) = self.node(*element)?;
                let pretty = self.options.pretty_print;
                let routine: Routine = Arc::new(move |w, v, depth| {
                    validate_depth(depth, MAX_DEPTH)?;
                    let items = match v.view() {
                        View::Seq(items) => items,
                        other => return Err(Error::mismatch("sequence", other.kind_name())),
                    };
                    w.write_char('[')?;
                    let mut first = true;
                    for item in items {
                        if !first {
                            w.write_char(',')?;
                        }
                        if pretty {
                            w.newline_indent(depth + 1)?;
                        }
                        element(w, item, depth + 1)?;
                        first = false;
                    }
                    if pretty && !first {
                        w.newline_indent(depth)?;
                    }
                    w.write_char(']')
                });
                (routine, escapes)
            }

            ShapeNode::Dictionary { key, value } => {
                let declared = *key;
                let (value, escapes) = self.node(*value)?;
                let pretty = self.options.pretty_print;
                let exclude_nulls = self.options.exclude_nulls;
                let mode = EscapeMode::for_jsonp(self.options.jsonp);
                let routine: Routine = Arc::new(move |w, v, depth| {
                    validate_depth(depth, MAX_DEPTH)?;
                    let entries = match v.view() {
                        View::Map(entries) => entries,
                        other => return Err(Error::mismatch("map", other.kind_name())),
                    };
                    w.write_char('{')?;
                    let mut first = true;
                    for (entry_key, entry_value) in entries {
                        if exclude_nulls && entry_value.is_null() {
                            continue;
                        }
                        if !first {
                            w.write_char(',')?;
                        }
                        if pretty {
                            w.newline_indent(depth + 1)?;
                        }
                        write_map_key(w, declared, entry_key, mode)?;
                        w.write_char(':')?;
                        if pretty {
                            w.write_char(' ')?;
                        }
                        value(w, entry_value, depth + 1)?;
                        first = false;
                    }
                    if pretty && !first {
                        w.newline_indent(depth)?;
                    }
                    w.write_char('}')
                });
                (routine, escapes)
            }

            ShapeNode::Object(shape) => {
                let slot = self.slot(id);
                self.open.push(id);

                let mut members = Vec::with_capacity(shape.members.len());
                let mut escapes = EscapeSet::new();
                let mut result = Ok(());
                for member in &shape.members {
                    let key = render_member_key(member.name, self.options);
                    match self.node(member.shape) {
                        Ok((routine, member_escapes)) => {
                            escapes.extend(member_escapes);
                            members.push((key, member.index, routine));
                        }
                        Err(err) => {
                            result = Err(err);
                            break;
                        }
                    }
                }
                self.open.pop();
                result?;

                escapes.remove(&id);
                escapes.retain(|target| self.open.contains(target));

                let pretty = self.options.pretty_print;
                let exclude_nulls = self.options.exclude_nulls;
                let type_name = shape.type_name;
                let routine: Routine = Arc::new(move |w, v, depth| {
                    validate_depth(depth, MAX_DEPTH)?;
                    let access = match v.view() {
                        View::Object(access) => access,
                        other => {
                            return Err(Error::InvalidValue(format!(
                                "expected {type_name} object, found {}",
                                other.kind_name()
                            )))
                        }
                    };
                    w.write_char('{')?;
                    let mut first = true;
                    for (key, index, member) in &members {
                        let value = access.member(*index);
                        if exclude_nulls && value.is_null() {
                            continue;
                        }
                        if !first {
                            w.write_char(',')?;
                        }
                        if pretty {
                            w.newline_indent(depth + 1)?;
                        }
                        w.write_str(key)?;
                        member(w, value, depth + 1)?;
                        first = false;
                    }
                    if pretty && !first {
                        w.newline_indent(depth)?;
                    }
                    w.write_char('}')
                });

                let _ = slot.set(routine.clone());
                if id != self.root && escapes.is_empty() {
                    cache::publish_nested(shape.type_id, self.options, routine.clone());
                }
                (routine, escapes)
            }

            ShapeNode::Recursive(target) => {
                let target = *target;
                let slot = self.slot(target);
                let routine: Routine = Arc::new(move |w, v, depth| match slot.get() {
                    Some(inner) => inner(w, v, depth),
                    None => Err(Error::InvalidValue(
                        "recursive routine invoked before its build completed".to_string(),
                    )),
                });
                let mut escapes = EscapeSet::new();
                escapes.insert(target);
                (routine, escapes)
            }

            ShapeNode::Unsupported(reason) => {
                return Err(Error::UnsupportedShape((*reason).to_string()));
            }
        };

        self.built.insert(id, (built.0.clone(), built.1.clone()));
        Ok(built)
    }

    fn primitive(&self, kind: PrimitiveKind) -> Routine {
        match kind {
            PrimitiveKind::Bool => Arc::new(|w, v, _| match v.view() {
                View::Bool(b) => w.write_str(if b { "true" } else { "false" }),
                other => Err(Error::mismatch("bool", other.kind_name())),
            }),
            PrimitiveKind::Char => {
                let mode = EscapeMode::for_jsonp(self.options.jsonp);
                Arc::new(move |w, v, _| match v.view() {
                    View::Char(ch) => w.write_quoted_char(ch, mode),
                    other => Err(Error::mismatch("char", other.kind_name())),
                })
            }
            PrimitiveKind::I64 | PrimitiveKind::U64 => Arc::new(|w, v, _| match v.view() {
                View::Int(value) => w.write_i64(value),
                View::UInt(value) => w.write_u64(value),
                other => Err(Error::mismatch("integer", other.kind_name())),
            }),
            PrimitiveKind::F64 => Arc::new(|w, v, _| match v.view() {
                View::Float(value) => w.write_f64(value),
                other => Err(Error::mismatch("float", other.kind_name())),
            }),
        }
    }
}

fn write_map_key(
    w: &mut JsonWriter<'_>,
    declared: KeyKind,
    key: MapKey<'_>,
    mode: EscapeMode,
) -> Result<()> {
    match (declared, key) {
        (KeyKind::Str, MapKey::Str(s)) => w.write_quoted(s, mode),
        (KeyKind::Int, MapKey::Int(value)) => {
            w.write_char('"')?;
            w.write_i64(value)?;
            w.write_char('"')
        }
        (KeyKind::UInt, MapKey::UInt(value)) => {
            w.write_char('"')?;
            w.write_u64(value)?;
            w.write_char('"')
        }
        (_, key) => Err(Error::InvalidValue(format!(
            "map key {} does not match its declared kind",
            match key {
                MapKey::Str(_) => "string",
                MapKey::Int(_) => "integer",
                MapKey::UInt(_) => "unsigned integer",
            }
        ))),
    }
}

/// Pre-renders one member key, quotes and separator included, so the hot
/// path writes it as a single string.
fn render_member_key(name: &'static str, options: Options) -> String {
    let cased = match options.name_format {
        SerializationNameFormat::Verbatim => name.to_string(),
        SerializationNameFormat::CamelCase => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => {
                    let mut cased: String = first.to_lowercase().collect();
                    cased.push_str(chars.as_str());
                    cased
                }
                None => String::new(),
            }
        }
    };
    let mode = EscapeMode::for_jsonp(options.jsonp);
    let mut key = String::with_capacity(cased.len() + 4);
    key.push('"');
    // Member names come from identifiers, but nothing stops a declared
    // name from carrying a quote or control character.
    let _ = escape_str_into(&mut key, &cased, mode);
    key.push('"');
    key.push(':');
    if options.pretty_print {
        key.push(' ');
    }
    key
}
