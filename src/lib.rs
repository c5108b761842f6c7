mod cache;
mod compile;
mod constants;
mod date;
mod error;
mod macros;
mod options;
mod shape;
mod utils;
mod view;

use std::io::Write;

use crate::compile::{JsonWriter, Routine};
use crate::utils::text::IoSink;

pub use crate::constants::{INDENT_WIDTH, MAX_DEPTH};
pub use crate::date::{DateTimeKind, JsonDateTime};
pub use crate::error::{Error, Result};
pub use crate::options::{
    DateTimeFormat, Options, SerializationNameFormat, UnspecifiedDateTimeKindBehavior,
};
pub use crate::shape::{
    EnumRepr, EnumShape, EnumVariant, JsonObject, JsonType, KeyKind, Member, PrimitiveKind,
    ShapeGraph, ShapeId,
};
pub use crate::utils::text::TextSink;
pub use crate::view::{JsonKey, JsonView, MapKey, ObjectAccess, View};

/// Serialize `value` as JSON text using the default options.
///
/// The first call for a type builds its specialized routine; every later
/// call reuses it.
///
/// # Examples
/// ```
/// let json = inline_json::to_string(&vec![1, 2, 3])?;
/// assert_eq!(json, "[1,2,3]");
/// # Ok::<(), inline_json::Error>(())
/// ```
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: JsonType + JsonView,
{
    to_string_with_options(value, &Options::default())
}

/// Serialize `value` as JSON text under `options`.
///
/// Each distinct option set gets its own routine; two structurally equal
/// option sets share one.
///
/// # Examples
/// ```
/// use inline_json::{json_object, to_string_with_options, Options};
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
/// let json = to_string_with_options(&user, &Options::PRETTY_PRINT)?;
/// assert_eq!(json, "{\n  \"Name\": \"Ada\",\n  \"ID\": 7\n}");
/// # Ok::<(), inline_json::Error>(())
/// ```
pub fn to_string_with_options<T>(value: &T, options: &Options) -> Result<String>
where
    T: JsonType + JsonView,
{
    let routine = cache::get_or_build::<T>(*options)?;
    let mut out = String::new();
    write_value(&routine, value, *options, &mut out)?;
    Ok(out)
}

/// Serialize `value` into `writer` using the default options.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: Write,
    T: JsonType + JsonView,
{
    to_writer_with_options(writer, value, &Options::default())
}

/// Serialize `value` into `writer` under `options`.
///
/// Output already written before a call-time error stays in the writer;
/// callers needing atomicity should serialize to a scratch buffer first.
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: &Options) -> Result<()>
where
    W: Write,
    T: JsonType + JsonView,
{
    let routine = cache::get_or_build::<T>(*options)?;
    let mut sink = IoSink::new(writer);
    write_value(&routine, value, *options, &mut sink)
}

fn write_value(
    routine: &Routine,
    value: &dyn JsonView,
    options: Options,
    sink: &mut dyn TextSink,
) -> Result<()> {
    let mut writer = JsonWriter::new(sink);
    // The callback-safe envelope wraps the whole document exactly once,
    // never nested output.
    if options.jsonp {
        writer.write_char('(')?;
    }
    routine(&mut writer, value, 0)?;
    if options.jsonp {
        writer.write_char(')')?;
    }
    Ok(())
}
