use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::options::{DateTimeFormat, UnspecifiedDateTimeKindBehavior};
use crate::utils::number::write_i64_into;
use crate::utils::text::TextSink;

/// Whether a date's wall-clock fields are anchored to UTC, to the machine's
/// local zone, or to nothing at all.
///
/// `Unspecified` values are interpreted at serialization time according to
/// [`UnspecifiedDateTimeKindBehavior`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeKind {
    Utc,
    Local,
    Unspecified,
}

/// A calendar timestamp plus its kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonDateTime {
    naive: NaiveDateTime,
    kind: DateTimeKind,
}

impl JsonDateTime {
    pub fn new(naive: NaiveDateTime, kind: DateTimeKind) -> Self {
        JsonDateTime { naive, kind }
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    pub fn kind(&self) -> DateTimeKind {
        self.kind
    }

    /// Resolves the wall-clock fields to an instant, treating
    /// `Unspecified` per `behavior`.
    pub(crate) fn resolve(
        &self,
        behavior: UnspecifiedDateTimeKindBehavior,
    ) -> Result<DateTime<Utc>> {
        let as_utc = match self.kind {
            DateTimeKind::Utc => true,
            DateTimeKind::Local => false,
            DateTimeKind::Unspecified => {
                matches!(behavior, UnspecifiedDateTimeKindBehavior::IsUtc)
            }
        };
        if as_utc {
            return Ok(self.naive.and_utc());
        }
        let mapped = Local.from_local_datetime(&self.naive);
        match mapped.single().or_else(|| mapped.earliest()) {
            Some(local) => Ok(local.with_timezone(&Utc)),
            None => Err(Error::DateOutOfRange(format!(
                "{} does not exist in the local time zone",
                self.naive
            ))),
        }
    }
}

impl From<DateTime<Utc>> for JsonDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        JsonDateTime::new(value.naive_utc(), DateTimeKind::Utc)
    }
}

impl From<DateTime<Local>> for JsonDateTime {
    fn from(value: DateTime<Local>) -> Self {
        JsonDateTime::new(value.naive_local(), DateTimeKind::Local)
    }
}

impl From<NaiveDateTime> for JsonDateTime {
    fn from(value: NaiveDateTime) -> Self {
        JsonDateTime::new(value, DateTimeKind::Unspecified)
    }
}

pub(crate) fn write_date_into<S: TextSink + ?Sized>(
    out: &mut S,
    date: JsonDateTime,
    format: DateTimeFormat,
    behavior: UnspecifiedDateTimeKindBehavior,
) -> Result<()> {
    let utc = date.resolve(behavior)?;
    match format {
        DateTimeFormat::MicrosoftStyleMillisecondsSinceUnixEpoch => {
            out.push_str("\"\\/Date(")?;
            write_i64_into(&mut *out, utc.timestamp_millis())?;
            out.push_str(")\\/\"")
        }
        DateTimeFormat::MillisecondsSinceUnixEpoch => {
            write_i64_into(&mut *out, utc.timestamp_millis())
        }
        DateTimeFormat::SecondsSinceUnixEpoch => write_i64_into(&mut *out, utc.timestamp()),
        DateTimeFormat::Iso8601 => {
            out.push_char('"')?;
            out.push_str(&utc.format("%Y-%m-%dT%H:%M:%S").to_string())?;
            let nanos = utc.timestamp_subsec_nanos();
            if nanos > 0 {
                let padded = format!("{nanos:09}");
                out.push_char('.')?;
                out.push_str(padded.trim_end_matches('0'))?;
            }
            out.push_str("Z\"")
        }
        DateTimeFormat::Rfc1123 => {
            out.push_char('"')?;
            out.push_str(&utc.format("%a, %d %b %Y %H:%M:%S GMT").to_string())?;
            out.push_char('"')
        }
    }
}
