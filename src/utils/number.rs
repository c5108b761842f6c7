use itoa::Buffer as ItoaBuffer;
use ryu::Buffer as RyuBuffer;

use crate::error::{Error, Result};
use crate::utils::text::TextSink;

pub(crate) fn write_i64_into<S: TextSink + ?Sized>(out: &mut S, value: i64) -> Result<()> {
    let mut buf = ItoaBuffer::new();
    out.push_str(buf.format(value))
}

pub(crate) fn write_u64_into<S: TextSink + ?Sized>(out: &mut S, value: u64) -> Result<()> {
    let mut buf = ItoaBuffer::new();
    out.push_str(buf.format(value))
}

/// JSON has no representation for NaN or the infinities, so those fail
/// rather than degrade to `null`.
pub(crate) fn write_f64_into<S: TextSink + ?Sized>(out: &mut S, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFiniteNumber);
    }
    let mut buf = RyuBuffer::new();
    out.push_str(buf.format_finite(value))
}

pub(crate) fn format_i64(value: i64) -> String {
    let mut buf = ItoaBuffer::new();
    buf.format(value).to_string()
}
