use crate::error::{Error, Result};

pub(crate) fn validate_depth(depth: usize, max_depth: usize) -> Result<()> {
    if depth > max_depth {
        return Err(Error::max_depth(max_depth));
    }
    Ok(())
}
