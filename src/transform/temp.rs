use crate::base::Span;
use crate::core::TransformError;

use super::context::FunctionCtx;

/// `freshTemp()` from §4.2: draw the next name from the current function's
/// fixed pool, or fail with a diagnostic naming the source location and the
/// pool size.
pub fn fresh_temp(function: &mut FunctionCtx, span: Option<Span>) -> Result<String, TransformError> {
    if function.is_exhausted() {
        return Err(TransformError::pool_exhausted(function.pool_size(), span));
    }
    Ok(function.take_temp_name())
}
