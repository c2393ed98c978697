use crate::error::{ErrorContext, SiftError};

pub fn format_error_chain(error: &SiftError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}
