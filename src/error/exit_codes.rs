use crate::error::SiftError;

pub fn get_exit_code(error: &SiftError) -> i32 {
    match error {
        SiftError::InvalidConfig(_) | SiftError::ConfigFile(_) => 2,

        SiftError::CatalogNotFound(_)
        | SiftError::CatalogIndexOutOfRange { .. }
        | SiftError::AmbiguousCatalogName { .. } => 4,

        SiftError::ConnectFailed { .. } | SiftError::CatalogFetch(_) | SiftError::Http(_) => 20,

        SiftError::Cancelled => 130, // 128 + SIGINT

        _ => 1,
    }
}
