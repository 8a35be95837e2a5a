use thiserror::Error;

pub mod app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    #[cfg(feature = "ssr")]
    #[error("Config error: {0}")]
    Config(String),
    #[cfg(feature = "ssr")]
    #[error("Io error: {0}")]
    Io(String),
}

#[cfg(feature = "ssr")]
macro_rules! impl_from_to_string {
    ($res:path, $from:ty) => {
        impl From<$from> for AppError {
            fn from(value: $from) -> Self {
                $res(value.to_string())
            }
        }
    };
}

#[cfg(feature = "ssr")]
impl_from_to_string!(AppError::Io, std::io::Error);

#[cfg(feature = "ssr")]
pub mod ssr {
    use axum::http::{header, HeaderValue};
    use leptos::prelude::use_context;

    /// Hardening headers for every rendered page.
    pub fn set_headers() {
        let response = match use_context::<leptos_axum::ResponseOptions>() {
            Some(ro) => ro,
            None => return, // route list generation has no response
        };

        response.insert_header(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        );
        response.insert_header(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
        response.insert_header(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, private"),
        );
        response.insert_header(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_not_found_message() {
        let err = AppError::ProjectNotFound("project-42".to_string());
        assert_eq!(err.to_string(), "Project not found: project-42");
    }
}
