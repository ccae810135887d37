use juniper::{graphql_value, IntoFieldError, FieldError, ScalarValue};
use serde_json::json;

#[derive(Debug)]
enum InnerError {
    Io(std::io::Error),
    SerdeJson(serde_json::error::Error),
}

#[derive(Debug)]
pub struct Error {
    r#type: String,
    message: String,
    inner: Option<InnerError>,
}

impl Error {
    fn new(r#type: String, message: String) -> Self {
        Error {
            r#type: r#type,
            message: message,
            inner: None
        }
    }

    fn internal(inner: InnerError) -> Self {
        Error {
            r#type: "InternalServerError".to_string(),
            message: "Internal server error.".to_string(),
            inner: Some(inner),
        }
    }

    pub fn invalid_reference(entity: &str, id: &str) -> Self {
        Self::new(
            "InvalidReference".to_string(),
            format!(r#"{} "{}" does not exist."#, entity, id),
        )
    }

    pub fn invalid_seed(message: String) -> Self {
        Self::new(
            "InvalidSeed".to_string(),
            message,
        )
    }

    pub fn is_inner(&self) -> bool {
        self.inner.is_some()
    }
}

impl<S: ScalarValue> IntoFieldError<S> for Error {
    fn into_field_error(self) -> FieldError<S> {
        if self.is_inner() {
            info!("Encountered a server internal error: {:?}", self);
        } else {
            info!("Encountered an error: {:?}", self);
        }

        let error_type = self.r#type;
        FieldError::new(
            self.message,
            graphql_value!({
                "type": error_type
            }),
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error = match &self.inner {
            Some(InnerError::Io(err)) => json!({
                "type": &self.r#type,
                "message": &self.message,
                "cause": err.to_string(),
            }),
            Some(InnerError::SerdeJson(err)) => json!({
                "type": &self.r#type,
                "message": &self.message,
                "cause": err.to_string(),
            }),
            None => json!({
                "type": &self.r#type,
                "message": &self.message,
            }),
        };
        write!(f, "{}", error.to_string())
    }
}

macro_rules! impl_from_for_error {
    ($from:ty, $inner:ident) => {
        impl From<$from> for InnerError {
            fn from(err: $from) -> Self {
                InnerError::$inner(err)
            }
        }

        impl From<$from> for Error {
            fn from(err: $from) -> Self {
                Error::internal(err.into())
            }
        }
    }
}

impl_from_for_error!(std::io::Error, Io);
impl_from_for_error!(serde_json::error::Error, SerdeJson);
