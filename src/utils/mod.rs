pub mod code_generator;
pub mod url_validator;

pub use code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, generate_short_code};
pub use url_validator::{UrlValidationError, validate_url};
