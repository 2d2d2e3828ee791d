use appflow_derive::appflow_error;

#[appflow_error]
pub enum DemoError {
    #[error("Template error: {message}")]
    Template { message: String, context: Option<String> },
}

fn main() {}
