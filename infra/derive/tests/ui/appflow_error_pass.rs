use appflow_derive::appflow_error;
use std::borrow::Cow;

#[appflow_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Template error{}: {message}", format_context(.context))]
    Template { message: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, DemoError> {
    std::fs::read_to_string(path).with_context(|| format!("Reading {path}"))
}

fn main() {
    let _ = read("template.json");
    let _: DemoError = "boom".into();
}
