// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! data_attr {
    // Card attribute name for a filter key: "progetto" → "data-progetto"
    ($key:expr) => {
        ::std::format!("{}{}", $crate::config::consts::DATA_PREFIX, $key)
    };
}
