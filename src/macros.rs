// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! row {
    // Table row shorthand: row!["", "Day 1", ("Mon", 3)]
    ($($cell:expr),* $(,)?) => {
        vec![$($crate::engine::types::Cell::from($cell)),*]
    };
}
