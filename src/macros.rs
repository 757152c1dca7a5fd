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

/// Declare a lazily compiled, process-wide `Regex`.
///
/// ```ignore
/// pattern!(TEACHER, r"[а-яА-Я]+\s{1,3}[а-яА-Я]\.");
/// ```
///
/// Patterns are literals checked by the tests, so a failed compile is a bug.
#[macro_export]
macro_rules! pattern {
    ($(#[$meta:meta])* $vis:vis $name:ident, $re:expr) => {
        $(#[$meta])*
        $vis static $name: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| {
                ::regex::Regex::new($re).expect(concat!("invalid pattern ", stringify!($name)))
            });
    };
}
