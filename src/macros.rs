// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! issue {
    // Issue shorthand: issue!(Kind, Some(pos), "fmt", args..)
    ($kind:ident, $pos:expr, $($arg:tt)*) => {
        $crate::check::Issue {
            kind: $crate::check::IssueKind::$kind,
            message: ::std::format!($($arg)*),
            position: $pos,
        }
    };
}
