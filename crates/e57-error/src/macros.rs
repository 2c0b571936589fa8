//! Macros that capture the source location of a failure or a report.

/// Name of the enclosing function, without its module path.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// Build a [`Failure`](crate::Failure) that records where it was raised.
///
/// ```rust
/// use e57_error::{ErrorKind, Result, e57_failure};
///
/// fn child(index: i64, count: i64) -> Result<()> {
///     if index >= count {
///         let kind = ErrorKind::ChildIndexOutOfBounds;
///         return Err(e57_failure!(kind, "childIndex={index} childCount={count}"));
///     }
///     Ok(())
/// }
///
/// let failure = child(5, 3).unwrap_err();
/// assert_eq!(failure.origin_function(), Some("child"));
/// ```
#[macro_export]
macro_rules! e57_failure {
    ($kind:expr $(,)?) => {
        $crate::Failure::at(
            $kind,
            ::std::string::String::new(),
            ::core::file!(),
            ::core::line!(),
            ::core::option::Option::Some($crate::__function_name!()),
        )
    };
    ($kind:expr, $($arg:tt)+) => {
        $crate::Failure::at(
            $kind,
            ::std::format!($($arg)+),
            ::core::file!(),
            ::core::line!(),
            ::core::option::Option::Some($crate::__function_name!()),
        )
    };
}

/// Capture the current location as a [`ReportSite`](crate::ReportSite).
#[macro_export]
macro_rules! report_site {
    () => {
        $crate::ReportSite::new(::core::file!(), ::core::line!())
            .with_function($crate::__function_name!())
    };
}
