// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - `Ok(..)` or `Err(..)` followed by a condition
    ($result:expr, { Ok($($pattern:tt)*) if $guard:expr }) => {
        match $result {
            Ok($($pattern)*) if $guard => {},
            other => panic!("Expected Ok({}) if {} but got {:?}", stringify!($($pattern)*), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) if $guard:expr }) => {
        match $result {
            Err($($pattern)*) if $guard => {},
            other => panic!("Expected Err({}) if {} but got {:?}", stringify!($($pattern)*), stringify!($guard), other),
        }
    };

    // Pattern matching cases - detect common pattern forms
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // With attributes (including empty attribute list)
    ([$($attrs:meta)*] postfix, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_postfix() {
            let result = formula::compiler::compile(input()).map(|program| program.to_string());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] value, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_value() {
            let result = input()
                .parse::<formula::Formula>()
                .and_then(|formula| formula.eval(&()));
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] error, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_error() {
            let result = match input().parse::<formula::Formula>().and_then(|f| f.eval(&())) {
                Err(e) => Ok::<_, ()>(e.kind),
                Ok(value) => panic!("Expected an error, but the formula evaluated to {value}"),
            };
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] rendered, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_rendered() {
            // Normalize by stripping trailing whitespace from each line
            fn normalize(s: &str) -> String {
                s.lines()
                    .map(|line| line.trim_end())
                    .collect::<Vec<_>>()
                    .join("\n")
                    + "\n"
            }

            let err = match input().parse::<formula::Formula>().and_then(|f| f.eval(&())) {
                Err(e) => e,
                Ok(value) => panic!("Expected an error, but the formula evaluated to {value}"),
            };
            let mut buf = Vec::new();
            let config = formula::RenderConfig { color: false, ..Default::default() };
            formula::render_error_to(&err, &mut buf, &config).unwrap();
            let err_string = String::from_utf8_lossy(&buf).into_owned();
            let normalized = normalize(&err_string);

            let result: Result<&str, ()> = Ok(normalized.as_str());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;
            use once_cell::sync::OnceCell;

            // Make `$input` available to all test functions
            fn input() -> &'static str {
                static INPUT_CELL: OnceCell<&'static str> = OnceCell::new();
                INPUT_CELL.get_or_init(|| $input)
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
