// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Some($($pattern:tt)*) }) => {
        match $result {
            Some($($pattern)*) => {},
            other => panic!("Expected Some({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
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

// One test per size-changing operation: the call must fail naming the
// operation and leave the adapter exactly as it was.
#[macro_export]
macro_rules! rejects {
    ($($name:ident: |$list:ident| $call:expr;)*) => {
        $(
            #[test]
            fn $name() {
                let mut $list = listkit::ArrayAdapter::from(["a", "b", "a", "c"]);
                let before = $list.clone();
                let operation = stringify!($name);
                $crate::assert_case!($call, {
                    Err(listkit::ListError::UnsupportedOperation { operation: op, type_name: "ArrayAdapter" })
                        if op == operation
                });
                pretty_assertions::assert_eq!($list, before);
            }
        )*
    };
}
