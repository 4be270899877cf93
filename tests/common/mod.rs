use jlox::Lox;

/// Runs `source` through a fresh interpreter and returns its captured stdout
/// and the formatted error lines reported along the way.
pub fn run(source: &str) -> (String, Vec<String>) {
    let mut lox = Lox::capturing();
    lox.run(source);
    let output = std::str::from_utf8(lox.output()).unwrap().to_string();
    (output, lox.error_lines().to_vec())
}

/// Asserts that running `source` produces exactly `expected` lines on
/// stdout and no reported errors.
#[macro_export]
macro_rules! assert_runs {
    ($source:expr, $($expected:expr),* $(,)?) => {{
        let (output, errors) = $crate::common::run($source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        let expected: Vec<&str> = vec![$($expected),*];
        let expected = if expected.is_empty() { String::new() } else { format!("{}\n", expected.join("\n")) };
        assert_eq!(output, expected);
    }};
}

/// Asserts that running `source` reports at least one error line containing
/// `needle`.
#[macro_export]
macro_rules! assert_errors {
    ($source:expr, $needle:expr) => {{
        let (_, errors) = $crate::common::run($source);
        assert!(
            errors.iter().any(|line| line.contains($needle)),
            "expected an error containing {:?}, got {errors:?}",
            $needle,
        );
    }};
}
