/// This macro is based off the `ensure!` macro in dtolnay's anyhow crate,
/// but returns the caller's own error type instead of `anyhow::Error`
///
/// Equivalent to `if !$cond { return Err($err); }`. Useful for validating
/// invariants of hardcoded tables when they are loaded.
///
/// ```
/// # use ensure_macro::ensure;
/// #[derive(Debug, PartialEq)]
/// enum TableError {
///     OutOfOrder { previous: u64, height: u64 }
/// }
///
/// fn check_order(heights: &[u64]) -> Result<(), TableError> {
///     for pair in heights.windows(2) {
///         ensure!(pair[0] < pair[1], TableError::OutOfOrder { previous: pair[0], height: pair[1] });
///     }
///     Ok(())
/// }
///
/// assert_eq!(check_order(&[0, 25, 125]), Ok(()));
/// assert_eq!(check_order(&[0, 125, 25]), Err(TableError::OutOfOrder { previous: 125, height: 25 }));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
