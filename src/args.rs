//! Argument list helpers

/// The first argument, or `""` when there is none.
pub fn first_element<S: AsRef<str>>(args: &[S]) -> &str {
    args.first().map(AsRef::as_ref).unwrap_or("")
}
