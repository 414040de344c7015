use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Ok`] value, panicking with the error's own [`Display`](std::fmt::Display)
    /// output when there isn't one.
    ///
    /// This exists so that a typed error can double as a panic payload without the debug-printed
    /// noise [`Result::unwrap`] wraps around it: the panic message is exactly what the error says.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
