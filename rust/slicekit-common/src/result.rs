pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg<T>(name: &str, condition: &str) -> Result<T> {
    Err(crate::error::Error::invalid_arg(name, condition))
}

#[cold]
pub fn index_out_of_bounds<T>(index: usize, len: usize) -> Result<T> {
    Err(crate::error::Error::index_out_of_bounds(index, len))
}

#[cold]
pub fn invalid_range<T>(begin: usize, end: usize, len: usize) -> Result<T> {
    Err(crate::error::Error::invalid_range(begin, end, len))
}

#[cold]
pub fn empty_sequence<T>(operation: &str) -> Result<T> {
    Err(crate::error::Error::empty_sequence(operation))
}
