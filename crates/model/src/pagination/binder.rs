/// Positional parameter binding on a prepared statement.
///
/// Positions are 1-based. Implementations report a bad position or an
/// unusable statement through their own error type; callers receive that
/// error untouched.
pub trait StatementBinder {
    type Error;

    fn bind_i64(&mut self, position: usize, value: i64) -> Result<(), Self::Error>;

    fn bind_bytes(&mut self, position: usize, value: &[u8]) -> Result<(), Self::Error>;
}
