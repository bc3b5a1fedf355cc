/// A successfully parsed value and the number of leading code units it occupied.
///
/// `consumed` may be shorter than the input: a run that stops at a non-digit is still a success,
/// and the caller advances its own cursor by `consumed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parsed<T> {
    /// The parsed value.
    pub value: T,
    /// Count of input units that formed the value.
    pub consumed: usize,
}

impl<T> Parsed<T> {
    /// Construct a result.
    #[inline]
    #[must_use]
    pub const fn new(value: T, consumed: usize) -> Self {
        Self { value, consumed }
    }

    /// Map the value, keeping `consumed`.
    #[inline]
    pub fn map<V>(self, f: impl FnOnce(T) -> V) -> Parsed<V> {
        Parsed {
            value: f(self.value),
            consumed: self.consumed,
        }
    }

    /// Returns the value, discarding `consumed`.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}
