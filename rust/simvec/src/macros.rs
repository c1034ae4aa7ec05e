/// Creates a [`SimpleVector`](crate::SimpleVector) from a literal list of values,
/// or from a value repeated `n` times.
///
/// ```
/// use simvec::simvec;
///
/// let v = simvec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simvec!["x"; 2];
/// assert_eq!(w.as_slice(), &["x", "x"]);
/// ```
#[macro_export]
macro_rules! simvec {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
