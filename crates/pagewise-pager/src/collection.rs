//! Collection checks used by the pager's lifecycle triggers.

/// Check whether a collection has any items.
pub fn is_non_empty<T>(items: &[T]) -> bool {
    !items.is_empty()
}

/// Check whether two collections differ in length.
///
/// Contents are not compared; a same-length replacement counts as unchanged.
pub fn length_changed<A, B>(current: &[A], previous: &[B]) -> bool {
    current.len() != previous.len()
}
