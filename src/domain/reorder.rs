use crate::error::{BoardError, Result};

/// Moves a single element within a list
///
/// Removes the element at `from` and inserts it at `to`; the elements in
/// between shift by one position towards the vacated slot. Moving an element
/// onto its own index leaves the list untouched.
///
/// # Examples
/// ```
/// use colboard_core::domain::reorder::array_move;
///
/// let mut lanes = vec!["a", "b", "c"];
/// array_move(&mut lanes, 0, 2).unwrap();
/// assert_eq!(lanes, vec!["b", "c", "a"]);
/// ```
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }

    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}
