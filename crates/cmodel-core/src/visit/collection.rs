///
/// visit_collection
///
/// Apply `visit` to each item in declaration order, stopping at the first
/// error. An empty slice does no work at all. Every child-collection
/// traversal in the engine goes through here.
///
pub fn visit_collection<T, E>(
    items: &[T],
    mut visit: impl FnMut(&T) -> Result<(), E>,
) -> Result<(), E> {
    if items.is_empty() {
        return Ok(());
    }

    for item in items {
        visit(item)?;
    }

    Ok(())
}
