use std::collections::TryReserveError;

/// Reserves exactly `additional` more slots, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_reserve_exact<T>(
    buffer: &mut Vec<T>,
    additional: usize,
) -> Result<(), TryReserveError> {
    #[cfg(test)]
    if failure::armed() {
        return failure::error();
    }
    buffer.try_reserve_exact(additional)
}

/// Copies `item` into a freshly allocated `String` of exactly its length.
pub(crate) fn try_to_owned(item: &str) -> Result<String, TryReserveError> {
    #[cfg(test)]
    if failure::armed() {
        return failure::error().map(|_| String::new());
    }
    let mut owned = String::new();
    owned.try_reserve_exact(item.len())?;
    owned.push_str(item);
    Ok(owned)
}
