use uuid::Uuid;

/// Record addressed by its server-assigned identifier.
pub trait Keyed {
    fn uuid(&self) -> Uuid;
}

/// Record carrying the single-winner `isActive` flag (Hero, About).
pub trait Activatable {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Appends a freshly created record to the list, matching the original
/// client's behavior of extending local state instead of refetching.
pub fn append<T: Keyed>(list: &mut Vec<T>, created: T) {
    list.push(created);
}

/// Merges an update response into the matching entry. Entries with other
/// identifiers are left untouched; an unmatched response is dropped.
pub fn merge_by_uuid<T: Keyed>(list: &mut [T], updated: T) {
    if let Some(slot) = list.iter_mut().find(|item| item.uuid() == updated.uuid()) {
        *slot = updated;
    }
}

/// Removes exactly the entry matching `uuid`. Returns whether an entry was
/// removed.
pub fn remove_by_uuid<T: Keyed>(list: &mut Vec<T>, uuid: Uuid) -> bool {
    match list.iter().position(|item| item.uuid() == uuid) {
        Some(idx) => {
            list.remove(idx);
            true
        }
        None => false,
    }
}

/// Local mirror of the backend's single-winner activation: flips `isActive`
/// on for the target and off for every other entry.
pub fn mark_active_only<T: Keyed + Activatable>(list: &mut [T], uuid: Uuid) {
    for item in list.iter_mut() {
        let active = item.uuid() == uuid;
        item.set_active(active);
    }
}
