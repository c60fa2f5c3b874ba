use crate::Version;

/// Returns `items` in ascending version order.
///
/// The sort is stable: items whose versions rank the same keep their input
/// order. `version_of` is called once per item.
pub fn sort_by_version<I, F>(items: I, mut version_of: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Version,
{
    let mut keyed = items
        .into_iter()
        .map(|item| (version_of(&item), item))
        .collect::<Vec<_>>();
    keyed.sort_by(|(a, _), (b, _)| a.semantic_cmp(b));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Returns the item with the newest version, or `None` if there are no
/// items. The earliest item wins a tie.
pub fn find_latest_by<I, F>(items: I, mut version_of: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Version,
{
    let mut latest: Option<(Version, I::Item)> = None;

    for item in items {
        let version = version_of(&item);
        let is_newer = latest
            .as_ref()
            .is_none_or(|(newest, _)| version.greater_than(newest));
        if is_newer {
            latest = Some((version, item));
        }
    }

    latest.map(|(_, item)| item)
}
