//! Precedence ordering for loaded models.

use crate::ConfigModel;

/// Composite sort key: archived first, then explicit order, then the
/// position the model held before sorting.
fn precedence_key(model: &ConfigModel, discovery_index: usize) -> (bool, i32, usize) {
    (
        !model.location().is_archived(),
        model.order(),
        discovery_index,
    )
}

/// Sorts `models` in place by [`precedence_key`].
///
/// The discovery index makes every key unique, so the result does not depend
/// on the stability of the underlying sort.
pub(super) fn sort_by_precedence(models: &mut Vec<ConfigModel>) {
    let mut indexed: Vec<(usize, ConfigModel)> =
        std::mem::take(models).into_iter().enumerate().collect();
    indexed.sort_unstable_by_key(|(discovery_index, model)| {
        precedence_key(model, *discovery_index)
    });
    models.extend(indexed.into_iter().map(|(_, model)| model));
}
