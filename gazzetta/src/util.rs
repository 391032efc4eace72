use gazzetta_core::GazzettaError;
use gazzetta_types::RawArticle;
use tokio::task::JoinHandle;

/// Await spawned adapter calls in the order given, not in completion order.
///
/// A task that panicked (or was cancelled) surfaces as
/// `GazzettaError::ProviderPanicked` tagged with its adapter name; siblings are
/// unaffected.
pub async fn join_in_order(
    handles: Vec<(&'static str, JoinHandle<Result<Vec<RawArticle>, GazzettaError>>)>,
) -> Vec<(&'static str, Result<Vec<RawArticle>, GazzettaError>)> {
    let (names, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
    let joined = futures::future::join_all(handles).await;
    names
        .into_iter()
        .zip(joined)
        .map(|(name, res)| {
            let res = res.unwrap_or_else(|_join_err| Err(GazzettaError::provider_panicked(name)));
            (name, res)
        })
        .collect()
}

/// Collapse a set of adapter errors into one `GazzettaError`.
///
/// Rules:
/// - No errors → `Other("no adapter errors")`.
/// - A single error → that error, unchanged.
/// - Else → `AllProvidersFailed` with nested aggregates flattened.
#[must_use]
pub fn collapse_errors(errors: Vec<GazzettaError>) -> GazzettaError {
    let mut flat: Vec<GazzettaError> = errors
        .into_iter()
        .flat_map(GazzettaError::flatten)
        .collect();
    match flat.len() {
        0 => GazzettaError::Other("no adapter errors".to_string()),
        1 => flat.remove(0),
        _ => GazzettaError::AllProvidersFailed(flat),
    }
}
