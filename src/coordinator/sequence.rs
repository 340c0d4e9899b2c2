//! Cycle ordering.

/// Order the URLs of one cycle.
///
/// The primary target goes first so the deep post-load checks hit a warm
/// service; the remaining targets follow in their original order. Without
/// targets the post-load list is used as is.
pub fn build_sequence<S: AsRef<str>>(targets: &[S], post_load: &[S]) -> Vec<String> {
    let owned = |items: &[S]| -> Vec<String> {
        items.iter().map(|s| s.as_ref().to_string()).collect()
    };

    let Some((primary, remaining)) = targets.split_first() else {
        return owned(post_load);
    };

    let mut sequence = Vec::with_capacity(targets.len() + post_load.len());
    sequence.push(primary.as_ref().to_string());
    sequence.extend(owned(post_load));
    sequence.extend(owned(remaining));
    sequence
}
