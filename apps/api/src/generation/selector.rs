//! Style selection — pluggable, trait-based chooser for the prompt template
//! used when a request carries no prompt of its own.
//!
//! Default: `RandomStyleSelector` (uniform over the template set).
//! `AppState` holds an `Arc<dyn StyleSelector>`, so tests can swap in a
//! deterministic selector.

use rand::Rng;

/// Picks which prompt template to use. Implement this to make the choice
/// deterministic without touching the handler.
pub trait StyleSelector: Send + Sync {
    /// Returns an index in `0..style_count`.
    fn pick(&self, style_count: usize) -> usize;
}

/// Uniform random selection over the template set.
pub struct RandomStyleSelector;

impl StyleSelector for RandomStyleSelector {
    fn pick(&self, style_count: usize) -> usize {
        rand::thread_rng().gen_range(0..style_count)
    }
}
