use std::hash::Hash;

use hashbrown::HashSet;

/// Which occurrence of a repeated value survives [`unique`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Keep {
    #[default]
    First,
    Last,
}

/// Remove repeated values, preserving the relative order of the survivors.
pub fn unique<T>(items: &[T], keep: Keep) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());

    match keep {
        Keep::First => items.iter().filter(|i| seen.insert(*i)).cloned().collect(),
        Keep::Last => {
            let mut out: Vec<T> = items
                .iter()
                .rev()
                .filter(|i| seen.insert(*i))
                .cloned()
                .collect();
            out.reverse();
            out
        }
    }
}

#[cfg(test)]
#[path = "unique_tests.rs"]
mod tests;
