//! The keep/problem/try partition of one retrospective's items.

use serde::{Deserialize, Serialize};

use kaizen_core::retro::{KptaCategory, KptaItem};

/// The three category sequences, each ascending by `order_index` with
/// ties broken by creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryViews {
    pub keeps: Vec<KptaItem>,
    pub problems: Vec<KptaItem>,
    pub tries: Vec<KptaItem>,
}

impl CategoryViews {
    /// The sequence for one category.
    pub fn view(&self, category: KptaCategory) -> &[KptaItem] {
        match category {
            KptaCategory::Keep => &self.keeps,
            KptaCategory::Problem => &self.problems,
            KptaCategory::Try => &self.tries,
        }
    }

    /// Item count across the three categories.
    pub fn total(&self) -> usize {
        self.keeps.len() + self.problems.len() + self.tries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
