//! Derived state - cached computations.
//!
//! Visible categories are recomputed only when the tree generation or the
//! department they belong to changes; unrelated mutations (menu open flag,
//! open slots) keep the cached result.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use megamenu_model::MenuNode;

#[derive(Debug, Clone)]
struct CategoryCache {
    generation: u64,
    department_id: String,
    /// Indices into the department's children.
    indices: Rc<[usize]>,
}

/// Cached derived state; clones carry the cache along.
#[derive(Debug, Clone, Default)]
pub struct DerivedState {
    categories: RefCell<Option<CategoryCache>>,
    recomputations: Cell<u64>,
}

impl DerivedState {
    /// Visible child indices of `department`, memoised on
    /// `(generation, department id)`.
    pub fn visible_category_indices(&self, generation: u64, department: &MenuNode) -> Rc<[usize]> {
        if let Some(cache) = self.categories.borrow().as_ref()
            && cache.generation == generation
            && cache.department_id == department.id
        {
            return Rc::clone(&cache.indices);
        }

        let indices: Rc<[usize]> = department
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.display)
            .map(|(index, _)| index)
            .collect();
        self.recomputations.set(self.recomputations.get() + 1);
        *self.categories.borrow_mut() = Some(CategoryCache {
            generation,
            department_id: department.id.clone(),
            indices: Rc::clone(&indices),
        });
        indices
    }

    /// Drop every cached value.
    pub fn invalidate(&self) {
        self.categories.borrow_mut().take();
    }

    /// How many times the category list was rebuilt.
    #[cfg(test)]
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }
}
