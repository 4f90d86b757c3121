//! Selection state and the navigation transitions that drive it.
//!
//! `Selection` is plain data handed to the filter; nothing reads it from
//! ambient state. Navigation always resets the subcategory, and going home
//! resets both levels.

use crate::product::{Category, Peripheral};

/// Category level of the filter bar. `Todos` means no category filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    Todos,
    Only(Category),
}

impl CategoryFilter {
    /// Filter-bar order.
    pub const BAR: [CategoryFilter; 4] = [
        CategoryFilter::Todos,
        CategoryFilter::Only(Category::Notebooks),
        CategoryFilter::Only(Category::Computadores),
        CategoryFilter::Only(Category::Perifericos),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::Todos => "TODOS",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

/// Subcategory level; only consulted when the category is `Perifericos`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubCategoryFilter {
    #[default]
    Todos,
    Only(Peripheral),
}

impl SubCategoryFilter {
    pub const BAR: [SubCategoryFilter; 5] = [
        SubCategoryFilter::Todos,
        SubCategoryFilter::Only(Peripheral::Mouse),
        SubCategoryFilter::Only(Peripheral::Teclado),
        SubCategoryFilter::Only(Peripheral::Monitor),
        SubCategoryFilter::Only(Peripheral::PlacaDeVideo),
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubCategoryFilter::Todos => "TODOS",
            SubCategoryFilter::Only(p) => p.display_name(),
        }
    }
}

/// Where a navigation event points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Home: scroll to the top and clear every filter.
    Inicio,
    /// "Ver catálogo": the sampled all-products view.
    Todos,
    Category(Category),
}

impl NavTarget {
    /// Header menu entries, in display order.
    pub const MENU: [(&'static str, NavTarget); 4] = [
        ("Início", NavTarget::Inicio),
        ("Computadores", NavTarget::Category(Category::Computadores)),
        ("Notebooks", NavTarget::Category(Category::Notebooks)),
        ("Periféricos", NavTarget::Category(Category::Perifericos)),
    ];
}

/// Scroll side effect the page should perform after a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    ScrollToTop,
    ScrollToProducts,
}

/// Current `(category, subcategory)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub category: CategoryFilter,
    pub sub_category: SubCategoryFilter,
}

impl Selection {
    /// `TODOS/TODOS`, the state at startup and after going home.
    pub fn home() -> Self {
        Self::default()
    }

    pub fn category(category: Category) -> Self {
        Self {
            category: CategoryFilter::Only(category),
            sub_category: SubCategoryFilter::Todos,
        }
    }

    pub fn peripheral(peripheral: Peripheral) -> Self {
        Self {
            category: CategoryFilter::Only(Category::Perifericos),
            sub_category: SubCategoryFilter::Only(peripheral),
        }
    }

    /// Category button on the filter bar; always clears the subcategory.
    pub fn pick_category(&mut self, filter: CategoryFilter) {
        self.category = filter;
        self.sub_category = SubCategoryFilter::Todos;
    }

    /// Subcategory button. The bar only shows these under `Perifericos`; a pick
    /// made under any other category is kept but has no effect on filtering.
    pub fn pick_sub_category(&mut self, filter: SubCategoryFilter) {
        self.sub_category = filter;
    }

    pub fn navigate(&mut self, target: NavTarget) -> NavEffect {
        match target {
            NavTarget::Inicio => {
                *self = Self::home();
                NavEffect::ScrollToTop
            }
            NavTarget::Todos => {
                self.pick_category(CategoryFilter::Todos);
                NavEffect::ScrollToProducts
            }
            NavTarget::Category(c) => {
                self.pick_category(CategoryFilter::Only(c));
                NavEffect::ScrollToProducts
            }
        }
    }

    /// Whether the subcategory bar applies to this selection.
    pub fn shows_sub_categories(&self) -> bool {
        self.category == CategoryFilter::Only(Category::Perifericos)
    }
}
