//! The static category reference table used to bucket expenses.
//!
//! Categories are not user-mutable; transactions reference them by key.

/// A fixed expense/income bucket with its display metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// The stable key transactions reference.
    pub key: &'static str,
    /// The display name.
    pub name: &'static str,
    /// The display color as a hex string.
    pub color: &'static str,
    /// The feather icon name.
    pub icon: &'static str,
}

/// The category table, in display order.
pub const CATEGORIES: [Category; 6] = [
    Category {
        key: "purchases",
        name: "Shopping",
        color: "#5636D3",
        icon: "shopping-bag",
    },
    Category {
        key: "food",
        name: "Food",
        color: "#FF872C",
        icon: "coffee",
    },
    Category {
        key: "salary",
        name: "Salary",
        color: "#12A454",
        icon: "dollar-sign",
    },
    Category {
        key: "car",
        name: "Car",
        color: "#E83F5B",
        icon: "crosshair",
    },
    Category {
        key: "leisure",
        name: "Leisure",
        color: "#26195C",
        icon: "heart",
    },
    Category {
        key: "studies",
        name: "Studies",
        color: "#9C001A",
        icon: "book",
    },
];

/// The bucket used for transactions whose category key is not in the table,
/// so malformed records still render.
pub const OTHER: Category = Category {
    key: "other",
    name: "Other",
    color: "#969CB2",
    icon: "more-horizontal",
};

/// Look up a category by its key, falling back to [OTHER] for unknown keys.
pub fn by_key(key: &str) -> Category {
    CATEGORIES
        .iter()
        .copied()
        .find(|category| category.key == key)
        .unwrap_or(OTHER)
}
