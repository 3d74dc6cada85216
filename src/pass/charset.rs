//! Character categories and pool building.

use rand::Rng;
use tracing::debug;

use super::shuffle;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &str = "0123456789";
const SYMBOLS: &str = "~`!@#$%^&*()_-+={[}]|\\:;\"'<,>.?/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lowercase,
    Uppercase,
    Numeric,
    Symbol,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Numeric,
        Category::Symbol,
    ];

    /// Map a selector code (`l`, `u`, `n`, `s`) to its category.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'l' => Some(Category::Lowercase),
            'u' => Some(Category::Uppercase),
            'n' => Some(Category::Numeric),
            's' => Some(Category::Symbol),
            _ => None,
        }
    }

    pub fn chars(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Numeric => NUMERIC,
            Category::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Lowercase => "lowercase",
            Category::Uppercase => "uppercase",
            Category::Numeric => "numeric",
            Category::Symbol => "symbol",
        }
    }
}

/// Categories selected for a run, in the order they were first requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    pub fn all() -> Self {
        CategorySet(Category::ALL.to_vec())
    }

    /// Parse a selector string such as `l,u,n,s`.
    ///
    /// An empty string selects every category. Unknown codes are skipped, so a
    /// string made only of unknown codes selects nothing.
    ///
    /// A repeated code adds its category once (`lln` is the same as `ln`), so
    /// repeats do not give a category extra weight in the pool.
    pub fn parse(selector: &str) -> Self {
        if selector.is_empty() {
            return Self::all();
        }

        let (selected, ignored) = split_codes(selector);
        if !ignored.is_empty() {
            debug!(codes = %ignored.escape_debug(), "ignoring unknown category codes");
        }
        CategorySet(selected)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

/// Split a selector into its distinct categories and the unknown codes.
/// Commas separate codes and are not reported as unknown.
fn split_codes(selector: &str) -> (Vec<Category>, String) {
    let mut selected = Vec::with_capacity(Category::ALL.len());
    let mut ignored = String::new();
    for code in selector.chars() {
        match Category::from_code(code) {
            Some(category) if !selected.contains(&category) => selected.push(category),
            Some(_) => {}
            None if code == ',' => {}
            None => ignored.push(code),
        }
    }
    (selected, ignored)
}

/// Concatenate the characters of every selected category and shuffle the result.
pub fn build_pool<R: Rng + ?Sized>(categories: &CategorySet, rng: &mut R) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    for category in categories.iter() {
        chars.extend(category.chars().chars());
    }

    let names: Vec<&str> = categories.iter().map(Category::name).collect();
    debug!(categories = ?names, size = chars.len(), "built character pool");

    shuffle(&chars, rng)
}
