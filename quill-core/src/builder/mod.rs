//! Query builder traits and shared types

pub mod select;

pub use select::SelectBuilder;

/// Core trait for query builders
pub trait QueryBuilder {
    /// Render the SQL query string
    ///
    /// Rendering is a pure read of the builder: it can be called any number
    /// of times and always reflects the draft at call time.
    fn to_sql(&self) -> String;

    /// Clone the builder (for immutable chaining)
    fn clone_builder(&self) -> Self
    where
        Self: Sized;
}

/// How clauses that were never set are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Every clause keeps its position, separated by single spaces.
    ///
    /// An absent WHERE leaves an empty slot (a double space), and
    /// `ORDER BY` / `LIMIT` are always written, with empty tokens and `0`
    /// when never set: `SELECT * FROM t  ORDER BY   LIMIT 0`.
    #[default]
    Verbatim,
    /// Unset clauses are left out entirely: `SELECT * FROM t`.
    Compact,
}

/// Trait for types that can be converted to column lists
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

/// Zero columns, i.e. `SELECT *`
impl IntoColumns for () {
    fn into_columns(self) -> Vec<String> {
        Vec::new()
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

macro_rules! impl_into_columns_for_tuple {
    (@str $name:ident) => { &str };
    ($($name:ident),+) => {
        impl IntoColumns for ($(impl_into_columns_for_tuple!(@str $name),)+) {
            #[allow(non_snake_case)]
            fn into_columns(self) -> Vec<String> {
                let ($($name,)+) = self;
                vec![$($name.to_string()),+]
            }
        }
    };
}

impl_into_columns_for_tuple!(A);
impl_into_columns_for_tuple!(A, B);
impl_into_columns_for_tuple!(A, B, C);
impl_into_columns_for_tuple!(A, B, C, D);
impl_into_columns_for_tuple!(A, B, C, D, E);
impl_into_columns_for_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_columns_preserves_order() {
        assert_eq!(("id", "name", "email").into_columns(), vec!["id", "name", "email"]);
        assert_eq!(vec!["b", "a"].into_columns(), vec!["b", "a"]);
        assert_eq!(["x", "x"].into_columns(), vec!["x", "x"]);
    }

    #[test]
    fn test_empty_column_lists() {
        assert!(().into_columns().is_empty());
        assert!(Vec::<String>::new().into_columns().is_empty());
        let none: [&str; 0] = [];
        assert!(none.into_columns().is_empty());
    }

    #[test]
    fn test_default_style_is_verbatim() {
        assert_eq!(RenderStyle::default(), RenderStyle::Verbatim);
    }
}
