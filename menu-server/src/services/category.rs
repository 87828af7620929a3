//! Category Deriver
//!
//! Builds the category -> subcategories index from the live products.
//! There is no built-in taxonomy: an empty catalog yields an empty index.

use shared::models::CategoryIndex;

/// Derive the category index from `(category, subcategory)` pairs.
///
/// - every category that appears becomes a key, even without subcategories
/// - empty / whitespace-only subcategories are dropped
/// - duplicates collapse; keys and values come out sorted
pub fn derive_categories<I, C, S>(pairs: I) -> CategoryIndex
where
    I: IntoIterator<Item = (C, Option<S>)>,
    C: Into<String>,
    S: AsRef<str>,
{
    let mut index = CategoryIndex::new();
    for (category, subcategory) in pairs {
        let subs = index.entry(category.into()).or_default();
        if let Some(sub) = subcategory
            && !sub.as_ref().trim().is_empty()
        {
            subs.insert(sub.as_ref().to_string());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_gives_empty_index() {
        let index = derive_categories(Vec::<(String, Option<String>)>::new());
        assert!(index.is_empty());
    }

    #[test]
    fn test_category_without_subcategory_is_kept() {
        let index = derive_categories(vec![("Main", Some("Meat")), ("Drinks", None)]);
        assert_eq!(index.len(), 2);
        assert!(index["Drinks"].is_empty());
        assert!(index["Main"].contains("Meat"));
    }

    #[test]
    fn test_blank_subcategories_are_dropped() {
        let index = derive_categories(vec![
            ("Main", Some("")),
            ("Main", Some("   ")),
            ("Main", Some("\t\n")),
            ("Main", Some("Fish")),
        ]);
        let subs: Vec<&str> = index["Main"].iter().map(String::as_str).collect();
        assert_eq!(subs, vec!["Fish"]);
    }

    #[test]
    fn test_duplicates_collapse_and_sort() {
        let index = derive_categories(vec![
            ("Main", Some("Meat")),
            ("Desserts", Some("Cake")),
            ("Main", Some("Fish")),
            ("Main", Some("Meat")),
        ]);
        let keys: Vec<&str> = index.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Desserts", "Main"]);
        let subs: Vec<&str> = index["Main"].iter().map(String::as_str).collect();
        assert_eq!(subs, vec!["Fish", "Meat"]);
    }

    #[test]
    fn test_serializes_as_object_of_arrays() {
        let index = derive_categories(vec![("Main", Some("Meat")), ("Drinks", None::<&str>)]);
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json, serde_json::json!({"Drinks": [], "Main": ["Meat"]}));
    }
}
