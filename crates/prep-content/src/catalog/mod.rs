//! Built-in catalog, one module per category.
//!
//! Each module is authored independently and returns a [`CategoryModule`];
//! [`modules`] is the single assembly point consumed by
//! [`crate::ContentStore::builtin`].

mod css;
mod html;
mod javascript;
mod python;
mod sql;

use crate::store::CategoryModule;

/// All authored category modules, merged at startup.
pub fn modules() -> Vec<CategoryModule> {
    vec![
        javascript::module(),
        html::module(),
        css::module(),
        sql::module(),
        python::module(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::ContentStore;

    #[test]
    fn builtin_catalog_assembles() {
        let store = ContentStore::builtin();
        assert!(store.category_count() >= 5);
        for category in store.category_names() {
            assert!(!store.topic_names(category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn every_topic_has_some_content() {
        let store = ContentStore::builtin();
        let categories: Vec<String> = store.category_names().map(str::to_string).collect();
        for category in &categories {
            for topic in store.topic_names(category) {
                let entry = store.entry(category, topic).expect("entry exists");
                assert!(
                    entry.concept.is_some() || entry.example.is_some(),
                    "{category}/{topic} has neither concept nor example"
                );
            }
        }
    }
}
