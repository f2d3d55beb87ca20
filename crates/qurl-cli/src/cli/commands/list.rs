//! `qurl list` – print all stored templates in order.

use qurl_core::store::TemplateStore;

pub fn run_list(store: &TemplateStore) {
    if store.is_empty() {
        println!("No templates stored.");
        return;
    }
    println!("Templates ({}):", store.len());
    for (i, t) in store.templates().iter().enumerate() {
        println!("{:>3}. {}", i + 1, t.name);
        println!("     {}", t.pattern);
    }
}
