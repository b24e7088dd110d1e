//! fixed demo data

use std::io::Write;

use serde_json::json;

use crate::store::Store;
use crate::value::render_compact;
use crate::Result;

/// pre-populate the entries every CLI run starts with
pub fn seed_demo(store: &mut Store) {
    log::trace!("seeding demo entries");
    store
        .set("greeting", "Hello, World!")
        .set("version", "1.0.0")
        .set("author", "DataStore CLI")
        .set("features", json!(["get", "set", "has", "keys", "values"]));
}

/// walk through the library api on a fresh store, printing each step
pub fn usage_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut store = Store::new();
    writeln!(out, "Data Store Example:")?;

    store
        .set("name", "John Doe")
        .set("age", 30)
        .set("city", "New York");

    for key in &["name", "age", "city", "country"] {
        let shown = store
            .get(key)
            .map(render_compact)
            .unwrap_or_else(|| "(absent)".to_owned());
        writeln!(out, "Getting {}: {}", key, shown)?;
    }

    let values: Vec<String> = store.values().iter().map(render_compact).collect();
    writeln!(out)?;
    writeln!(out, "All keys: {}", store.keys().join(", "))?;
    writeln!(out, "All values: {}", values.join(", "))?;
    writeln!(out, "Store size: {}", store.size())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_order() {
        let mut store = Store::new();
        seed_demo(&mut store);
        assert_eq!(store.keys(), vec!["greeting", "version", "author", "features"]);
        assert_eq!(store.get("version"), Some(&json!("1.0.0")));
    }

    #[test]
    fn usage_demo_output() {
        let mut out = Vec::new();
        usage_demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Data Store Example:\n"));
        assert!(text.contains("Getting name: John Doe\n"));
        assert!(text.contains("Getting age: 30\n"));
        assert!(text.contains("Getting country: (absent)\n"));
        assert!(text.contains("All keys: name, age, city\n"));
        assert!(text.ends_with("Store size: 3\n"));
    }
}
