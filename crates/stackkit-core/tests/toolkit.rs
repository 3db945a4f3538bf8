use stackkit_core::catalog::{ClientCatalog, TemplateCatalog};
use std::path::PathBuf;

fn toolkit() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../toolkit")
}

#[test]
fn bundled_catalogs_are_consistent() {
    let root = toolkit();
    let templates = TemplateCatalog::load(&root.join("templates/catalog.yaml")).unwrap();
    let clients = ClientCatalog::load(&root.join("clients/catalog.yaml")).unwrap();

    assert!(!templates.templates.is_empty());
    for template in &templates.templates {
        let dir = root.join("templates").join(&template.id);
        assert!(dir.is_dir(), "missing template dir {}", dir.display());
    }
    for client in &clients.clients {
        let snippet = root.join("clients").join(&client.id).join("usage-example.ts");
        assert!(snippet.is_file(), "missing snippet {}", snippet.display());
    }
}
