//! Integration tests for `generate module`

use std::fs;
use std::path::Path;

use lupettogo::{
    generate_module, generate_project, Catalog, GenerateOptions, GenerationError, ModuleOptions,
    ProjectConfiguration, TemplateSource,
};
use tempfile::TempDir;

fn generated_project(dir: &Path) -> std::path::PathBuf {
    let config = ProjectConfiguration::new("shopapi")
        .unwrap()
        .with_module_path("example.com/shopapi")
        .unwrap();
    generate_project(&Catalog::embedded(), &config, dir, GenerateOptions::default())
        .unwrap()
        .root()
        .to_path_buf()
}

#[test]
fn test_order_module_in_generated_project() {
    let dir = TempDir::new().unwrap();
    let root = generated_project(dir.path());

    let written = generate_module(
        &Catalog::embedded(),
        "order",
        &root,
        &ModuleOptions::default(),
        |_| {},
    )
    .unwrap();

    let relative: Vec<_> = written
        .iter()
        .map(|path| path.strip_prefix(&root).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        [
            Path::new("internal/models/order.go"),
            Path::new("internal/repositories/order_repository.go"),
            Path::new("internal/services/order_service.go"),
            Path::new("internal/handlers/order_handler.go"),
        ]
    );

    for path in &written[1..] {
        let content = fs::read_to_string(path).unwrap();
        assert!(
            content.contains("\"example.com/shopapi/internal/models\""),
            "{} does not import the project",
            path.display()
        );
    }
    for path in &written {
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("__project__"));
        assert!(!content.contains("__module__"));
        assert!(!content.contains("__Module__"));
    }
}

#[test]
fn test_invoice_naming_is_consistent() {
    let dir = TempDir::new().unwrap();
    let root = generated_project(dir.path());

    let written =
        generate_module(&Catalog::embedded(), "invoice", &root, &ModuleOptions::default(), |_| {})
            .unwrap();

    for path in &written[1..] {
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("invoice_"), "{name}");
    }

    let model = fs::read_to_string(&written[0]).unwrap();
    assert!(model.contains("type Invoice struct"));
    assert!(model.contains("return \"invoices\""));

    let repository = fs::read_to_string(&written[1]).unwrap();
    assert!(repository.contains("type InvoiceRepository struct"));
    assert!(repository.contains("[]*models.Invoice"));

    let service = fs::read_to_string(&written[2]).unwrap();
    assert!(service.contains("func NewInvoiceService("));
    assert!(service.contains("invoiceRepo *repositories.InvoiceRepository"));

    let handler = fs::read_to_string(&written[3]).unwrap();
    assert!(handler.contains("type InvoiceHandler struct"));
    assert!(handler.contains("rg.GET(\"/invoices/:id\", h.GetInvoice)"));
}

#[test]
fn test_two_modules_coexist() {
    let dir = TempDir::new().unwrap();
    let root = generated_project(dir.path());

    for name in ["order", "invoice"] {
        generate_module(&Catalog::embedded(), name, &root, &ModuleOptions::default(), |_| {})
            .unwrap();
    }

    let order = fs::read_to_string(root.join("internal/handlers/order_handler.go")).unwrap();
    let invoice = fs::read_to_string(root.join("internal/handlers/invoice_handler.go")).unwrap();
    assert!(order.contains("func parseOrderID("));
    assert!(invoice.contains("func parseInvoiceID("));
}

#[test]
fn test_outside_project_is_not_detected() {
    let dir = TempDir::new().unwrap();
    let err = generate_module(
        &Catalog::embedded(),
        "order",
        dir.path(),
        &ModuleOptions::default(),
        |_| {},
    )
    .unwrap_err();

    assert!(matches!(err, GenerationError::ProjectNotDetected { .. }));
    assert!(!dir.path().join("internal").exists());
}

#[test]
fn test_missing_template_directory() {
    let dir = TempDir::new().unwrap();
    let root = generated_project(dir.path());

    let options = ModuleOptions {
        source: TemplateSource::Directory(dir.path().join("no-such-templates")),
        force: false,
    };
    let err = generate_module(&Catalog::embedded(), "order", &root, &options, |_| {}).unwrap_err();

    assert!(matches!(err, GenerationError::TemplatesNotFound { .. }));
    assert!(!root.join("internal/models/order.go").exists());
}

#[test]
fn test_invalid_module_name() {
    let dir = TempDir::new().unwrap();
    let root = generated_project(dir.path());

    for name in ["", "../escape", "9lives"] {
        let options = ModuleOptions::default();
        let err = generate_module(&Catalog::embedded(), name, &root, &options, |_| {})
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput(_)), "{name:?}");
    }
}

#[test]
fn test_rerun_requires_force() {
    let dir = TempDir::new().unwrap();
    let root = generated_project(dir.path());
    let catalog = Catalog::embedded();

    generate_module(&catalog, "order", &root, &ModuleOptions::default(), |_| {}).unwrap();
    fs::write(root.join("internal/models/order.go"), "// edited\n").unwrap();

    let err = generate_module(&catalog, "order", &root, &ModuleOptions::default(), |_| {})
        .unwrap_err();
    assert!(matches!(err, GenerationError::DestinationExists { .. }));
    assert_eq!(
        fs::read_to_string(root.join("internal/models/order.go")).unwrap(),
        "// edited\n"
    );

    let forced = ModuleOptions {
        force: true,
        ..ModuleOptions::default()
    };
    generate_module(&catalog, "order", &root, &forced, |_| {}).unwrap();
    assert!(fs::read_to_string(root.join("internal/models/order.go"))
        .unwrap()
        .contains("type Order struct"));
}
