//! End-to-end pipeline tests: plan, render, materialize.

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use beangen_codegen::{
    GenerateError, Generator, MiniJinjaEngine, RenderContext, TemplateEngine, TemplateError,
};
use beangen_core::{ColumnDescriptor, GenerationConfig, TableDescriptor};
use tempfile::TempDir;

fn column(name: &str, source_type: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        source_type: source_type.to_string(),
    }
}

fn order_items() -> TableDescriptor {
    TableDescriptor {
        name: "order_items".to_string(),
        columns: vec![
            column("id", "INTEGER"),
            column("order_id", "INTEGER"),
            column("unit_price", "java.math.BigDecimal"),
        ],
    }
}

fn config() -> GenerationConfig {
    GenerationConfig {
        bean_package: "com.example.model".to_string(),
        sql_map_package: "com.example.sqlmap".to_string(),
        sql_map_suffix: ".xml".to_string(),
        bean_template:
            "package ${package}; class ${name} {{% for field in fieldList %} ${field.type} ${field.name};{% endfor %} }"
                .to_string(),
        sql_map_template: "<sqlMap namespace=\"${className}\" type=\"${FQCN}\"/>".to_string(),
    }
}

fn generator() -> Generator<MiniJinjaEngine> {
    Generator::new(MiniJinjaEngine::new().unwrap())
}

fn create_package_dirs(root: &Path) {
    fs::create_dir_all(root.join("com/example/model")).unwrap();
    fs::create_dir_all(root.join("com/example/sqlmap")).unwrap();
}

/// Engine wrapper that counts render calls, for verifying skipped stages.
struct CountingEngine<E> {
    inner: E,
    calls: Rc<Cell<usize>>,
}

impl<E: TemplateEngine> TemplateEngine for CountingEngine<E> {
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &RenderContext,
    ) -> Result<String, TemplateError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.render(name, template, context)
    }
}

#[test]
fn test_generates_bean_and_sql_map() {
    let temp = TempDir::new().unwrap();
    create_package_dirs(temp.path());

    let result = generator()
        .generate(&order_items(), &config(), temp.path())
        .unwrap();

    assert_eq!(result.class_name, "OrderItem");
    assert!(result.bean.created);
    assert_eq!(
        result.bean.path,
        temp.path().join("com/example/model/OrderItem.java")
    );

    let sql_map = result.sql_map.as_ref().unwrap();
    assert!(sql_map.created);
    assert_eq!(
        sql_map.path,
        temp.path().join("com/example/sqlmap/OrderItem.xml")
    );

    let bean = fs::read_to_string(&result.bean.path).unwrap();
    assert_eq!(
        bean,
        "package com.example.model; class OrderItem { INTEGER id; INTEGER orderId; BigDecimal unitPrice; }"
    );

    let map = fs::read_to_string(&sql_map.path).unwrap();
    assert_eq!(
        map,
        "<sqlMap namespace=\"OrderItem\" type=\"com.example.model.OrderItem\"/>"
    );
}

#[test]
fn test_second_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    create_package_dirs(temp.path());

    let generator = generator();
    let first = generator
        .generate(&order_items(), &config(), temp.path())
        .unwrap();
    let bean_before = fs::read_to_string(&first.bean.path).unwrap();
    let map_before = fs::read_to_string(&first.sql_map.as_ref().unwrap().path).unwrap();

    let second = generator
        .generate(&order_items(), &config(), temp.path())
        .unwrap();

    assert!(!second.bean.created);
    assert!(second.sql_map.is_none());
    assert_eq!(fs::read_to_string(&first.bean.path).unwrap(), bean_before);
    assert_eq!(
        fs::read_to_string(&first.sql_map.as_ref().unwrap().path).unwrap(),
        map_before
    );
}

#[test]
fn test_existing_bean_skips_sql_map_stage() {
    let temp = TempDir::new().unwrap();
    create_package_dirs(temp.path());

    // Simulate a hand-edited bean from an earlier run.
    let bean_path = temp.path().join("com/example/model/OrderItem.java");
    fs::write(&bean_path, "hand edited").unwrap();

    let calls = Rc::new(Cell::new(0));
    let generator = Generator::new(CountingEngine {
        inner: MiniJinjaEngine::new().unwrap(),
        calls: Rc::clone(&calls),
    });

    let result = generator
        .generate(&order_items(), &config(), temp.path())
        .unwrap();

    assert!(!result.bean.created);
    assert!(result.sql_map.is_none());
    // Nothing was rendered: the pre-existing bean gates the whole unit,
    // including the SQL map stage.
    assert_eq!(calls.get(), 0);
    assert_eq!(fs::read_to_string(&bean_path).unwrap(), "hand edited");
    assert!(!temp.path().join("com/example/sqlmap/OrderItem.xml").exists());
}

#[test]
fn test_unresolvable_placeholder_is_a_template_error() {
    let temp = TempDir::new().unwrap();
    create_package_dirs(temp.path());

    let mut config = config();
    config.bean_template = "class ${nonexistent} {}".to_string();

    let err = generator()
        .generate(&order_items(), &config, temp.path())
        .unwrap_err();

    assert!(matches!(err, GenerateError::Template(_)));
    assert!(!temp.path().join("com/example/model/OrderItem.java").exists());
    assert!(!temp.path().join("com/example/sqlmap/OrderItem.xml").exists());
}

#[test]
fn test_broken_sql_map_template_keeps_bean() {
    let temp = TempDir::new().unwrap();
    create_package_dirs(temp.path());

    let mut config = config();
    config.sql_map_template = "{% for x in nonexistent %}${x}{% endfor %}".to_string();

    let err = generator()
        .generate(&order_items(), &config, temp.path())
        .unwrap_err();

    assert!(matches!(err, GenerateError::Template(_)));
    // The bean stage completed before the failure and is not rolled back.
    assert!(temp.path().join("com/example/model/OrderItem.java").exists());
    assert!(!temp.path().join("com/example/sqlmap/OrderItem.xml").exists());
}

#[test]
fn test_empty_template_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    create_package_dirs(temp.path());

    let mut config = config();
    config.bean_template = String::new();

    let err = generator()
        .generate(&order_items(), &config, temp.path())
        .unwrap_err();

    assert!(matches!(err, GenerateError::Configuration { .. }));
    assert!(!temp.path().join("com/example/model/OrderItem.java").exists());
}

#[test]
fn test_missing_package_directory_is_a_materialization_error() {
    let temp = TempDir::new().unwrap();
    // Package directories are the caller's responsibility; none created here.

    let err = generator()
        .generate(&order_items(), &config(), temp.path())
        .unwrap_err();

    assert!(matches!(err, GenerateError::Materialization { .. }));
}

#[test]
fn test_preview_renders_without_writing() {
    let temp = TempDir::new().unwrap();

    let files = generator().preview(&order_items(), &config()).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, "com/example/model/OrderItem.java");
    assert_eq!(files[1].path, "com/example/sqlmap/OrderItem.xml");
    insta::assert_snapshot!(
        files[0].content,
        @"package com.example.model; class OrderItem { INTEGER id; INTEGER orderId; BigDecimal unitPrice; }"
    );
    insta::assert_snapshot!(
        files[1].content,
        @r#"<sqlMap namespace="OrderItem" type="com.example.model.OrderItem"/>"#
    );

    // Nothing was materialized.
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_template_round_trip_across_column_counts() {
    let cases: &[(&[(&str, &str)], &str)] = &[
        (&[], "package com.example.model; class Empty { }"),
        (
            &[("id", "INTEGER")],
            "package com.example.model; class Single { INTEGER id; }",
        ),
        (
            &[("id", "INTEGER"), ("user_name", "java.lang.String")],
            "package com.example.model; class Pair { INTEGER id; String userName; }",
        ),
    ];

    let generator = generator();
    for (i, (columns, expected)) in cases.iter().enumerate() {
        let table = TableDescriptor {
            name: ["empties", "singles", "pairs"][i].to_string(),
            columns: columns.iter().map(|(n, t)| column(n, t)).collect(),
        };
        let files = generator.preview(&table, &config()).unwrap();
        assert_eq!(&files[0].content, expected, "case {i}");
    }
}
