//! Integration tests for the extraction-to-rendering pipeline

use getset_core::{
    insertion_offset, AccessorKind, Extractor, GenerateOptions, Generator, Selection,
    TemplateRegistry, Visibility,
};

const USER: &str = r"<?php

namespace App\Entity;

class User
{
    /**
     * The primary key.
     *
     * @var int
     */
    private $id;

    /**
     * @var string
     */
    protected $_aName;

    /**
     * @var bool
     */
    private $enabled = false;

    /**
     * @var int|null
     */
    public $parent_id;

    private $tags = [];
}
";

fn options(template: &str) -> GenerateOptions {
    GenerateOptions {
        template: template.to_string(),
        ..GenerateOptions::default()
    }
}

fn insert(source: &str, code: &str) -> String {
    let offset = insertion_offset(source).expect("class has a closing brace");
    format!("{}{}{}", &source[..offset], code, &source[offset..])
}

#[test]
fn test_end_to_end_psr2() {
    let source = "<?php\nclass Counter\n{\n/**\n * @var int\n */\nprivate $count;\n}\n";
    let registry = TemplateRegistry::with_builtins(false);
    let options = options("PSR2");
    let generator = Generator::new(&registry, &options).unwrap();

    let getter = generator
        .generate(source, AccessorKind::Getters, &Selection::All)
        .unwrap();
    assert!(getter.code.contains("public function getCount()\n"));
    assert!(getter.code.contains("return $this->count;"));

    let setter = generator
        .generate(source, AccessorKind::Setters, &Selection::All)
        .unwrap();
    assert!(setter.code.contains("public function setCount(int $count)"));
    assert!(setter.code.contains("@param int $count"));
}

#[test]
fn test_generated_code_is_not_extracted_again() {
    let registry = TemplateRegistry::with_builtins(false);

    for name in registry.names() {
        let options = options(name);
        let generator = Generator::new(&registry, &options).unwrap();
        let out = generator
            .generate(USER, AccessorKind::Both, &Selection::All)
            .unwrap();

        assert!(!out.code.is_empty(), "{name}");
        assert!(
            Extractor::extract(&out.code).is_empty(),
            "{name} output re-matched as members"
        );
    }
}

#[test]
fn test_generation_is_idempotent() {
    let registry = TemplateRegistry::with_builtins(true);

    for name in registry.names() {
        let options = options(name);
        let generator = Generator::new(&registry, &options).unwrap();

        let first = generator
            .generate(USER, AccessorKind::Both, &Selection::All)
            .unwrap();
        let updated = insert(USER, &first.code);

        let second = generator
            .generate(&updated, AccessorKind::Both, &Selection::All)
            .unwrap();
        assert!(second.is_empty(), "{name} generated twice: {:?}", second.emitted);
        assert_eq!(second.existing, first.emitted, "{name}");
    }
}

#[test]
fn test_skip_existing_in_batch() {
    let source = insert(
        USER,
        "\n    public function getId()\n    {\n        return $this->id;\n    }\n",
    );
    let registry = TemplateRegistry::with_builtins(false);
    let options = options("CamelCase");
    let generator = Generator::new(&registry, &options).unwrap();

    let all = generator
        .generate(&source, AccessorKind::Getters, &Selection::All)
        .unwrap();
    assert_eq!(all.existing, vec!["getId"]);
    assert_eq!(all.emitted, vec!["getName", "isEnabled", "getParentId", "getTags"]);

    let single = generator
        .generate(&source, AccessorKind::Getters, &Selection::Named("id".to_string()))
        .unwrap();
    assert!(single.is_empty());
    assert_eq!(single.selected, 1);
}

#[test]
fn test_member_facts() {
    let registry = TemplateRegistry::with_builtins(false);
    let options = options("CamelCase");
    let generator = Generator::new(&registry, &options).unwrap();
    let members = generator.members(&Extractor::extract(USER));

    let names: Vec<_> = members.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["id", "_aName", "enabled", "parent_id", "tags"]);

    assert_eq!(members[0].description(), "The primary key");
    assert_eq!(members[1].normalized_name(), "Name");
    assert_eq!(members[1].param(), "aName");
    assert_eq!(members[2].getter_function_name(), "isEnabled");
    assert_eq!(members[3].type_hint(), "");
    assert_eq!(members[3].normalized_name(), "ParentId");
    assert_eq!(members[4].declared_type(), "mixed");
    assert_eq!(members[4].description(), "value of tags");
}

#[test]
fn test_ignore_visibility() {
    let registry = TemplateRegistry::with_builtins(false);
    let options = GenerateOptions {
        template: "CamelCase".to_string(),
        ignore_visibility: true,
        ..GenerateOptions::default()
    };
    let generator = Generator::new(&registry, &options).unwrap();
    let members = generator.members(&Extractor::extract(USER));

    assert!(members.iter().all(|m| m.visibility() == Visibility::Public));
    assert!(members.iter().all(|m| m.visibility_prefix().is_empty()));

    let out = generator
        .generate(USER, AccessorKind::Setters, &Selection::All)
        .unwrap();
    assert!(!out.code.contains("private function"));
    assert!(out.code.contains("public function setId(int $id)"));
}

#[test]
fn test_snake_case_output() {
    let registry = TemplateRegistry::with_builtins(false);
    let options = options("SnakeCaseFluent");
    let generator = Generator::new(&registry, &options).unwrap();
    let out = generator
        .generate(USER, AccessorKind::Both, &Selection::Named("parent_id".to_string()))
        .unwrap();

    assert_eq!(out.emitted, vec!["get_parent_id", "set_parent_id"]);
    assert!(out.code.contains("public function set_parent_id($parent_id)"));
    assert!(out.code.contains("@param int|null $parent_id the parent_id"));
    assert!(out.code.contains("return $this;"));
}

#[test]
fn test_type_hint_ignore_list() {
    let registry = TemplateRegistry::with_builtins(false);
    let options = GenerateOptions {
        template: "PSR2".to_string(),
        type_hint_ignore: vec!["int".to_string()],
        ..GenerateOptions::default()
    };
    let generator = Generator::new(&registry, &options).unwrap();
    let out = generator
        .generate(USER, AccessorKind::Setters, &Selection::Named("id".to_string()))
        .unwrap();
    assert!(out.code.contains("public function setId($id)"));
}
