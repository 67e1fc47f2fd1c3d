//! Fix closure: applying a synthesis result leaves nothing to detect

use veneer_analyzer::{analyze_unit, detect, Conventions};
use veneer_synth::{apply, synthesize, ImportSet};
use veneer_syntax::{
    BaseTypeRef, ClassDecl, ClassMember, CompilationUnit, ConstructorDecl, Identifier, Parameter,
    Span, UsingDirective,
};
use veneer_types::{EntityMember, EntityType, Resolution, TypeRef, TypeResolver};

struct FixtureHost {
    entities: Vec<EntityType>,
}

impl TypeResolver for FixtureHost {
    fn resolve(&self, param: &Parameter) -> Resolution<'_> {
        match self.entities.iter().find(|entity| entity.name == param.ty) {
            Some(entity) => Resolution::Resolved(entity),
            None => Resolution::Unresolved,
        }
    }
}

fn span() -> Span {
    Span::new(0, 0, 1, 1)
}

fn image_entity() -> EntityType {
    EntityType {
        name: "ImageEntity".to_string(),
        namespace: Some("App.Data".to_string()),
        base: Some(TypeRef::new("AEntity")),
        members: vec![
            EntityMember::property("Id", TypeRef::new("int")),
            EntityMember::property("Name", TypeRef::new("string")),
            EntityMember::property(
                "Tags",
                TypeRef::in_namespace("ICollection<string>", "System.Collections.Generic"),
            ),
        ],
    }
}

fn unit() -> CompilationUnit {
    CompilationUnit {
        usings: vec![UsingDirective::new("System", span())],
        classes: vec![ClassDecl {
            name: Identifier::new("ImageModel", span()),
            bases: vec![BaseTypeRef::new("AModel<ImageEntity>", span())],
            members: vec![ClassMember::Constructor(ConstructorDecl {
                name: Identifier::new("ImageModel", span()),
                params: vec![Parameter {
                    name: Identifier::new("entity", span()),
                    ty: "ImageEntity".to_string(),
                    span: span(),
                }],
                span: Span::new(60, 120, 5, 5),
            })],
            span: span(),
        }],
        span: span(),
    }
}

#[test]
fn test_fix_reaches_closure() {
    let host = FixtureHost {
        entities: vec![image_entity()],
    };
    let conventions = Conventions::default();
    let original = unit();

    let findings = analyze_unit(&original, &host, &conventions);
    assert_eq!(findings.len(), 1, "expected the wrapper to be flagged");

    let class = original.class("ImageModel").unwrap();
    let output = synthesize(class, &ImportSet::from_unit(&original), &host, &conventions)
        .expect("flagged wrapper should synthesize");
    assert_eq!(output.members.len(), 3);
    assert_eq!(output.imports, ["System.Collections.Generic"]);

    let fixed = apply(&original, "ImageModel", &output);

    assert!(
        analyze_unit(&fixed, &host, &conventions).is_empty(),
        "applying the fix must leave nothing to detect"
    );
}

#[test]
fn test_rerunning_synthesis_after_fix_adds_nothing() {
    let host = FixtureHost {
        entities: vec![image_entity()],
    };
    let conventions = Conventions::default();

    let original = unit();
    let class = original.class("ImageModel").unwrap();
    let output =
        synthesize(class, &ImportSet::from_unit(&original), &host, &conventions).unwrap();
    let fixed = apply(&original, "ImageModel", &output);

    let class = fixed.class("ImageModel").unwrap();
    let again =
        synthesize(class, &ImportSet::from_unit(&fixed), &host, &conventions).unwrap();
    assert!(again.is_empty(), "second pass generated output: {:?}", again);

    let fixed_again = apply(&fixed, "ImageModel", &again);
    assert_eq!(fixed_again, fixed, "second apply must be the identity");
}

#[test]
fn test_wrapper_with_id_declared_gains_exactly_name() {
    let mut entity = image_entity();
    entity.members.truncate(2); // {Id:int, Name:string}
    let host = FixtureHost {
        entities: vec![entity],
    };
    let conventions = Conventions::default();

    let mut original = unit();
    original.classes[0]
        .members
        .push(ClassMember::Property(veneer_syntax::PropertyDecl {
            name: Identifier::new("Id", span()),
            ty: "int".to_string(),
            span: span(),
        }));

    let class = original.class("ImageModel").unwrap();
    let output =
        synthesize(class, &ImportSet::from_unit(&original), &host, &conventions).unwrap();

    assert_eq!(output.members.len(), 1);
    assert_eq!(output.members[0].name, "Name");
    assert_eq!(
        output.members[0].render(&conventions),
        "public string Name { get => Entity.Name; set { Entity.Name = value; RaisePropertyChanged(); } }"
    );
}

#[test]
fn test_unresolved_parameter_leaves_source_unchanged() {
    let host = FixtureHost { entities: vec![] };
    let conventions = Conventions::default();
    let original = unit();

    let class = original.class("ImageModel").unwrap();
    assert!(
        synthesize(class, &ImportSet::from_unit(&original), &host, &conventions).is_none(),
        "unresolved parameter must abort synthesis"
    );
    assert_eq!(
        detect(class, &host, &conventions),
        None,
        "and detection must stay silent as well"
    );
}

#[test]
fn test_rendered_block_matches_insertion_contract() {
    let host = FixtureHost {
        entities: vec![image_entity()],
    };
    let conventions = Conventions::default();
    let original = unit();

    let class = original.class("ImageModel").unwrap();
    let output =
        synthesize(class, &ImportSet::from_unit(&original), &host, &conventions).unwrap();

    let block = output.render_block(&conventions);
    assert_eq!(
        block,
        concat!(
            "        public int Id { get => Entity.Id; set { Entity.Id = value; RaisePropertyChanged(); } }\n",
            "        public string Name { get => Entity.Name; set { Entity.Name = value; RaisePropertyChanged(); } }\n",
            "        public ICollection<string> Tags { get => Entity.Tags; set { Entity.Tags = value; RaisePropertyChanged(); } }\n",
        )
    );
}
