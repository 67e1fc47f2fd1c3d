//! Accessor synthesis

use crate::imports::ImportSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use veneer_analyzer::{missing_members, wrapped_entity, Conventions};
use veneer_syntax::ClassDecl;
use veneer_types::TypeResolver;

/// One synthesized delegating accessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMember {
    /// Accessor name, identical to the entity member it mirrors
    pub name: String,
    /// Display type after namespace resolution, e.g. `ICollection<string>`
    pub display_type: String,
}

impl GeneratedMember {
    /// Render the accessor declaration.
    ///
    /// The read path delegates to the wrapped field; the write path
    /// assigns through it and calls the notification hook:
    ///
    /// ```text
    /// public string Name { get => Entity.Name; set { Entity.Name = value; RaisePropertyChanged(); } }
    /// ```
    pub fn render(&self, conventions: &Conventions) -> String {
        format!(
            "public {ty} {name} {{ get => {field}.{name}; set {{ {field}.{name} = value; {hook}(); }} }}",
            ty = self.display_type,
            name = self.name,
            field = conventions.wrapped_field,
            hook = conventions.notify_hook,
        )
    }
}

/// The result of one synthesis invocation: accessor declarations in entity
/// order plus the namespaces the file must additionally import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthOutput {
    /// Generated accessors, in entity declaration order
    pub members: Vec<GeneratedMember>,
    /// Namespaces to merge into the file's import list, deduplicated,
    /// in first-needed order
    pub imports: Vec<String>,
}

impl SynthOutput {
    /// Whether this invocation produced nothing to insert
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.imports.is_empty()
    }

    /// Render all accessors as a block insertable immediately after the
    /// anchor constructor, one indented declaration per line.
    pub fn render_block(&self, conventions: &Conventions) -> String {
        let mut block = String::new();
        for member in &self.members {
            block.push_str("        ");
            block.push_str(&member.render(conventions));
            block.push('\n');
        }
        block
    }
}

/// Synthesize the delegating accessors a wrapper is missing.
///
/// Re-derives everything from the current snapshot: the wrapper shape, the
/// wrapped entity, and the missing-member set. For each missing member the
/// display type is resolved against `visible`: a namespace not yet
/// covered is recorded as an import addition (once per distinct namespace)
/// and the short name is used either way.
///
/// Returns `None` when the class no longer matches the wrapper convention
/// or the parameter does not resolve; no partial output is ever produced.
pub fn synthesize(
    class: &ClassDecl,
    visible: &ImportSet,
    host: &dyn TypeResolver,
    conventions: &Conventions,
) -> Option<SynthOutput> {
    let entity = wrapped_entity(class, host, conventions)?;

    let declared: FxHashSet<&str> = class.declared_names().collect();
    let missing = missing_members(entity, &declared);

    let mut imports = visible.clone();
    let members = missing
        .iter()
        .map(|member| {
            if let Some(namespace) = &member.ty.namespace {
                imports.require(namespace);
            }
            GeneratedMember {
                name: member.name.clone(),
                display_type: member.ty.short().to_string(),
            }
        })
        .collect();

    Some(SynthOutput {
        members,
        imports: imports.into_additions(),
    })
}
