//! Structural fix application
//!
//! Merges a synthesis result back into a compilation unit: generated
//! accessors land immediately after the anchor constructor, new imports
//! land at the end of the using list. Used by hosts that edit structure
//! rather than text, and by the round-trip tests that verify a fix
//! leaves nothing further to detect.

use crate::synth::SynthOutput;
use veneer_syntax::{
    ClassMember, CompilationUnit, Identifier, PropertyDecl, Span, UsingDirective,
};

/// Apply a synthesis result to `unit`.
///
/// The named class gains one property declaration per generated member,
/// inserted after its first constructor in output order; each import not
/// already present is appended to the using list. Synthesized nodes carry
/// empty spans anchored at their insertion point.
///
/// If the class or its constructor cannot be found the unit comes back
/// unchanged; a fix never half-applies.
pub fn apply(unit: &CompilationUnit, class_name: &str, output: &SynthOutput) -> CompilationUnit {
    let mut unit = unit.clone();

    let Some(class_index) = unit
        .classes
        .iter()
        .position(|class| class.name.name == class_name)
    else {
        return unit;
    };
    let class = &mut unit.classes[class_index];

    let Some(ctor_index) = class
        .members
        .iter()
        .position(|member| matches!(member, ClassMember::Constructor(_)))
    else {
        return unit;
    };

    let insertion = Span::at_end_of(class.members[ctor_index].span());
    let properties = output.members.iter().map(|member| {
        ClassMember::Property(PropertyDecl {
            name: Identifier::new(member.name.clone(), insertion),
            ty: member.display_type.clone(),
            span: insertion,
        })
    });
    // splice keeps entity order and leaves everything after the ctor intact
    class.members.splice(ctor_index + 1..ctor_index + 1, properties);

    let using_anchor = unit
        .usings
        .last()
        .map(|using| Span::at_end_of(&using.span))
        .unwrap_or_else(|| Span::new(0, 0, 1, 1));
    for namespace in &output.imports {
        if !unit.has_using(namespace) {
            unit.usings.push(UsingDirective::new(namespace.clone(), using_anchor));
        }
    }

    unit
}
