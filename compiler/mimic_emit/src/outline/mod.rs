//! Readable skeleton rendering of a blueprint.
//!
//! ```text
//! // stand-in for Acme.Widget
//! namespace Acme.Testing
//! {
//!     using Acme;
//!     using System;
//!
//!     public class WidgetStandIn : Acme.Widget
//!     {
//!         // Foo_Int32: hide, fallback unit
//!         public new void Foo(System.Int32 count);
//!     }
//! }
//! ```
//!
//! Every member is preceded by a comment naming its override slot, its
//! strategy and its fallback.

use mimic_blueprint::{Blueprint, BlueprintMember, ImplementationStrategy};
use mimic_ir::{Accessors, GenericConstraints, GenericParam, MemberKind, TypeRef};

use crate::{CodeEmitter, SourceSink};

/// Reference [`CodeEmitter`] producing a C#-flavored outline.
#[derive(Copy, Clone, Debug, Default)]
pub struct OutlineEmitter;

impl CodeEmitter for OutlineEmitter {
    fn emit_blueprint(&self, blueprint: &Blueprint, out: &mut dyn SourceSink) {
        out.line(&format!("// stand-in for {}", blueprint.target_reference().render()));

        let namespaced = !blueprint.generated.namespace.is_empty();
        if namespaced {
            out.line(&format!("namespace {}", blueprint.generated.namespace));
            out.open_block();
        }

        for ns in &blueprint.namespaces {
            out.line(&format!("using {ns};"));
        }
        if !blueprint.namespaces.is_empty() {
            out.blank_line();
        }

        out.line(&class_header(blueprint));
        for param in blueprint.generated_type_params() {
            if let Some(clause) = where_clause(&param, TypeRef::render) {
                out.continuation(&clause);
            }
        }
        out.open_block();
        for member in &blueprint.members {
            out.line(&format!(
                "// {}: {}, fallback {}",
                member.generated_name, member.strategy, member.fallback
            ));
            out.line(&declaration(member));
            out.blank_line();
        }
        out.close_block();

        if namespaced {
            out.close_block();
        }
    }
}

fn class_header(blueprint: &Blueprint) -> String {
    let mut header = format!(
        "{} class {}",
        blueprint.generated.accessibility.as_str(),
        blueprint.generated.name
    );
    if !blueprint.generated.type_params.is_empty() {
        header.push('<');
        header.push_str(&blueprint.generated.type_params.join(", "));
        header.push('>');
    }

    let supertypes: Vec<String> = blueprint
        .base_type()
        .into_iter()
        .chain(blueprint.implemented_interfaces())
        .map(|t| t.render())
        .collect();
    if !supertypes.is_empty() {
        header.push_str(" : ");
        header.push_str(&supertypes.join(", "));
    }
    header
}

/// `where T : class, new()`, or nothing for an unconstrained parameter.
fn where_clause(param: &GenericParam, render: impl Fn(&TypeRef) -> String) -> Option<String> {
    let c = param.constraints;
    let mut parts: Vec<String> = Vec::new();
    if c.contains(GenericConstraints::UNMANAGED) {
        parts.push("unmanaged".into());
    } else if c.contains(GenericConstraints::VALUE_TYPE) {
        parts.push("struct".into());
    } else if c.contains(GenericConstraints::NULLABLE_REFERENCE_TYPE) {
        parts.push("class?".into());
    } else if c.contains(GenericConstraints::REFERENCE_TYPE) {
        parts.push("class".into());
    } else if c.contains(GenericConstraints::NOT_NULL) {
        parts.push("notnull".into());
    }
    parts.extend(param.bounds.iter().map(render));
    if c.contains(GenericConstraints::DEFAULT_CONSTRUCTOR) {
        parts.push("new()".into());
    }
    (!parts.is_empty()).then(|| format!("where {} : {}", param.name, parts.join(", ")))
}

fn declaration(member: &BlueprintMember) -> String {
    let mut decl = String::new();
    match member.strategy {
        ImplementationStrategy::Override => {
            decl.push_str(member.accessibility.as_str());
            decl.push_str(" override ");
        }
        ImplementationStrategy::Hide => {
            decl.push_str(member.accessibility.as_str());
            decl.push_str(" new ");
        }
        ImplementationStrategy::InterfaceOnly => decl.push_str("public "),
        ImplementationStrategy::ExplicitInterface => {}
    }
    if member.kind == MemberKind::Event {
        decl.push_str("event ");
    }
    if member.returns_by_ref {
        decl.push_str("ref ");
    }
    decl.push_str(&member.render_type(&member.return_type));
    decl.push(' ');

    if let Some(iface) = &member.explicit_interface {
        decl.push_str(&member.correspondence.substitute_named(iface).render());
        decl.push('.');
    }
    match member.kind {
        MemberKind::Indexer => decl.push_str("this"),
        _ => decl.push_str(&member.original_name),
    }

    match member.kind {
        MemberKind::Method => {
            if !member.type_params.is_empty() {
                let names: Vec<&str> = member.type_params.iter().map(|p| p.name.as_str()).collect();
                decl.push('<');
                decl.push_str(&names.join(", "));
                decl.push('>');
            }
            decl.push('(');
            decl.push_str(&parameter_list(member));
            decl.push_str(");");
            for clause in member
                .type_params
                .iter()
                .filter_map(|p| where_clause(p, |t| member.render_type(t)))
            {
                decl.push(' ');
                decl.push_str(&clause);
            }
        }
        MemberKind::Property | MemberKind::Indexer => {
            if member.kind == MemberKind::Indexer {
                decl.push('[');
                decl.push_str(&parameter_list(member));
                decl.push(']');
            }
            decl.push_str(&accessor_list(member));
        }
        MemberKind::Event => decl.push(';'),
    }
    decl
}

fn parameter_list(member: &BlueprintMember) -> String {
    member
        .parameters
        .iter()
        .map(|p| {
            let mut text = String::new();
            if let Some(keyword) = p.modifier.keyword() {
                text.push_str(keyword);
                text.push(' ');
            }
            text.push_str(&member.render_type(&p.ty));
            text.push(' ');
            text.push_str(&p.name);
            if p.has_default {
                text.push_str(" = default");
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn accessor_list(member: &BlueprintMember) -> String {
    let mut list = String::from(" {");
    for (flag, text) in [
        (Accessors::GET, " get;"),
        (Accessors::SET, " set;"),
        (Accessors::INIT, " init;"),
    ] {
        if member.accessors.contains(flag) {
            list.push_str(text);
        }
    }
    list.push_str(" }");
    list
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
