//! Textual forms of a `TypeRef`.
//!
//! Four renderings exist, each with a single consumer:
//! - `render`: fully qualified, for emitters and diagnostics
//! - `render_short`: namespace-stripped, for outlines and interface prefixes
//! - `identity_token`: nullability-erased, method parameters positional, for
//!   signature identity keys
//! - `normalized_name`: identifier-safe, for overload disambiguation suffixes

use std::fmt::Write;

use super::{ParamOwner, TypeRef};

#[derive(Copy, Clone)]
struct Style {
    qualified: bool,
    nullability: bool,
    positional_method_params: bool,
}

impl Style {
    const FULL: Style = Style {
        qualified: true,
        nullability: true,
        positional_method_params: false,
    };
    const SHORT: Style = Style {
        qualified: false,
        nullability: true,
        positional_method_params: false,
    };
    const IDENTITY: Style = Style {
        qualified: true,
        nullability: false,
        positional_method_params: true,
    };
}

impl TypeRef {
    /// Fully qualified rendering, e.g. `System.Collections.Generic.List<T>?`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_type(&mut out, self, Style::FULL);
        out
    }

    /// Namespace-stripped rendering, e.g. `List<T>?`.
    pub fn render_short(&self) -> String {
        let mut out = String::new();
        write_type(&mut out, self, Style::SHORT);
        out
    }

    /// Rendering used inside signature identity keys.
    ///
    /// Nullable annotations are dropped and method-level parameters are
    /// written by position (`!!0`), so `Foo<T>(T)` and `Foo<U>(U)` agree.
    pub fn identity_token(&self) -> String {
        let mut out = String::new();
        write_type(&mut out, self, Style::IDENTITY);
        out
    }

    /// Identifier-safe name used in disambiguation suffixes.
    ///
    /// `int` → `Int32`, `List<string>` → `ListOfString`,
    /// `Dictionary<string, int>` → `DictionaryOfStringAndInt32`,
    /// `byte[]` → `ByteArray`, `T` → `T`.
    pub fn normalized_name(&self) -> String {
        match self {
            TypeRef::Void => "Void".to_string(),
            TypeRef::Named(n) => {
                let mut out = sanitize_identifier(&n.key.name);
                if !n.args.is_empty() {
                    out.push_str("Of");
                    let args: Vec<String> = n.args.iter().map(TypeRef::normalized_name).collect();
                    out.push_str(&args.join("And"));
                }
                out
            }
            TypeRef::Param(p) => sanitize_identifier(&p.name),
            TypeRef::Array(a) => {
                let mut out = a.element.normalized_name();
                if a.rank <= 1 {
                    out.push_str("Array");
                } else {
                    let _ = write!(out, "Array{}D", a.rank);
                }
                out
            }
        }
    }
}

fn write_type(out: &mut String, ty: &TypeRef, style: Style) {
    match ty {
        TypeRef::Void => out.push_str("void"),
        TypeRef::Named(n) => {
            if style.qualified && !n.key.namespace.is_empty() {
                out.push_str(&n.key.namespace);
                out.push('.');
            }
            out.push_str(&n.key.name);
            if !n.args.is_empty() {
                out.push('<');
                for (i, arg) in n.args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_type(out, arg, style);
                }
                out.push('>');
            }
            if style.nullability && n.nullable && !n.is_value_type {
                out.push('?');
            }
        }
        TypeRef::Param(p) => {
            if style.positional_method_params && p.owner == ParamOwner::Method {
                let _ = write!(out, "!!{}", p.position);
            } else {
                out.push_str(&p.name);
            }
            if style.nullability && p.nullable {
                out.push('?');
            }
        }
        TypeRef::Array(a) => {
            write_type(out, &a.element, style);
            out.push('[');
            for _ in 1..a.rank {
                out.push(',');
            }
            out.push(']');
            if style.nullability && a.nullable {
                out.push('?');
            }
        }
    }
}

/// Keep identifier characters only; a leading digit gets an underscore.
pub fn sanitize_identifier(name: &str) -> String {
    let mut out: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
