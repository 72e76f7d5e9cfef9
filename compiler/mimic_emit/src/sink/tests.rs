use super::*;
use pretty_assertions::assert_eq;

#[test]
fn blocks_set_the_indentation() {
    let mut out = SourceBuffer::default();
    out.line("namespace Acme.Testing");
    out.open_block();
    out.line("public class WidgetStandIn");
    out.continuation("where T : new()");
    out.open_block();
    out.line("public new void Spin();");
    out.close_block();
    out.close_block();
    assert_eq!(
        out.finish(),
        "namespace Acme.Testing\n\
         {\n\
         \x20   public class WidgetStandIn\n\
         \x20       where T : new()\n\
         \x20   {\n\
         \x20       public new void Spin();\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn blank_lines_only_separate() {
    let mut out = SourceBuffer::default();
    out.blank_line();
    out.line("// Spin: hide, fallback unit");
    out.blank_line();
    out.blank_line();
    out.line("// Label: hide, fallback fail-fast");
    out.blank_line();
    assert_eq!(
        out.finish(),
        "// Spin: hide, fallback unit\n\n// Label: hide, fallback fail-fast\n"
    );
}

#[test]
fn blank_lines_never_touch_braces() {
    let mut out = SourceBuffer::default();
    out.line("class WidgetStandIn");
    out.open_block();
    out.blank_line();
    out.line("void Spin();");
    out.blank_line();
    out.close_block();
    assert_eq!(out.finish(), "class WidgetStandIn\n{\n    void Spin();\n}\n");
}

#[test]
fn unbalanced_close_stays_at_column_zero() {
    let mut out = SourceBuffer::with_capacity(16);
    out.close_block();
    out.line("x ");
    assert_eq!(out.finish(), "}\nx\n");
}

#[test]
fn empty_buffer_finishes_empty() {
    assert_eq!(SourceBuffer::default().finish(), "");
}
