//! End-to-end checks of the google style against whole source files.

use defstyle_core::{definitions, Checker, Code, Config, SourceFile, Style};

fn check(source: &str) -> Vec<defstyle_core::Diagnostic> {
    Checker::new(&Config::default())
        .check(source)
        .expect("source should parse")
}

fn codes(source: &str) -> Vec<Code> {
    check(source).into_iter().map(|d| d.code).collect()
}

#[test]
fn compact_definition_passes() {
    assert!(codes("def foo(a, b):\n    pass\n").is_empty());
}

#[test]
fn google_wrapped_arguments_pass() {
    let source = "\
def foo(bar1, bar2, bar3, bar4,
        bar5, bar6, bar7, bar8,
        bar9):
    pass
";
    assert!(codes(source).is_empty());
}

#[test]
fn argument_opening_on_next_line_fails() {
    let source = "def foo(\n    a, b):\n    pass\n";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, Code::Fd101);
    assert_eq!(diagnostics[0].line, 2);
}

#[test]
fn hanging_close_fails() {
    let source = "def foo(a, b\n        ):\n    pass\n";
    assert_eq!(codes(source), [Code::Fd102]);
}

#[test]
fn split_def_keyword_fails() {
    let source = "def \\\n    foo(a, b):\n    pass\n";
    assert_eq!(codes(source), [Code::Fd103]);
}

#[test]
fn noqa_silences_a_violating_definition() {
    let source = "def foo(a, b  # noqa\n        ):\n    pass\n";
    assert!(codes(source).is_empty());
}

#[test]
fn rules_are_independent_within_one_definition() {
    // All three rules can fire for a single definition, in pass order.
    let source = "\
def \\
    foo(
        a, b
        ):
    pass
";
    assert_eq!(codes(source), [Code::Fd103, Code::Fd101, Code::Fd102]);
}

#[test]
fn repeated_runs_are_identical() {
    let source = "def foo(\n    a):\n    pass\n\ndef bar(b\n        ):\n    pass\n";
    assert_eq!(check(source), check(source));
}

#[test]
fn diagnostics_come_in_document_order() {
    let source = "\
def one(
    a):
    pass


class Holder:
    def two(self, b
            ):
        pass
";
    let diagnostics = check(source);
    let codes: Vec<Code> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, [Code::Fd101, Code::Fd102]);
    assert!(diagnostics[0].line < diagnostics[1].line);
}

#[test]
fn extent_of_adjacent_definitions() {
    // A definition followed by a top-level node at line N extends to N - 1;
    // the last definition extends to the end of the file.
    let source = "def foo(a):\n    pass\n\ndef bar(b):\n    pass\n";
    let file = SourceFile::parse(source).unwrap();
    let defs = definitions(file.tree(), file.source(), file.line_count());
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].end_line, 3);
    assert_eq!(defs[1].end_line, 5);
}

#[test]
fn clean_real_world_module_passes() {
    let source = "\
\"\"\"Utility helpers.\"\"\"
import os


def read_config(path, defaults=None):
    if defaults is None:
        defaults = {}
    return defaults


class Loader:
    def __init__(self, root, cache_size=128,
                 strict=True):
        self.root = root

    async def load(self, name):
        return os.path.join(self.root, name)
";
    assert!(codes(source).is_empty());
}

#[test]
fn explicit_style_selection_matches_default() {
    let source = "def foo(\n    a):\n    pass\n";
    let by_config = Checker::new(&Config::default()).check(source).unwrap();
    let by_style = Checker::with_style(Style::Google).check(source).unwrap();
    assert_eq!(by_config, by_style);
}
