/// Benchmarks for the Tree Surgeon analysis core.
///
/// Run with: `cargo bench`
///
/// Covers the two hot paths a transformation hits per query:
/// - Snapshot construction over trees of various widths
/// - Structural equivalence and collision analysis on those trees

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tree_surgeon::builders::*;
use tree_surgeon::{conflicting_names, equivalent, KindRegistry, Node, Snapshot};

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Data Generators
// ═══════════════════════════════════════════════════════════════════════════

/// A program with `functions` top-level functions, each declaring and using
/// a handful of locals plus one nested helper.
fn synthetic_program(functions: usize) -> Node {
    let mut body = Vec::new();
    for i in 0..functions {
        let local = format!("local_{}", i);
        body.push(function_declaration(
            &format!("outer_{}", i),
            vec![identifier("input")],
            block(vec![
                variable_declaration(
                    "let",
                    vec![declarator(identifier(&local), Some(number(i as f64)))],
                ),
                function_declaration(
                    &format!("helper_{}", i),
                    vec![],
                    block(vec![expression_statement(call(
                        identifier("log"),
                        vec![string("inner")],
                    ))]),
                ),
                expression_statement(call(
                    member(identifier("console"), identifier("log")),
                    vec![identifier(&local), identifier("input")],
                )),
            ]),
        ));
    }
    program(body)
}

fn bench_snapshot_build(c: &mut Criterion) {
    let registry = KindRegistry::new(tree_surgeon::infrastructure::estree::vocabulary());
    let mut group = c.benchmark_group("snapshot_build");
    for size in [10, 100, 500] {
        let tree = synthetic_program(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| Snapshot::build(black_box(tree), &registry).unwrap().len());
        });
    }
    group.finish();
}

fn bench_equivalence(c: &mut Criterion) {
    let a = synthetic_program(100);
    let b = a.clone();
    c.bench_function("equivalent_100_functions", |bench| {
        bench.iter(|| equivalent(black_box(&a), black_box(&b)));
    });
}

fn bench_conflicting_names(c: &mut Criterion) {
    let registry = KindRegistry::new(tree_surgeon::infrastructure::estree::vocabulary());
    let tree = synthetic_program(100);
    let snap = Snapshot::build(&tree, &registry).unwrap();
    let start = snap.find("Identifier")[0];
    c.bench_function("conflicting_names_100_functions", |bench| {
        bench.iter(|| conflicting_names(black_box(start)).unwrap().len());
    });
}

criterion_group!(
    benches,
    bench_snapshot_build,
    bench_equivalence,
    bench_conflicting_names
);
criterion_main!(benches);
