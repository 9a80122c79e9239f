use criterion::{Criterion, criterion_group, criterion_main};
use nexscan::nexus::{BlockScannerBuilder, Burnin, TreeExtraction};
use std::fmt::Write;

/// (name, number of taxa, number of trees)
const GENERATED_DOCUMENTS: &[(&str, usize, usize)] = &[
    ("n20-1k", 20, 1_000),
    ("n129-1k", 129, 1_000),
    ("n50-10k", 50, 10_000),
];

/// Builds a document with taxa block, translate table and caterpillar trees
/// carrying MrBayes-style annotations.
fn generate_document(num_taxa: usize, num_trees: usize) -> String {
    let mut doc = String::from("#NEXUS\nbegin taxa;\n\tdimensions ntax=");
    writeln!(doc, "{num_taxa};\n\ttaxlabels").unwrap();
    for i in 1..=num_taxa {
        writeln!(doc, "\t\ttaxon_{i}").unwrap();
    }
    doc.push_str("\t\t;\nend;\nbegin trees;\n\ttranslate\n");
    for i in 1..=num_taxa {
        writeln!(doc, "\t\t{i} taxon_{i},").unwrap();
    }
    doc.push_str("\t\t;\n");

    for t in 0..num_trees {
        let mut newick = String::from("1:0.1");
        for i in 2..=num_taxa {
            newick = format!("({newick},{i}:0.{t}[&B TK02Brlens 0.{i}])");
        }
        writeln!(doc, "\ttree gen.{t} = [&U] {newick};").unwrap();
    }
    doc.push_str("end;\n");
    doc
}

fn scanning(c: &mut Criterion) {
    for (name, num_taxa, num_trees) in GENERATED_DOCUMENTS {
        let document = generate_document(*num_taxa, *num_trees);
        let scanner = BlockScannerBuilder::new().build().unwrap();
        c.bench_function(name, |b| {
            b.iter(|| scanner.scan_str(&document));
        });
    }
}

fn scanning_configured(c: &mut Criterion) {
    let document = generate_document(50, 10_000);
    let scanner = BlockScannerBuilder::new()
        .with_tree_extraction(TreeExtraction::LastField)
        .with_skip_first()
        .with_burnin(Burnin::Percentage(0.1))
        .build()
        .unwrap();
    c.bench_function("n50-10k-last-field-burnin", |b| {
        b.iter(|| scanner.scan_str(&document));
    });
}

criterion_group!(regression, scanning);
criterion_group! {
    name = configured;
    config = Criterion::default().sample_size(10);
    targets = scanning_configured
}
criterion_main!(regression, configured);
