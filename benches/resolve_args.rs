use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chic_invocation::{CompilerInvocation, DiagnosticSink, OptionFlags, OptionTable};

fn large_command_line() -> Vec<String> {
    let mut args = vec![
        "-target".to_string(),
        "x86_64-unknown-linux-gnu".to_string(),
        "-module-name".to_string(),
        "Bench".to_string(),
        "-parse-as-library".to_string(),
    ];
    for index in 0..500 {
        args.push("-I".to_string());
        args.push(format!("include/{index}"));
        args.push(format!("-lmod{index}"));
        args.push("-Xcc".to_string());
        args.push(format!("-DVALUE_{index}=1"));
        args.push(format!("src/file_{index}.chic"));
    }
    args
}

fn bench_resolve(c: &mut Criterion) {
    let args = large_command_line();
    let table = OptionTable::chic();

    c.bench_function("match_args", |b| {
        b.iter(|| {
            let matched = table.match_args(black_box(args.as_slice()), OptionFlags::FRONTEND);
            black_box(matched);
        });
    });

    c.bench_function("resolve_invocation", |b| {
        b.iter(|| {
            let mut diags = DiagnosticSink::default();
            let invocation = CompilerInvocation::resolve(black_box(args.as_slice()), "x86_64-unknown-linux-gnu", &mut diags)
                .expect("benchmark arguments resolve");
            black_box(invocation);
        });
    });
}

criterion_group!(resolve_args, bench_resolve);
criterion_main!(resolve_args);
