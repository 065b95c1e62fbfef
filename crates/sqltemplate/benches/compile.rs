use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqltemplate::{Arg, Compiler, MysqlEscaper, Template, skip};

/// SELECT ?#, ... FROM t WHERE 1=1 {AND c0 = ?} {AND c1 = ?d} ...
fn build_template(n: usize) -> (String, Vec<Arg>) {
    let cols: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut sql = String::from("SELECT ?# FROM t WHERE 1=1");
    let mut args = vec![Arg::from(cols)];
    for i in 0..n {
        if i % 2 == 0 {
            sql.push_str(&format!(" {{AND col{i} = ?}}"));
            args.push(Arg::from(format!("value'{i}")));
        } else {
            sql.push_str(&format!(" {{AND col{i} = ?d}}"));
            args.push(if i % 3 == 0 { skip() } else { Arg::from(i as i64) });
        }
    }
    (sql, args)
}

fn bench_compile(c: &mut Criterion) {
    let compiler = Compiler::new(MysqlEscaper);
    let mut group = c.benchmark_group("compile/from_str");

    for n in [1, 5, 10, 50, 100] {
        let (sql, args) = build_template(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(sql, args), |b, (sql, args)| {
            b.iter(|| black_box(compiler.compile(sql, args).unwrap()));
        });
    }

    group.finish();
}

fn bench_compile_parsed(c: &mut Criterion) {
    let compiler = Compiler::new(MysqlEscaper);
    let mut group = c.benchmark_group("compile/parsed");

    for n in [1, 5, 10, 50, 100] {
        let (sql, args) = build_template(n);
        let template = Template::parse(sql);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(template, args),
            |b, (template, args)| {
                b.iter(|| black_box(compiler.compile_template(template, args).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compile, bench_compile_parsed);
criterion_main!(benches);
