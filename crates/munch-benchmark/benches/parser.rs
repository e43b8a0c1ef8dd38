use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use munch::demo;
use munch_parse::Parser;

static FILES: [(&str, &str); 2] = [
    (
        "Simple",
        r#"
        func foo() {
            42;
        }
        "#,
    ),
    (
        "Medium",
        r#"
        func foo(a, b);

        func bar(a, b) {
            x = a * (b + 1) - a / 2;
            { y = foo(x, "text"); }
            z = x = y;
        }

        func baz() {
            bar(1, 2 * 3);
        }
        "#,
    ),
];

fn benchmark_parser(c: &mut Criterion) {
    let lexer = demo::lexer();
    let language = demo::language();
    let parser = Parser::new(&language.grammar);

    let mut group = c.benchmark_group("Parser Benchmark");

    for (name, text) in FILES {
        let tokens = lexer.tokenize(text).expect("demo lexer accepts any input");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_code", name), &tokens, |b, tokens| {
            b.iter(|| {
                let parse = parser.parse(language.page, tokens);
                black_box(parse);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
