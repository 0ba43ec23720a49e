use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dual_framework::{
    Candidate, DynParserFormatter, Formatter, Literal, Parser, SkipNone, SkipWhitespace,
};

// A long run of the same keyword, separated by spaces.
fn generate_input(count: usize) -> String {
    let mut input = String::with_capacity(count * 7);
    for _ in 0..count {
        input.push_str("select ");
    }
    input
}

fn parse_all<P: Parser<Output = ()>>(parser: &P, input: &str) -> usize {
    let mut position = 0;
    let mut matched = 0;
    while let Ok(((), next)) = parser.parse(input, position, input.len(), &SkipWhitespace) {
        if next == position {
            break;
        }
        position = next;
        matched += 1;
    }
    matched
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("forwarding_parse");

    let size = 10_000;
    let input = generate_input(size);
    let direct = parser_framework::Literal::new("select");
    let literal = Literal::new("select");
    let erased = DynParserFormatter::<(), ()>::from_candidates(
        Candidate::parser(parser_framework::Literal::new("select")),
        Candidate::formatter(formatter_framework::Literal::new("select")),
    )
    .expect("literal halves satisfy both contracts");

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("direct", |b| {
        b.iter(|| parse_all(black_box(&direct), black_box(&input)))
    });
    group.bench_function("literal_adapter", |b| {
        b.iter(|| parse_all(black_box(&literal), black_box(&input)))
    });
    group.bench_function("erased_adapter", |b| {
        b.iter(|| parse_all(black_box(&erased), black_box(&input)))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("forwarding_format");

    let direct = formatter_framework::Literal::new("select");
    let literal = Literal::new("select");

    group.bench_function("direct", |b| b.iter(|| black_box(&direct).format(&())));
    group.bench_function("literal_adapter", |b| {
        b.iter(|| black_box(&literal).format(&()))
    });
    group.bench_function("round_trip", |b| {
        b.iter(|| {
            let (value, _) = literal
                .parse(black_box("select"), 0, 6, &SkipNone)
                .expect("input is the literal");
            literal.format(&value)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
