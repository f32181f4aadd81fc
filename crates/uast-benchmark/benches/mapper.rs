use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use uast_inputs::SourceFile;
use uast_mapper::Config;

mod sources;

fn benchmark_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mapper Benchmark");

    for (name, text) in sources::SOURCES {
        let file = SourceFile::new(name, text);
        let Ok(ast) = uast_parse::parse(text) else { panic!("{name} does not parse") };

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("map_file", name), &file, |b, file| {
            b.iter(|| {
                let uast = uast_mapper::map_file(file, &ast, Config::default());
                black_box(uast)
            });
        });
        group.bench_with_input(BenchmarkId::new("to_json", name), &file, |b, file| {
            let Ok(uast) = uast_mapper::map_file(file, &ast, Config::default()) else {
                panic!("{name} does not map")
            };
            b.iter(|| black_box(uast.document().to_json()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_mapper);
criterion_main!(benches);
