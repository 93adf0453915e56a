use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rst_style_language_server::{check_all, fix_all, PositionIndex, RuleRegistry};

fn generate_rst_content(size_kb: usize) -> String {
    let target_bytes = size_kb * 1024;
    let mut content = String::with_capacity(target_bytes + 1000);

    // Realistic reStructuredText documentation patterns
    let patterns = [
        "Установка\n=========\n\n",
        "Пакет ставится одной командой.\n",
        "Выполните ``pip install <package_name>`` в терминале.\n\n",
        "Настройка\n---------\n\n",
        "#. Откройте файл настроек.\n",
        "#. Укажите <host_name> сервера.\n\n",
        ".. комментарий для редакторов\n\n",
        "Сервер осуществляет проверку. Это занимает время.\n\n",
    ];

    let mut pattern_index = 0;
    while content.len() < target_bytes {
        content.push_str(patterns[pattern_index % patterns.len()]);
        pattern_index += 1;
    }

    content
}

fn bench_check_large_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_large_file");
    let registry = RuleRegistry::default();

    for size_kb in [64, 256, 1024].iter() {
        let content = generate_rst_content(*size_kb);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("size_kb", size_kb), &content, |b, content| {
            b.iter(|| black_box(check_all(content, &registry).len()))
        });
    }
    group.finish();
}

fn bench_position_index(c: &mut Criterion) {
    let content = generate_rst_content(1024);

    c.bench_function("position_index_build", |b| {
        b.iter(|| black_box(PositionIndex::new(black_box(&content)).line_count()))
    });

    let index = PositionIndex::new(&content);
    let lines = index.line_count();
    let offsets = [
        0,
        index.line_start(lines / 4),
        index.line_start(lines / 2),
        content.len(),
    ];

    c.bench_function("offset_to_position", |b| {
        b.iter(|| {
            for offset in offsets {
                black_box(index.offset_to_position(black_box(offset)));
            }
        })
    });
}

fn bench_fix_all(c: &mut Criterion) {
    let registry = RuleRegistry::default();
    let content = generate_rst_content(16);

    c.bench_function("fix_all_16kb", |b| {
        b.iter(|| black_box(fix_all(black_box(&content), &registry, 10_000).applied))
    });
}

criterion_group!(
    benches,
    bench_check_large_files,
    bench_position_index,
    bench_fix_all
);
criterion_main!(benches);
