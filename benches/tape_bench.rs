//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazytur::{Direction, Tape, TuringMachine};

fn benchmark_distant_access(c: &mut Criterion) {
    c.bench_function("tape_read_1e5", |b| {
        b.iter(|| {
            let tape = Tape::new('_', vec!['S', 'M', 'A', 'L', 'L']);
            black_box(tape.symbol_at(black_box(100_000)))
        });
    });

    c.bench_function("tape_read_cached", |b| {
        let tape = Tape::new('_', vec!['a'; 16]);
        tape.symbol_at(10_000);
        b.iter(|| black_box(tape.symbol_at(black_box(9_999))));
    });
}

fn benchmark_inverter(c: &mut Criterion) {
    let input: Vec<char> = (0..10_000).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();

    let mut machine = TuringMachine::new(' ', "START");
    machine.add_rule("START", '0', "START", '1', Direction::Right);
    machine.add_rule("START", '1', "START", '0', Direction::Right);
    machine.add_rule("START", ' ', "FINAL", ' ', Direction::Stay);
    machine.add_final_state("FINAL");

    c.bench_function("invert_10000", |b| {
        b.iter(|| {
            machine.reset_with_input(&input);
            black_box(machine.run())
        });
    });
}

criterion_group!(benches, benchmark_distant_access, benchmark_inverter);
criterion_main!(benches);
