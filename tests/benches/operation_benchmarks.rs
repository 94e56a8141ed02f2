//! # Mathematical API Operation Benchmarks
//!
//! | Path | Measures |
//! |------|----------|
//! | `dispatch` | name lookup + schema validation + math |
//! | `execute` | math on an already validated request |
//! | `schema` | payload validation alone |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use math_operations::{dispatch, CalculatorApi, CalculatorService, Operation, OperationRequest};
use serde_json::{json, Value};
use std::time::Duration;

fn sample_payload(operation: Operation) -> Value {
    match operation {
        Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
            json!({"a": 1234.5, "b": 6.75})
        }
        Operation::Power => json!({"base": 1.0001, "exponent": 512}),
        Operation::Sqrt | Operation::Sin | Operation::Cos | Operation::Tan => {
            json!({"number": 0.7853981633974483})
        }
    }
}

// ============================================================================
// Dispatcher: name -> schema -> operation
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.measurement_time(Duration::from_secs(5));

    let calculator = CalculatorService::new();

    for operation in Operation::ALL {
        let payload = sample_payload(operation);
        group.bench_with_input(
            BenchmarkId::from_parameter(operation.as_str()),
            &payload,
            |b, payload| {
                b.iter(|| {
                    black_box(dispatch(&calculator, black_box(operation.as_str()), payload).is_ok())
                })
            },
        );
    }

    group.bench_function("unknown_operation", |b| {
        let payload = json!({"a": 1, "b": 2});
        b.iter(|| black_box(dispatch(&calculator, black_box("modulo"), &payload).is_err()))
    });

    group.finish();
}

// ============================================================================
// Validated execution only
// ============================================================================

fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");

    let calculator = CalculatorService::new();
    let requests: Vec<OperationRequest> = Operation::ALL
        .iter()
        .filter_map(|op| OperationRequest::parse(*op, &sample_payload(*op)).ok())
        .collect();

    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("all_operations", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(calculator.execute(black_box(*request)).is_ok());
            }
        })
    });

    group.finish();
}

// ============================================================================
// Schema validation: object vs positional vs coerced strings
// ============================================================================

fn bench_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema");

    let shapes = [
        ("object", json!({"a": 10, "b": 5})),
        ("array", json!([10, 5])),
        ("string_operands", json!({"a": "10", "b": "5"})),
        ("extra_fields", json!({"a": 10, "b": 5, "c": 1, "d": 2, "e": 3})),
    ];

    for (name, payload) in shapes {
        group.bench_with_input(BenchmarkId::new("binary", name), &payload, |b, payload| {
            b.iter(|| black_box(OperationRequest::parse(Operation::Add, black_box(payload)).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_execute, bench_schema);
criterion_main!(benches);
