use criterion::{black_box, criterion_group, criterion_main, Criterion};
use openapi_qs::{QueryParams, Style, Value};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
struct Address {
    city: String,
    street: String,
    postcode: String,
}

#[derive(Debug, Clone, Serialize)]
struct UserFilter {
    id: u8,
    name: String,
    phone: u32,
    address: Address,
    user_ids: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
struct DeepNested {
    level1: Level1,
    metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
struct Level1 {
    level2: Level2,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
struct Level2 {
    flags: Vec<bool>,
    config: BTreeMap<String, i32>,
}

fn user_filter() -> Value {
    openapi_qs::to_value(&UserFilter {
        id: 42,
        name: "Acme".to_string(),
        phone: 12345,
        address: Address {
            city: "Carrot City".to_string(),
            street: "Special Street".to_string(),
            postcode: "12345".to_string(),
        },
        user_ids: vec![1, 2, 3, 4],
    })
    .unwrap()
}

fn deep_nested() -> Value {
    let metadata = (0..10)
        .map(|i| (format!("key{i}"), format!("value {i}")))
        .collect();
    let config = (0..10).map(|i| (format!("opt{i}"), i)).collect();
    openapi_qs::to_value(&DeepNested {
        level1: Level1 {
            level2: Level2 {
                flags: vec![true, false, true],
                config,
            },
            tags: (0..20).map(|i| format!("tag {i}")).collect(),
        },
        metadata,
    })
    .unwrap()
}

fn encode_list_styles(c: &mut Criterion) {
    let list = Value::from((0..100).collect::<Vec<u32>>());

    for style in [Style::Form, Style::SpaceDelimited, Style::PipeDelimited] {
        c.bench_function(&format!("encode_list_{style}"), |b| {
            b.iter(|| {
                let mut params = QueryParams::new();
                params.encode("ids", black_box(&list), style, false);
                params
            })
        });
    }
}

fn encode_exploded_object(c: &mut Criterion) {
    let data = user_filter();

    c.bench_function("encode_exploded_object", |b| {
        b.iter(|| {
            let mut params = QueryParams::new();
            params.encode("filter", black_box(&data), Style::Form, true);
            params
        })
    });
}

fn encode_deep_object(c: &mut Criterion) {
    let data = deep_nested();

    c.bench_function("encode_deep_object", |b| {
        b.iter(|| {
            let mut params = QueryParams::new();
            params.encode("q", black_box(&data), Style::DeepObject, true);
            params
        })
    });
}

fn assemble_query_string(c: &mut Criterion) {
    let mut params = QueryParams::new();
    params
        .encode("q", &deep_nested(), Style::DeepObject, true)
        .encode("filter", &user_filter(), Style::Form, false)
        .encode("ids", &Value::from((0..50).collect::<Vec<u32>>()), Style::Form, true);

    c.bench_function("assemble_query_string", |b| {
        b.iter(|| black_box(&params).to_query_string())
    });
}

criterion_group!(
    encode,
    encode_list_styles,
    encode_exploded_object,
    encode_deep_object
);

criterion_group!(assemble, assemble_query_string);

criterion_main!(encode, assemble);
