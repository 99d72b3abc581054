use criterion::{Criterion, criterion_group, criterion_main};
use riff_parser::chunk::models::Chunk;
use std::io::Cursor;

fn push_leaf(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(tag);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
}

fn wrap_container(tag: &[u8; 4], form: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 12);
    out.extend_from_slice(tag);
    out.extend_from_slice(&(body.len() as u32 + 4).to_le_bytes());
    out.extend_from_slice(form);
    out.extend_from_slice(body);
    out
}

fn build_flat(chunks: usize, payload_len: usize) -> Vec<u8> {
    let payload = vec![0x5A; payload_len];
    let mut body = Vec::new();
    for _ in 0..chunks {
        push_leaf(&mut body, b"data", &payload);
    }
    wrap_container(b"RIFF", b"WAVE", &body)
}

fn build_nested(levels: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    push_leaf(&mut bytes, b"data", &[0x5A; 64]);
    for _ in 0..levels {
        bytes = wrap_container(b"LIST", b"nest", &bytes);
    }
    bytes
}

fn parse_buffer(bytes: &[u8]) {
    let mut cursor = 0;
    Chunk::from_buffer(bytes, &mut cursor).unwrap();
}

fn parse_stream(bytes: &[u8]) {
    Chunk::from_reader(Cursor::new(bytes)).unwrap();
}

fn chunk_parsing(c: &mut Criterion) {
    let flat = build_flat(1_000, 256);
    let nested = build_nested(48);

    c.bench_function("buffer_flat", |b| b.iter(|| parse_buffer(&flat)));
    c.bench_function("buffer_nested", |b| b.iter(|| parse_buffer(&nested)));
    c.bench_function("stream_flat", |b| b.iter(|| parse_stream(&flat)));
    c.bench_function("stream_nested", |b| b.iter(|| parse_stream(&nested)));
}

criterion_group!(benches, chunk_parsing);
criterion_main!(benches);
