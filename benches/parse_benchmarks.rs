use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wavefront_mesh::obj::{parse_obj, parse_obj_with, ParseOptions};

/// Build OBJ text for a (width+1) x (height+1) vertex grid of quad faces,
/// with one normal and one uv per vertex.
fn grid_obj(width: usize, height: usize) -> String {
    let mut text = String::new();
    for y in 0..=height {
        for x in 0..=width {
            text.push_str(&format!("v {} {} 0\n", x, y));
            text.push_str("vn 0 0 1\n");
            text.push_str(&format!(
                "vt {} {}\n",
                x as f32 / width as f32,
                y as f32 / height as f32
            ));
        }
    }
    let stride = width + 1;
    for y in 0..height {
        for x in 0..width {
            let a = y * stride + x + 1;
            let b = a + 1;
            let c = b + stride;
            let d = a + stride;
            text.push_str(&format!("f {a} {b} {c} {d}\n"));
        }
    }
    text
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn bench_parse_grid_small(c: &mut Criterion) {
    let text = grid_obj(16, 16);
    c.bench_function("parse_obj_grid_16x16", |b| {
        b.iter(|| parse_obj(black_box(&text)));
    });
}

fn bench_parse_grid_large(c: &mut Criterion) {
    let text = grid_obj(128, 128);
    c.bench_function("parse_obj_grid_128x128", |b| {
        b.iter(|| parse_obj(black_box(&text)));
    });
}

fn bench_parse_grid_expanded(c: &mut Criterion) {
    let text = grid_obj(128, 128);
    let options = ParseOptions::new().with_expanded_attributes(true);
    c.bench_function("parse_obj_grid_128x128_expanded", |b| {
        b.iter(|| parse_obj_with(black_box(&text), options));
    });
}

criterion_group!(
    benches,
    bench_parse_grid_small,
    bench_parse_grid_large,
    bench_parse_grid_expanded
);
criterion_main!(benches);
