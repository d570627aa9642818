use aaps_vector::{interpret, render, to_path_data, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_interpret(c: &mut Criterion) {
    let icon = aaps_icons::get("ManBack").unwrap();

    c.bench_function("interpret_man_back", |b| {
        b.iter(|| {
            for group in icon.groups() {
                black_box(interpret(black_box(&group.commands)).unwrap());
            }
        })
    });

    c.bench_function("interpret_all_icons", |b| {
        b.iter(|| {
            for icon in aaps_icons::all() {
                black_box(icon.geometry().unwrap());
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let icon = aaps_icons::get("IcSiteRotation").unwrap();
    let options = RenderOptions::new().with_size(96.0, 96.0).with_tint(aaps_vector::Color::WHITE);

    c.bench_function("render_tinted", |b| {
        b.iter(|| black_box(render(icon, black_box(&options)).unwrap()))
    });

    let geometry = icon.geometry().unwrap();
    c.bench_function("to_path_data", |b| {
        b.iter(|| {
            for g in &geometry {
                black_box(to_path_data(g));
            }
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let names: Vec<_> = aaps_icons::names().collect();

    c.bench_function("registry_get", |b| {
        b.iter(|| {
            for name in &names {
                black_box(aaps_icons::get(black_box(name)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_interpret, bench_render, bench_lookup);
criterion_main!(benches);
