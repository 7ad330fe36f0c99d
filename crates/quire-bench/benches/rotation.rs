use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quire_bench::*;

fn quat_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("quaternion/rotate");

    group.bench_function("quire", |b| {
        let q = random_rotations(1)[0];
        let v = random_vectors(1)[0];
        b.iter(|| black_box(black_box(q).rotate(black_box(v))))
    });

    group.bench_function("nalgebra", |b| {
        let q = random_rotations(1)[0];
        let v = random_vectors(1)[0];
        let nq = nalgebra::UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z));
        let nv = nalgebra::Vector3::new(v.x, v.y, v.z);
        b.iter(|| black_box(black_box(nq) * black_box(nv)))
    });

    group.finish();
}

fn quat_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("quaternion/mul");

    group.bench_function("quire", |b| {
        let qs = random_rotations(2);
        b.iter(|| black_box(black_box(qs[0]) * black_box(qs[1])))
    });

    group.bench_function("nalgebra", |b| {
        let qs: Vec<_> = random_rotations(2)
            .into_iter()
            .map(|q| nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
            .collect();
        b.iter(|| black_box(black_box(qs[0]) * black_box(qs[1])))
    });

    group.finish();
}

fn euler(c: &mut Criterion) {
    let q = random_rotations(1)[0];
    c.bench_function("quaternion/euler_roundtrip", |b| {
        b.iter(|| black_box(quire::Quaternion::from_euler(black_box(q).euler())))
    });
}

fn vec_cross(c: &mut Criterion) {
    let vs = random_vectors(2);
    c.bench_function("vector/cross", |b| {
        b.iter(|| black_box(black_box(vs[0]).cross(black_box(vs[1]))))
    });
}

criterion_group!(benches, quat_rotate, quat_mul, euler, vec_cross);
criterion_main!(benches);
