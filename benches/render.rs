#[macro_use]
extern crate criterion;
extern crate fractals;

use criterion::Criterion;
use fractals::{Complex, Fractal, MandelbrotEvaluator, NewtonSolver, Renderer};

fn newton_pixel(c: &mut Criterion) {
    let solver = NewtonSolver::default();
    c.bench_function("newton pixel near a basin edge", move |b| {
        b.iter(|| solver.color_at(Complex::new(-0.5, 0.01)))
    });
}

fn mandelbrot_pixel(c: &mut Criterion) {
    let m = MandelbrotEvaluator::default();
    c.bench_function("mandelbrot interior pixel", move |b| {
        b.iter(|| m.color_at(Complex::new(-0.1, 0.1)))
    });
}

fn render_single(c: &mut Criterion) {
    let renderer = Renderer::new(120, 72, 5.0, 3.0).unwrap();
    let m = MandelbrotEvaluator::default();
    c.bench_function("mandelbrot 120x72 single", move |b| {
        b.iter(|| renderer.render_single(&m).unwrap())
    });
}

fn render_threaded(c: &mut Criterion) {
    let renderer = Renderer::new(120, 120, 4.0, 4.0).unwrap();
    let solver = NewtonSolver::default();
    c.bench_function("newton 120x120 on 4 threads", move |b| {
        b.iter(|| renderer.render(&solver, 4).unwrap())
    });
}

criterion_group!(
    benches,
    newton_pixel,
    mandelbrot_pixel,
    render_single,
    render_threaded
);
criterion_main!(benches);
