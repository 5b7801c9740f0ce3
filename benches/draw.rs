//! Drawing benchmarks

use canvascii::core::{ingest, Canvas, DrawRequest, Pen, Point, Shape, MAX_HEIGHT, MAX_WIDTH};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn full_canvas() -> Canvas {
    Canvas::blank(MAX_HEIGHT as i32, MAX_WIDTH as i32).0
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    let pen = Pen::new('3').unwrap();

    let requests = vec![
        DrawRequest::new(Shape::Horizontal { row: 20 }, pen),
        DrawRequest::new(Shape::Vertical { col: 40 }, pen),
        DrawRequest::new(
            Shape::Rectangle {
                top_left: Point::new(2, 2),
                height: 36,
                width: 76,
            },
            pen,
        ),
        DrawRequest::new(
            Shape::Segment {
                from: Point::new(0, 0),
                to: Point::new(39, 79),
            },
            pen,
        ),
        DrawRequest::new(
            Shape::Circle {
                center: Point::new(20, 40),
                radius: 18,
            },
            pen,
        ),
    ];

    group.bench_function("all_shapes", |b| {
        b.iter(|| {
            let mut canvas = full_canvas();
            for request in &requests {
                canvas.apply(black_box(request)).unwrap();
            }
            black_box(canvas)
        })
    });

    group.finish();
}

fn bench_clipped_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    // Most of the circle falls outside the canvas
    group.bench_function("clipped_circle", |b| {
        b.iter(|| {
            let mut canvas = full_canvas();
            canvas
                .draw_circle(Point::new(-100, -100), black_box(200), Pen::DEFAULT)
                .unwrap();
            black_box(canvas)
        })
    });

    group.finish();
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    let row = "0123456.".repeat(MAX_WIDTH / 8);
    let lines = vec![row; MAX_HEIGHT];
    group.throughput(Throughput::Bytes((MAX_HEIGHT * (MAX_WIDTH + 1)) as u64));

    group.bench_function("full_canvas", |b| {
        b.iter(|| black_box(ingest(black_box(&lines))))
    });

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_clipped_circle, bench_ingest);

criterion_main!(benches);
