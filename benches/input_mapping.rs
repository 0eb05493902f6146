use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mandelbrot_viewer::core::actions::map_input::input_mapper::InputMapper;
use mandelbrot_viewer::core::data::host_event::{HostEvent, MouseButton, ScrollAxis};
use mandelbrot_viewer::core::data::screen_point::ScreenPoint;
use mandelbrot_viewer::core::data::viewport::Viewport;
use mandelbrot_viewer::core::view::iteration_policy::IterationPolicy;
use mandelbrot_viewer::core::view::view_state::ViewState;

fn bench_input_mapping(c: &mut Criterion) {
    let mut g = c.benchmark_group("input_mapping");

    let mapper = InputMapper::default();
    let viewport = Viewport::new(1200, 800);

    g.bench_function("scroll_zoom", |b| {
        let mut state = ViewState::default();
        let events = [
            HostEvent::MouseWheelScrolled {
                delta: 1.0,
                axis: ScrollAxis::Vertical,
                position: ScreenPoint::new(317.0, 211.0),
            },
            HostEvent::MouseWheelScrolled {
                delta: -1.0,
                axis: ScrollAxis::Vertical,
                position: ScreenPoint::new(317.0, 211.0),
            },
        ];
        b.iter(|| {
            for event in &events {
                mapper.handle(&mut state, black_box(viewport), black_box(event));
            }
        });
    });

    g.bench_function("drag_pan", |b| {
        let mut state = ViewState::default();
        mapper.handle(
            &mut state,
            viewport,
            &HostEvent::MouseButtonPressed {
                button: MouseButton::Left,
                position: ScreenPoint::new(600.0, 400.0),
            },
        );
        let mut x = 600.0_f32;
        b.iter(|| {
            x = if x > 1100.0 { 100.0 } else { x + 3.0 };
            mapper.handle(
                &mut state,
                black_box(viewport),
                &HostEvent::MouseMoved {
                    position: ScreenPoint::new(x, 400.0),
                },
            );
        });
    });

    g.bench_function("effective_iterations", |b| {
        let policy = IterationPolicy::default();
        let state = ViewState::default();
        b.iter(|| policy.effective_iterations(black_box(&state)));
    });

    g.finish();
}

criterion_group!(benches, bench_input_mapping);
criterion_main!(benches);
