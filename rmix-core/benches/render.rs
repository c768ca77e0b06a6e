use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rmix_core::{include, mixins, Block, Color, Length, PrinterOptions, Rule};

fn tooltip() -> Block {
    let mut block = mixins::absolute(&"top 10px left 5%".parse().unwrap());
    block
        .include(mixins::arrow(
            &mixins::Direction::Top,
            &Color::new("#333"),
            Length::px(6.0),
        ))
        .include(mixins::background_rgba(&Color::new("#000"), Some(0.8)))
        .include(mixins::font_size(Length::px(12.0), false))
        .include(mixins::clearfix())
        .include(mixins::placeholder(mixins::hide_text));
    block
}

fn render_benchmark(c: &mut Criterion) {
    c.bench_function("render rule", |b| {
        b.iter(|| {
            let rule = Rule::new(black_box(".tooltip, .popover"), tooltip());
            rule.to_css(PrinterOptions { minify: true })
        })
    });

    let source = r#"
        .tooltip {
            @include absolute(top 10px left 5%);
            @include arrow(top, #333, 6px);
            @include background-rgba(#000, 0.8);
            @include font-size(12px);
            @include retina { @include size(20px); }
            color: white;
        }
    "#;
    c.bench_function("expand includes", |b| {
        b.iter(|| include::parse_stylesheet(black_box(source)).map(|s| s.to_string()))
    });
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
