use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use toastkit::{
    AdaptiveText, Notification, Payload, TileBasicImage, TileBinding, TileBindingContentPeople,
    TileContent, TileSize, TileVisual, ToastBindingGeneric, ToastContent, ToastVisual,
    WriterConfig,
};

const TOAST_JSON: &str = r#"{"kind":"toast","launch":"id=1","visual":{"bindingGeneric":{"children":[{"type":"text","text":"Hello"},{"type":"text","text":"World"}]}},"actions":{"type":"snoozeAndDismiss"}}"#;

fn people_tile() -> TileContent {
    let people = (0..9).fold(TileBindingContentPeople::new(), |people, i| {
        people.with_image(TileBasicImage::new(format!("Assets/People/{i}.jpg")))
    });
    let binding = TileBinding::new(people);
    TileContent::new(
        TileVisual::new()
            .with_binding(TileSize::Medium, binding.clone())
            .with_binding(TileSize::Wide, binding.clone())
            .with_binding(TileSize::Large, binding),
    )
}

fn bench_tile(c: &mut Criterion) {
    let tile = people_tile();
    c.bench_function("toastkit_tile_people", |b| {
        b.iter(|| black_box(&tile).to_xml())
    });
}

fn bench_toast_pretty(c: &mut Criterion) {
    let toast = ToastContent::new(ToastVisual::new(
        ToastBindingGeneric::new()
            .with_child(AdaptiveText::new("Hello"))
            .with_child(AdaptiveText::new("World & <friends>")),
    ));
    let config = WriterConfig::pretty(2);
    c.bench_function("toastkit_toast_pretty", |b| {
        b.iter(|| black_box(&toast).to_xml_with_config(&config))
    });
}

fn bench_from_json(c: &mut Criterion) {
    c.bench_function("toastkit_toast_from_json", |b| {
        b.iter(|| {
            serde_json::from_str::<Notification>(black_box(TOAST_JSON))
                .map(|notification| notification.to_xml())
        })
    });
}

criterion_group!(benches, bench_tile, bench_toast_pretty, bench_from_json);
criterion_main!(benches);
