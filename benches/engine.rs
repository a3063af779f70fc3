use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use taki_rs::cards::{Card, CardType, Color, Rank};
use taki_rs::stats::Statistics;

fn all_cards() -> Vec<Card> {
    let mut cards = Vec::new();
    for color in Color::ALL {
        for rank in Rank::ALL {
            cards.push(Card::Number(rank, color));
        }
        cards.push(Card::Plus(color));
        cards.push(Card::Stop(color));
        cards.push(Card::Reverse(color));
        cards.push(Card::Taki(color));
    }
    cards.push(Card::ChangeColor(None));
    cards
}

fn bench_can_play_on(c: &mut Criterion) {
    let cards = all_cards();
    let top = Card::Number(Rank::Five, Color::Red);

    let mut g = c.benchmark_group("can_play_on");
    g.bench_with_input(BenchmarkId::new("full_deck", "on_5R"), &cards, |b, cards| {
        b.iter(|| {
            cards
                .iter()
                .filter(|card| card.can_play_on(black_box(top)))
                .count()
        })
    });
    g.finish();
}

fn bench_statistics_sort(c: &mut Criterion) {
    let mut stats = Statistics::new();
    for (i, card_type) in CardType::ALL.into_iter().enumerate() {
        for _ in 0..(i * 7) % 13 {
            stats.record(card_type);
        }
    }

    c.bench_function("statistics_sort", |b| {
        b.iter(|| {
            let mut table = black_box(stats.clone());
            table.sort();
            table
        })
    });
}

criterion_group!(benches, bench_can_play_on, bench_statistics_sort);
criterion_main!(benches);
