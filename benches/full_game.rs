use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use trivia_board::{
    BoardBuilder, Category, CategoryId, ContentPool, EnginePhase, GameConfig, GameRng,
    GameSession, PointValue, Question,
};

fn pool(count: usize, per_value: usize) -> ContentPool {
    let categories = (0..count)
        .map(|c| Category {
            id: CategoryId::new(format!("c{c}")),
            title: format!("Category {c}"),
            questions: PointValue::ALL
                .iter()
                .flat_map(|&value| {
                    (0..per_value).map(move |n| Question {
                        id: format!("c{c}-{value}-{n}"),
                        value,
                        prompt: "?".to_string(),
                        correct_answer: "d".to_string(),
                        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    })
                })
                .collect(),
        })
        .collect();
    ContentPool::new(categories)
}

/// Play a six-column, four-player game: every question goes round the
/// table once (three wrong answers) before the last player gets it.
fn play(session: &mut GameSession) -> i64 {
    while let Some(cell) = session
        .engine()
        .and_then(|e| e.board().open_cells().next())
    {
        let Ok(_) = session.apply(trivia_board::Command::SelectCell { cell }) else {
            break;
        };
        if matches!(
            session.engine().map(|e| e.phase()),
            Some(EnginePhase::Announcing(_))
        ) {
            let _ = session.finish_announcement();
        }
        for option in ["a", "b", "c", "d"] {
            let _ = session.tick();
            if session.submit_answer(option).is_err() {
                break;
            }
            if matches!(
                session.engine().map(|e| e.phase()),
                Some(EnginePhase::ResolvedCorrect | EnginePhase::ResolvedFailed)
            ) {
                break;
            }
        }
        let _ = session.acknowledge();
    }
    session
        .standings()
        .map(|s| s.first().map_or(0, |top| top.score))
        .unwrap_or_default()
}

fn bench_full_game(c: &mut Criterion) {
    let pool = pool(12, 3);
    let names = ["A", "B", "C", "D"];

    c.bench_function("game/configure", |b| {
        b.iter(|| {
            let mut session = GameSession::new(GameConfig::default(), black_box(7));
            black_box(session.configure_game(&names, &pool).is_ok())
        })
    });

    c.bench_function("game/play_through", |b| {
        b.iter_batched(
            || {
                let mut session = GameSession::new(GameConfig::default(), 7);
                let _ = session.configure_game(&names, &pool);
                session
            },
            |mut session| black_box(play(&mut session)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("board/build", |b| {
        let builder = BoardBuilder::new(6);
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(builder.build(&pool, &mut GameRng::new(seed)).is_ok())
        })
    });
}

criterion_group!(benches, bench_full_game);
criterion_main!(benches);
