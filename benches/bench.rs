// Criterion benchmarks for Mesh Algo

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use mesh_algo::core::{classify_experience, compatibility_score, ConsentHasher, MatchGenerator};
use mesh_algo::models::{Goals, MemberProfile, ProfileAttributes};

fn create_attributes(i: usize) -> ProfileAttributes {
    ProfileAttributes {
        industry: Some(if i % 2 == 0 { "Fintech" } else { "Health" }.to_string()),
        industries: vec!["Fintech".to_string(), "SaaS".to_string()],
        role: Some(if i % 3 == 0 { "founder" } else { "investor" }.to_string()),
        goals: Some(Goals {
            objectives: vec!["Raise capital".to_string(), "Find customers".to_string()],
        }),
        skills: vec!["Python".to_string(), "Sales".to_string()],
        city_region: Some("Berlin".to_string()),
        title: Some("Senior Engineer".to_string()),
        ..Default::default()
    }
}

fn create_candidate(i: usize) -> MemberProfile {
    MemberProfile {
        member_id: i.to_string(),
        display_name: Some(format!("Member {}", i)),
        persona: None,
        interests: vec![],
        is_activated: true,
        attributes: create_attributes(i),
    }
}

fn bench_compatibility_score(c: &mut Criterion) {
    let a = create_attributes(0);
    let b = create_attributes(1);

    c.bench_function("compatibility_score", |bench| {
        bench.iter(|| compatibility_score(black_box(&a), black_box(&b)));
    });
}

fn bench_classify_experience(c: &mut Criterion) {
    c.bench_function("classify_experience", |bench| {
        bench.iter(|| {
            classify_experience(
                black_box(Some("Senior Engineering Manager")),
                black_box(Some("founder")),
            )
        });
    });
}

fn bench_hash_email(c: &mut Criterion) {
    let hasher = ConsentHasher::with_default_salt();

    c.bench_function("hash_email", |bench| {
        bench.iter(|| hasher.hash_email(black_box("some.user@example.com")));
    });
}

fn bench_match_generation(c: &mut Criterion) {
    let generator = MatchGenerator::new();
    let seed = create_candidate(usize::MAX);

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let pool: Vec<MemberProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("generate", candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    generator.generate(
                        black_box(&seed),
                        black_box(pool.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compatibility_score,
    bench_classify_experience,
    bench_hash_email,
    bench_match_generation
);

criterion_main!(benches);
