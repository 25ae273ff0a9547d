// Criterion benchmarks for Nutriplan

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutriplan::core::{derive_metrics, filter_by_diet, plan_rng, recommend_foods, MealPlanner};
use nutriplan::models::{DietPreference, FoodRecord, Profile};

const NAMES: [&str; 8] = [
    "Oats", "Chicken Breast", "Lentil Curry", "Greek Yogurt", "Brown Rice", "Tofu", "Apple",
    "Salmon",
];

fn create_food(id: usize) -> FoodRecord {
    FoodRecord {
        name: format!("{} {}", NAMES[id % NAMES.len()], id),
        calories: Some(60.0 + (id * 37 % 450) as f64),
        protein_g: (id % 30) as f64,
        carbs_g: (id % 50) as f64,
        fat_g: (id % 15) as f64,
        fiber_g: (id % 9) as f64,
        sugar_g: (id % 12) as f64,
        nutrition_density: (id % 150) as f64,
    }
}

fn create_profile(goal: &str) -> Profile {
    Profile {
        goal: goal.to_string(),
        ..Profile::default()
    }
}

fn bench_derive_metrics(c: &mut Criterion) {
    let profile = create_profile("Weight Loss");
    c.bench_function("derive_metrics", |b| {
        b.iter(|| derive_metrics(black_box(&profile)));
    });
}

fn bench_diet_filter(c: &mut Criterion) {
    let foods: Vec<FoodRecord> = (0..1000).map(create_food).collect();
    c.bench_function("filter_by_diet_vegan_1000_foods", |b| {
        b.iter(|| filter_by_diet(black_box(&foods), DietPreference::Vegan).len());
    });
}

fn bench_plan_generation(c: &mut Criterion) {
    let planner = MealPlanner::with_default_tolerances();
    let profile = create_profile("Maintain Weight");

    let mut group = c.benchmark_group("plan_generation");

    for food_count in [50, 500, 5000].iter() {
        let foods: Vec<FoodRecord> = (0..*food_count).map(create_food).collect();

        group.bench_with_input(
            BenchmarkId::new("seven_days", food_count),
            food_count,
            |b, _| {
                let mut rng = plan_rng(Some(7));
                b.iter(|| {
                    planner.generate(
                        black_box(&profile),
                        black_box(&foods),
                        black_box(7),
                        black_box(3),
                        &mut rng,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_recommend_foods(c: &mut Criterion) {
    let foods: Vec<FoodRecord> = (0..1000).map(create_food).collect();

    let mut group = c.benchmark_group("recommend_foods");

    for goal in ["Weight Loss", "Muscle Gain", "Maintain Weight"] {
        let profile = create_profile(goal);
        group.bench_with_input(BenchmarkId::new("top_10", goal), &profile, |b, profile| {
            b.iter(|| recommend_foods(black_box(profile), black_box(&foods), black_box(10)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_derive_metrics,
    bench_diet_filter,
    bench_plan_generation,
    bench_recommend_foods
);

criterion_main!(benches);
