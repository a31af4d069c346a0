//! Question bank and map data.

use insightdesk_core::{
    catalog::Region,
    geo::{generate_geo_data, sort_geo, GeoView},
    questions::{all_questions, find_question, questions_in, search_questions, QuestionCategory},
    rng::SeededRng,
};

#[test]
fn question_ids_are_dense_from_one() {
    let questions = all_questions();
    assert_eq!(questions.len(), 123);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q.id as usize, i + 1);
    }
}

#[test]
fn category_sizes() {
    let expected = [
        (QuestionCategory::FraudAnalysis, 22),
        (QuestionCategory::DeviceComparison, 17),
        (QuestionCategory::CategoryPerformance, 22),
        (QuestionCategory::TimeTrends, 22),
        (QuestionCategory::Demographics, 16),
        (QuestionCategory::GeographicInsights, 12),
        (QuestionCategory::RevenueMetrics, 12),
    ];
    for (category, count) in expected {
        assert_eq!(questions_in(category).len(), count, "{category}");
    }
}

#[test]
fn lookup_and_search() {
    let q = find_question(48).unwrap();
    assert_eq!(q.question, "Which age group spends the most on Food?");
    assert_eq!(q.category, QuestionCategory::CategoryPerformance);
    assert!(find_question(0).is_none());
    assert!(find_question(124).is_none());

    let hits = search_questions("ARPU");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 113);
    assert_eq!(search_questions("").len(), 123);
}

#[test]
fn question_category_parses_from_label() {
    let parsed: QuestionCategory = "geographic insights".parse().unwrap();
    assert_eq!(parsed, QuestionCategory::GeographicInsights);
    assert!("Astrology".parse::<QuestionCategory>().is_err());
}

#[test]
fn geo_points_carry_region_coordinates() {
    let mut rng = SeededRng::new(10);
    let points = generate_geo_data(&mut rng);
    assert_eq!(points.len(), Region::ALL.len());
    for (point, region) in points.iter().zip(Region::ALL) {
        assert_eq!(point.region, region);
        assert_eq!((point.lat, point.lng), region.coordinates());
        assert!((5_000..=80_000).contains(&point.transactions));
        assert!((250_000..=4_000_000).contains(&point.revenue));
        assert!((1.0..=13.0).contains(&point.fraud_rate));
    }
    assert_eq!(points[1].lat, 28.7041, "Delhi latitude");
}

#[test]
fn geo_sorting_is_descending() {
    let mut rng = SeededRng::new(11);
    let mut points = generate_geo_data(&mut rng);

    sort_geo(&mut points, GeoView::Fraud);
    assert!(points.windows(2).all(|w| w[0].fraud_rate >= w[1].fraud_rate));

    sort_geo(&mut points, GeoView::Transactions);
    assert!(points.windows(2).all(|w| w[0].transactions >= w[1].transactions));
}
