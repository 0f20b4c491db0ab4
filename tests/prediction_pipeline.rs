use propcast::application::ml::registry::ModelRegistry;
use propcast::application::prediction::{PredictionAggregator, PredictionRequest};
use propcast::domain::errors::PredictionError;
use propcast::domain::ml::feature_schema::{HITTER_RATE, PITCHER_RATE, SchemaVariant};
use propcast::domain::ml::normalizer::normalize;
use propcast::domain::ports::Regressor;
use propcast::domain::types::{FeatureValue, FeatureVector, StatRecord, Target};
use propcast::infrastructure::mock::{FailingRegressor, FnRegressor, mock_registry};
use std::sync::Arc;

/// Every target predicts the plain sum of its feature vector.
fn summing_registry(variant: SchemaVariant) -> ModelRegistry {
    let mut builder = ModelRegistry::builder(variant);
    for target in Target::ALL {
        let schema = variant.schema_for(target.player()).id;
        let regressor = FnRegressor::new(schema, |v: &FeatureVector| v.to_f64_vec().iter().sum::<f64>());
        builder = builder.register(target, Arc::new(regressor)).unwrap();
    }
    builder.build_complete().unwrap()
}

#[test]
fn test_empty_stats_use_default_vectors() {
    let aggregator = PredictionAggregator::new(Arc::new(summing_registry(SchemaVariant::Counting)));

    let result = aggregator
        .aggregate(Some(&StatRecord::new()), Some(&StatRecord::new()))
        .unwrap();

    // 5 + 6 + 2 + 2 and 4 + 2 + 1 + 2
    assert_eq!(result.pitcher.get(Target::Strikeouts), Some(15.0));
    assert_eq!(result.pitcher.get(Target::Innings), Some(15.0));
    assert_eq!(result.hitter.get(Target::Hits), Some(9.0));
    assert_eq!(result.hitter.get(Target::HomeRuns), Some(9.0));
    assert_eq!(result.hitter.get(Target::Rbi), Some(9.0));
    assert_eq!(result.pitcher.confidence, 9.0);
    assert_eq!(result.hitter.confidence, 8.0);
}

#[test]
fn test_single_rate_field_keeps_position() {
    let record = StatRecord::new().with("ERA", 3.5);
    let vector = normalize(&record, &PITCHER_RATE);

    assert_eq!(
        vector.values,
        vec![
            FeatureValue::Float(3.5),
            FeatureValue::Float(0.0),
            FeatureValue::Float(0.0),
            FeatureValue::Float(0.0),
        ]
    );
    assert_eq!(vector.schema, PITCHER_RATE.id);
}

#[test]
fn test_full_record_has_no_defaults() {
    let record = StatRecord::new()
        .with("avg", 0.301)
        .with("obp", 0.390)
        .with("slg", 0.550)
        .with("hr", 2.0)
        .with("rbi", 5.0)
        .with("hits", 8.0);
    let vector = normalize(&record, &HITTER_RATE);
    assert_eq!(vector.to_f64_vec(), vec![0.301, 0.390, 0.550, 2.0, 5.0, 8.0]);
}

#[test]
fn test_rate_response_shape() {
    let aggregator =
        PredictionAggregator::new(Arc::new(mock_registry(SchemaVariant::Rate, |_| 0.44)));
    let request = PredictionRequest::from_body(br#"{"pitcherStats": {"ERA": 3.5}}"#);

    let result = aggregator
        .aggregate(Some(&request.pitcher_record()), Some(&request.hitter_record()))
        .unwrap();
    let json = serde_json::to_string(&result).unwrap();

    assert_eq!(
        json,
        r#"{"pitcher":{"predicted_strikeouts":0.4,"predicted_innings":0.4,"confidence":9},"hitter":{"predicted_hits":0.4,"predicted_home_runs":0.4,"predicted_rbi":0.4,"confidence":8}}"#
    );
}

#[test]
fn test_aggregate_is_deterministic() {
    let aggregator = PredictionAggregator::new(Arc::new(summing_registry(SchemaVariant::Rate)))
        .with_decimals(2);
    let pitcher = StatRecord::new().with("ERA", 2.87).with("WHIP", "1.05");
    let hitter = StatRecord::new().with("AVG", 0.287).with("HR", "bad");

    let first = aggregator.aggregate(Some(&pitcher), Some(&hitter)).unwrap();
    let second = aggregator.aggregate(Some(&pitcher), Some(&hitter)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.pitcher.get(Target::Strikeouts), Some(3.92));
    assert_eq!(first.hitter.get(Target::Hits), Some(0.29));
}

#[test]
fn test_failing_model_fails_whole_request() {
    let variant = SchemaVariant::Counting;
    let mut builder = ModelRegistry::builder(variant);
    for target in Target::ALL {
        let schema = variant.schema_for(target.player()).id;
        let regressor: Arc<dyn Regressor> = if target == Target::Rbi {
            Arc::new(FailingRegressor::new(schema))
        } else {
            Arc::new(FnRegressor::new(schema, |_: &FeatureVector| 1.0))
        };
        builder = builder.register(target, regressor).unwrap();
    }
    let aggregator = PredictionAggregator::new(Arc::new(builder.build()));

    let err = aggregator.aggregate(None, None).unwrap_err();
    assert!(matches!(
        err,
        PredictionError::Inference {
            target: Target::Rbi,
            ..
        }
    ));
}
