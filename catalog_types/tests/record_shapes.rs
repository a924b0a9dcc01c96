use catalog_types::{
    utils, AnyRecord, CatalogRecord, Episode, FreeEpisode, RecordError,
    RecordKind, Rubric, Series, SeriesRubric, ShapeViolation,
};
use serde_json::{json, Value};

const CONTEXT: &str = "summer-2024:FR:fr";

fn field_names(value: &Value) -> Vec<String> {
    let mut names = value
        .as_object()
        .expect("record should serialize to an object")
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    names.sort();
    names
}

/// Checks that every required field of `kind` is needed on its own: removing
/// any single one from `payload` makes decoding fail.
fn assert_each_required_field_is_needed(kind: RecordKind, payload: &Value) {
    for field in kind.required_fields() {
        let mut partial = payload.clone();
        partial
            .as_object_mut()
            .expect("payload should be an object")
            .remove(field);

        let err = AnyRecord::from_json(kind, partial.clone(), false)
            .expect_err(&format!("{kind} decoded without `{field}`"));
        assert!(matches!(err, RecordError::Json { .. }), "{err}");

        let shape = kind.check_shape(&partial).unwrap_err();
        assert_eq!(shape.violations, vec![ShapeViolation::MissingField(field)]);
    }
}

/// Serializes through JSON and through a ``DynamoDB`` item and checks both
/// give back the record with the same fields present.
fn assert_round_trips<R>(record: &R)
where
    R: CatalogRecord + PartialEq + std::fmt::Debug,
{
    let value = utils::to_json(record).unwrap();
    let from_json: R = utils::from_json(value.clone()).unwrap();
    assert_eq!(&from_json, record);
    assert_eq!(
        field_names(&utils::to_json(&from_json).unwrap()),
        field_names(&value)
    );

    let item = utils::to_item(record).unwrap();
    let mut item_fields = item.keys().cloned().collect::<Vec<_>>();
    item_fields.sort();
    assert_eq!(item_fields, field_names(&value));

    let from_item: R = utils::from_item(item).unwrap();
    assert_eq!(&from_item, record);
}

#[test]
fn test_rubric_shape() {
    let payload = json!({
        "id_rubric": 7,
        "rubric_name": "Documentaries",
        "campaign_countries_languages_id": CONTEXT,
    });

    assert_eq!(RecordKind::Rubrics.check_shape(&payload), Ok(()));
    let rubric: Rubric = utils::from_json(payload.clone()).unwrap();
    assert_eq!(rubric.created_at, None);
    assert_eq!(rubric.updated_at, None);
    assert_each_required_field_is_needed(RecordKind::Rubrics, &payload);

    assert_round_trips(&Rubric {
        created_at: Some("2024-05-01T08:00:00Z".to_string()),
        updated_at: Some("2024-05-02T08:00:00Z".to_string()),
        ..rubric
    });
}

#[test]
fn test_series_optional_fields_are_independent() {
    let optional = RecordKind::Series.optional_fields();
    let full = json!({
        "serie_id": 42,
        "title": "Example Show",
        "description": "A show",
        "url_covers": "https://cdn.example.com/42/cover.jpg",
        "campaign_countries_languages_id": CONTEXT,
        "created_at": "2024-05-01T08:00:00Z",
        "updated_at": "2024-05-02T08:00:00Z",
    });

    for field in &optional {
        let mut payload = full.clone();
        payload.as_object_mut().unwrap().remove(*field);

        let series: Series = utils::from_json(payload.clone()).unwrap();
        assert_eq!(utils::to_json(&series).unwrap(), payload);
        assert_round_trips(&series);
    }

    assert_each_required_field_is_needed(RecordKind::Series, &full);
}

#[test]
fn test_minimal_series_gains_no_fields() {
    let series: Series =
        serde_json::from_str(r#"{"serie_id": 42, "title": "Example Show"}"#)
            .unwrap();

    assert_eq!(
        series,
        Series {
            serie_id: 42,
            title: "Example Show".to_string(),
            description: None,
            url_covers: None,
            campaign_countries_languages_id: None,
            created_at: None,
            updated_at: None,
        }
    );
    assert_eq!(
        serde_json::to_string(&series).unwrap(),
        r#"{"serie_id":42,"title":"Example Show"}"#
    );

    let item = utils::to_item(&series).unwrap();
    assert_eq!(item.len(), 2);
    assert_round_trips(&series);
}

#[test]
fn test_series_rubric_key_fields_are_all_required() {
    let payload = json!({
        "serie_id": 42,
        "id_rubric": 7,
        "campaign_countries_languages_id": CONTEXT,
    });

    assert_eq!(
        RecordKind::SeriesRubrics.key_fields(),
        RecordKind::SeriesRubrics.required_fields()
    );
    assert_each_required_field_is_needed(RecordKind::SeriesRubrics, &payload);

    let link: SeriesRubric = utils::from_json(payload).unwrap();
    assert_eq!(link.key().series().serie_id, 42);
    assert_eq!(link.key().rubric().id_rubric, 7);
    assert_round_trips(&link);
}

#[test]
fn test_episode_shape() {
    let minimal = json!({
        "series_id": 42,
        "episode_id": 1001,
        "season_id": 3,
        "episode_position": 1,
        "campaign_countries_languages_id": CONTEXT,
    });

    assert_eq!(RecordKind::Episodes.check_shape(&minimal), Ok(()));
    assert_each_required_field_is_needed(RecordKind::Episodes, &minimal);

    let episode: Episode = utils::from_json(minimal.clone()).unwrap();
    assert_eq!(utils::to_json(&episode).unwrap(), minimal);
    assert_round_trips(&episode);

    let full = Episode {
        season_position: Some(2),
        title: Some("Pilot".to_string()),
        description: Some("The first one".to_string()),
        duration: serde_json::Number::from_f64(2_580.5),
        production_year: Some(2021),
        url_streaming_no_drm: Some(
            "https://stream.example.com/1001/master.m3u8".to_string(),
        ),
        created_at: Some("2024-05-01T08:00:00Z".to_string()),
        updated_at: Some("2024-05-02T08:00:00Z".to_string()),
        ..episode
    };
    assert_eq!(
        RecordKind::Episodes.check_shape(&utils::to_json(&full).unwrap()),
        Ok(())
    );
    assert_round_trips(&full);
}

#[test]
fn test_free_episode_shape() {
    let payload = json!({
        "episode_id": 1001,
        "campaign_countries_languages_id": CONTEXT,
        "created_at": "2024-05-01T08:00:00Z",
    });

    assert_eq!(RecordKind::FreeEpisodes.check_shape(&payload), Ok(()));
    assert_each_required_field_is_needed(RecordKind::FreeEpisodes, &payload);

    let free_episode: FreeEpisode = utils::from_json(payload).unwrap();
    assert_eq!(free_episode.updated_at, None);
    assert_round_trips(&free_episode);
}

#[test]
fn test_no_silent_coercion() {
    // an identifier sent as text is rejected rather than parsed
    let err = utils::from_json::<Series>(json!({
        "serie_id": "42",
        "title": "Example Show",
    }))
    .unwrap_err();
    assert_eq!(err.kind(), RecordKind::Series);

    // a fractional position is not truncated
    assert!(utils::from_json::<Episode>(json!({
        "series_id": 42,
        "episode_id": 1001,
        "season_id": 3,
        "episode_position": 1.5,
        "campaign_countries_languages_id": CONTEXT,
    }))
    .is_err());
}

#[test]
fn test_duration_keeps_its_number_form() {
    for duration in [json!(90), json!(90.0), json!(1_320.5)] {
        let payload = json!({
            "series_id": 42,
            "episode_id": 1001,
            "season_id": 3,
            "episode_position": 1,
            "duration": duration,
            "campaign_countries_languages_id": CONTEXT,
        });

        let episode: Episode = utils::from_json(payload.clone()).unwrap();
        assert_eq!(utils::to_json(&episode).unwrap(), payload);
    }

    // an integer duration stays an integer through a DynamoDB item
    let episode: Episode = utils::from_json(json!({
        "series_id": 42,
        "episode_id": 1001,
        "season_id": 3,
        "episode_position": 1,
        "duration": 90,
        "campaign_countries_languages_id": CONTEXT,
    }))
    .unwrap();
    let item = utils::to_item(&episode).unwrap();
    assert_eq!(
        item.get("duration"),
        Some(&aws_sdk_dynamodb::types::AttributeValue::N("90".into()))
    );
    let from_item: Episode = utils::from_item(item).unwrap();
    assert_eq!(from_item.duration, Some(90.into()));
    assert_eq!(utils::to_json(&from_item).unwrap()["duration"], json!(90));
}
