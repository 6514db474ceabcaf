use creative_extract::{extract_card, CardInput, Error, Options, Rect, TextBlock};

const LIBRARY_CARD: &str = r#"{
    "rawText": "Bean Box\nSponsored\nFresh roast, delivered weekly.\nbeanbox.example.com\nCoffee Subscription Box\nCancel anytime\nSubscribe",
    "brandSignals": {
        "sponsoredNeighbors": [
            {"text": "Bean Box • Follow", "bounds": {"x": 60, "y": 10, "width": 120, "height": 20}}
        ],
        "logos": [
            {"sourceUrl": "/avatars/beanbox.png", "width": 40, "height": 40,
             "bounds": {"x": 10, "y": 5, "width": 40, "height": 40}}
        ]
    },
    "media": [
        {"sourceUrl": "/scontent/creative.jpg", "width": 1080, "height": 1350}
    ],
    "options": {"baseUrl": "https://www.facebook.com/ads/library/"}
}"#;

fn parse(json: &str) -> CardInput {
    CardInput::from_json(json).expect("card input parses")
}

#[test]
fn library_card_extracts_all_fields() {
    let input = parse(LIBRARY_CARD);
    let options = input.options.clone().unwrap_or_default();
    options.validate().expect("options are valid");

    let creative = extract_card(&input, &options);

    assert_eq!(creative.brand.name, "Bean Box");
    assert_eq!(
        creative.brand.logo_url.as_deref(),
        Some("https://www.facebook.com/avatars/beanbox.png")
    );
    assert_eq!(creative.primary_text, "Fresh roast, delivered weekly.");
    assert_eq!(creative.domain, "beanbox.example.com");
    assert_eq!(creative.headline, "Coffee Subscription Box");
    assert_eq!(creative.description, "Cancel anytime");
    assert_eq!(creative.cta_label, "Subscribe");
    assert_eq!(
        creative.ranked_images,
        vec!["https://www.facebook.com/scontent/creative.jpg"]
    );
    assert_eq!(creative.aspect_ratio, Some(0.8));
    assert!(creative.warnings.is_empty());
}

#[test]
fn relative_media_without_base_url_is_reported() {
    let input = parse(LIBRARY_CARD);
    let creative = extract_card(&input, &Options::default());

    assert!(creative.ranked_images.is_empty());
    assert_eq!(creative.aspect_ratio, None);
    assert_eq!(creative.warnings.len(), 1);
    assert!(creative.warnings[0].contains("/scontent/creative.jpg"));
    assert!(creative.brand.logo_url.is_none());
}

#[test]
fn brand_hint_is_used_when_signals_are_empty() {
    let input = parse(r#"{"rawText": "Acme Sponsored\nBoots for every trail.", "brandHint": "Acme"}"#);
    let creative = extract_card(&input, &Options::default());
    assert_eq!(creative.brand.name, "Acme");
    assert_eq!(creative.primary_text, "Boots for every trail.");
}

#[test]
fn text_blocks_are_read_in_visual_order() {
    let input = CardInput {
        raw_text: "ignored".to_string(),
        text_blocks: vec![
            TextBlock::new("Shop Now", Some(Rect::new(400.0, 720.0, 100.0, 30.0))),
            TextBlock::new("acme.io", Some(Rect::new(0.0, 700.0, 200.0, 20.0))),
            TextBlock::new("Trail Runner Pro", Some(Rect::new(0.0, 720.0, 300.0, 20.0))),
            TextBlock::new("Our new trail shoe is here.", Some(Rect::new(0.0, 40.0, 500.0, 40.0))),
        ],
        media: vec![creative_extract::MediaCandidate::image(
            "https://cdn.example.com/shoe.jpg",
            500,
            500,
        )
        .with_bounds(Rect::new(0.0, 100.0, 500.0, 500.0))],
        ..CardInput::default()
    };

    let creative = extract_card(&input, &Options::default());
    assert_eq!(creative.primary_text, "Our new trail shoe is here.");
    assert_eq!(creative.domain, "acme.io");
    assert_eq!(creative.headline, "Trail Runner Pro");
    assert_eq!(creative.cta_label, "Shop Now");
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(CardInput::from_json("not json"), Err(Error::InvalidInput(_))));
    assert!(matches!(
        CardInput::from_json(r#"{"media": [{"width": "wide"}]}"#),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn invalid_options_are_rejected() {
    let input = parse(r#"{"options": {"headlineMinChars": 80, "headlineMaxChars": 20}}"#);
    let options = input.options.expect("options present");
    assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
}

#[test]
fn input_round_trips_through_json() {
    let input = parse(LIBRARY_CARD);
    let json = serde_json::to_string(&input).expect("input serializes");
    assert_eq!(parse(&json), input);
}
