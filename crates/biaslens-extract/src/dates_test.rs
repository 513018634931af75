use super::*;

#[test]
fn json_ld_date_published_wins() {
    let html = r#"
    <html><head>
    <script type="application/ld+json">
    {"@type": "NewsArticle", "datePublished": "2024-05-02T08:00:00-04:00"}
    </script>
    <meta property="article:published_time" content="2099-01-01T00:00:00Z">
    </head><body></body></html>
    "#;
    assert_eq!(
        resolve_raw_date(html).as_deref(),
        Some("2024-05-02T08:00:00-04:00")
    );
}

#[test]
fn json_ld_array_takes_first_element() {
    let html = r#"
    <script type="application/ld+json">
    [{"datePublished": "2023-11-20"}, {"datePublished": "2001-01-01"}]
    </script>
    "#;
    assert_eq!(resolve_raw_date(html).as_deref(), Some("2023-11-20"));
}

#[test]
fn malformed_json_ld_is_skipped_not_fatal() {
    let html = r#"
    <script type="application/ld+json">{not json at all</script>
    <meta property="og:published_time" content="2024-01-15T12:00:00Z">
    "#;
    assert_eq!(
        resolve_raw_date(html).as_deref(),
        Some("2024-01-15T12:00:00Z")
    );
}

#[test]
fn meta_probe_order_is_fixed() {
    // article:published_time outranks og:published_time regardless of
    // document order.
    let html = r#"
    <meta property="og:published_time" content="2024-01-02">
    <meta property="article:published_time" content="2024-01-01">
    "#;
    assert_eq!(resolve_raw_date(html).as_deref(), Some("2024-01-01"));
}

#[test]
fn date_published_by_name_and_itemprop() {
    let by_name = r#"<meta name="datePublished" content="2022-07-04">"#;
    assert_eq!(resolve_raw_date(by_name).as_deref(), Some("2022-07-04"));

    let by_itemprop = r#"<meta itemprop="datePublished" content="2022-07-05">"#;
    assert_eq!(resolve_raw_date(by_itemprop).as_deref(), Some("2022-07-05"));
}

#[test]
fn time_element_datetime_attribute() {
    let html = r#"<body><time datetime="2024-08-09T10:11:12Z">August 9</time></body>"#;
    assert_eq!(
        resolve_raw_date(html).as_deref(),
        Some("2024-08-09T10:11:12Z")
    );
}

#[test]
fn selector_probes_are_last_resort() {
    let html = r#"<meta name="sailthru.date" content="2021-02-03 04:05:06">"#;
    assert_eq!(
        resolve_raw_date(html).as_deref(),
        Some("2021-02-03 04:05:06")
    );
}

#[test]
fn raw_value_is_returned_untouched() {
    // Offset is preserved exactly as published; no UTC conversion.
    let html = r#"<meta property="article:published_time" content="2024-05-02T08:00:00+05:30">"#;
    assert_eq!(
        resolve_raw_date(html).as_deref(),
        Some("2024-05-02T08:00:00+05:30")
    );
}

#[test]
fn no_probe_matches_yields_none() {
    assert_eq!(resolve_raw_date("<html><body><p>hi</p></body></html>"), None);
}

#[test]
fn normalize_rfc3339_converts_to_utc() {
    assert_eq!(
        normalize_date("2024-05-02T08:00:00-04:00").as_deref(),
        Some("2024-05-02 12:00:00")
    );
}

#[test]
fn normalize_naive_forms() {
    assert_eq!(
        normalize_date("2024-03-01T09:30:00").as_deref(),
        Some("2024-03-01 09:30:00")
    );
    assert_eq!(
        normalize_date("2024-03-01 09:30:00").as_deref(),
        Some("2024-03-01 09:30:00")
    );
    assert_eq!(
        normalize_date("2024-03-01").as_deref(),
        Some("2024-03-01 00:00:00")
    );
}

#[test]
fn normalize_rejects_garbage() {
    assert_eq!(normalize_date("first of March"), None);
    assert_eq!(normalize_date(""), None);
    assert_eq!(normalize_date("   "), None);
}
