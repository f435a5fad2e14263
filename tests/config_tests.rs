//! Tests for the type-safe configuration builder pattern

use tagcheck::config::ScanConfig;

#[test]
fn builder_requires_marker() {
    // This should not compile if uncommented - build() only exists once a
    // marker has been provided.
    // let config = ScanConfig::builder().build();

    let config = ScanConfig::builder().marker("GTM-MBWPPD2").build().unwrap();
    assert_eq!(config.marker(), "GTM-MBWPPD2");
}

#[test]
fn builder_optional_fields_have_defaults() {
    let config = ScanConfig::builder().marker("GTM-MBWPPD2").build().unwrap();

    assert_eq!(config.concurrency(), 5);
    assert_eq!(config.page_load_timeout_secs(), 10);
    assert_eq!(config.settle_delay_ms(), 1500);
    assert_eq!(config.fetch_timeout_secs(), 10);
    assert_eq!(config.max_sample_matches(), 5);
    assert!(config.headless());
    assert!(config.profile_root().is_none());
}

#[test]
fn builder_overrides_stick() {
    let config = ScanConfig::builder()
        .concurrency(12)
        .marker("needle")
        .page_load_timeout_secs(30)
        .settle_delay_ms(250)
        .fetch_timeout_secs(3)
        .max_sample_matches(2)
        .headless(false)
        .build()
        .unwrap();

    assert_eq!(config.concurrency(), 12);
    assert_eq!(config.page_load_timeout_secs(), 30);
    assert_eq!(config.settle_delay_ms(), 250);
    assert_eq!(config.fetch_timeout_secs(), 3);
    assert_eq!(config.max_sample_matches(), 2);
    assert!(!config.headless());
}

#[test]
fn builder_rejects_blank_marker() {
    assert!(ScanConfig::builder().marker("   ").build().is_err());
    assert!(ScanConfig::builder().marker("").build().is_err());
}

#[test]
fn builder_clamps_zero_concurrency() {
    let config = ScanConfig::builder()
        .marker("needle")
        .concurrency(0)
        .build()
        .unwrap();
    assert_eq!(config.concurrency(), 1);
}
