use clap::Parser;
use zhuyi_config::{Config, SortOrder};

use crate::Cli;

fn configured(args: &[&str], insert_spaces: bool) -> Config {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut config = Config::default();
    config.annotate.insert_spaces = insert_spaces;
    cli.apply(&mut config);
    config
}

#[test]
fn test_spaces_flags() {
    assert!(configured(&["zhuyi", "--spaces", "example"], false).annotate.insert_spaces);
    assert!(!configured(&["zhuyi", "--no-spaces", "example"], true).annotate.insert_spaces);
    assert!(configured(&["zhuyi", "example"], true).annotate.insert_spaces);
    assert!(!configured(&["zhuyi", "--spaces", "--no-spaces", "example"], false).annotate.insert_spaces);
}

#[test]
fn test_annotate_text_after_flags() {
    let config = configured(&["zhuyi", "annotate", "--spaces", "--sort", "pinyin", "你好"], false);

    assert!(config.annotate.insert_spaces);
    assert_eq!(config.annotate.sort_order, SortOrder::Pronunciation);
}

#[test]
fn test_invalid_option_is_rejected() {
    assert!(Cli::try_parse_from(["zhuyi", "--hsk", "hsk9", "example"]).is_err());
}
