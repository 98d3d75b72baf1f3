mod common;

use std::io::Write;

use anyhow::Result;
use common::*;
use folio::{
    Config, Theme,
    core::{data::DataError, nav::TieBreak},
};

const MINIMAL_PROFILE: &str = r#"
[profile]
name = "Jane Doe"
title = "Engineer"
email = "jane@example.com"
phone = "555"
location = "Nowhere"
bio = "Builds things. Breaks things too."
long_bio = "Longer."
resume = "/cv.pdf"
"#;

fn project_toml(id: u32) -> String {
    format!(
        r#"
[[projects]]
id = {id}
title = "P{id}"
description = "d"
long_description = "ld"
technologies = ["Rust"]
image = "/p.jpg"
demo_url = "https://demo"
source_url = "https://src"
category = "Tools"
"#
    )
}

#[test]
fn test_embedded_dataset_loads() -> Result<()> {
    let data = PortfolioData::embedded()?;

    assert_eq!(data.profile.name, "Nilakshi Sute");
    assert_eq!(data.profile.first_name(), "Nilakshi");
    assert_eq!(data.projects.len(), 6);
    assert_eq!(data.skill_categories.len(), 4);
    assert_eq!(
        folio::core::filter::projects::available_categories(&data.projects),
        vec!["all", "Full Stack", "Frontend"]
    );
    assert_eq!(
        folio::core::filter::projects::featured(&data.projects)
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>(),
        vec![1, 2, 4]
    );

    Ok(())
}

#[test]
fn test_duplicate_project_ids_are_rejected() -> Result<()> {
    let source = format!("{}{}{}", MINIMAL_PROFILE, project_toml(7), project_toml(7));

    let err = PortfolioData::from_toml_str(&source).unwrap_err();

    assert!(matches!(err, DataError::DuplicateProjectId(7)));

    Ok(())
}

#[test]
fn test_skill_levels_are_bounded() -> Result<()> {
    let source = format!(
        r#"{}
[[skill_categories]]
id = "tools"
name = "Tools"
description = "d"

[[skill_categories.skills]]
name = "Git"
level = 101
experience = "1 year"
description = "VCS"
"#,
        MINIMAL_PROFILE
    );

    let err = PortfolioData::from_toml_str(&source).unwrap_err();

    assert!(matches!(err, DataError::LevelOutOfRange { level: 101, .. }));
    assert_eq!(
        err.to_string(),
        "skill \"Git\" has level 101, expected at most 100"
    );

    Ok(())
}

#[test]
fn test_duplicate_skill_categories_are_rejected() -> Result<()> {
    let category = "\n[[skill_categories]]\nid = \"design\"\nname = \"Design\"\ndescription = \"d\"\n";
    let source = format!("{}{}{}", MINIMAL_PROFILE, category, category);

    let err = PortfolioData::from_toml_str(&source).unwrap_err();

    assert!(matches!(err, DataError::DuplicateCategory(ref id) if id == "design"));

    Ok(())
}

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}{}", MINIMAL_PROFILE, project_toml(1))?;

    let data = PortfolioData::load(file.path())?;

    assert_eq!(data.projects.len(), 1);
    assert!(data.skill_categories.is_empty());
    assert_eq!(data.profile.headline(), "Builds things.");
    assert_eq!(
        data.profile.copyright_line(2024),
        "© 2024 Jane Doe. All rights reserved."
    );

    assert!(PortfolioData::load("/definitely/not/here.toml").is_err());

    Ok(())
}

#[test]
fn test_config_defaults() -> Result<()> {
    let config = Config::from_toml_str("")?;

    assert_eq!(config, Config::default());
    assert_eq!(config.tracking.visibility_threshold, 0.3);
    assert_eq!(config.tracking.tie_break, TieBreak::GreatestRatio);
    assert_eq!(config.tracking.deep_link_delay().as_millis(), 100);
    assert_eq!(config.contact.submit_delay().as_millis(), 1500);
    assert_eq!(config.ui.splash().as_millis(), 1000);
    assert_eq!(config.ui.nav_scroll_lock().as_millis(), 1000);
    assert_eq!(config.ui.theme, Theme::Light);
    assert!(config.data_path.is_none());

    Ok(())
}

#[test]
fn test_config_partial_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "[tracking]\ntie_break = \"last-observed\"\nvisibility_threshold = 0.5\n\n[ui]\ntheme = \"dark\""
    )?;

    let config = Config::load(file.path())?;

    assert_eq!(config.tracking.tie_break, TieBreak::LastObserved);
    assert_eq!(config.tracking.visibility_threshold, 0.5);
    assert_eq!(config.tracking.deep_link_delay_ms, 100);
    assert_eq!(config.ui.theme, Theme::Dark);
    assert_eq!(config.contact.submit_delay_ms, 1500);

    Ok(())
}

#[test]
fn test_config_rejects_bad_threshold() -> Result<()> {
    assert!(Config::from_toml_str("[tracking]\nvisibility_threshold = 0.0").is_err());
    assert!(Config::from_toml_str("[tracking]\nvisibility_threshold = 1.2").is_err());
    assert!(Config::from_toml_str("[ui]\ntheme = \"sepia\"").is_err());

    Ok(())
}

#[test]
fn test_theme_toggle_and_parse() -> Result<()> {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert_eq!("dark".parse::<Theme>()?, Theme::Dark);
    assert!("sepia".parse::<Theme>().is_err());

    Ok(())
}
