use anyhow::Result;
use rated_extremes::{
    EtlEngine, EtlError, LocalStorage, ParserMode, RatedLevelPipeline, RunConfig, RunReport,
    TomlConfig,
};
use tempfile::TempDir;

const EXPORT: &str = "Name,Creator,ID,Stars,Difficulty,Featured\n\
Bloodbath,Riot,10565740,10,ExtreDemon10*,Yes\n\
Slaughterhouse,icedcave,,10,Other,Yes\n\
Short,row\n\
Acheron,ryamu,73667628,10,ExtreDemon10*,No\n\
Count: 4,,,,ExtreDemon10*,\n";

fn config_in(dir: &TempDir) -> RunConfig {
    RunConfig {
        input_path: dir.path().join("rated.csv").to_string_lossy().to_string(),
        output_path: dir.path().join("Extremes.txt").to_string_lossy().to_string(),
        ..RunConfig::default()
    }
}

/// 標頭與最後一行不計入，輸出保持原始順序
#[tokio::test]
async fn test_writes_matching_names_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("rated.csv"), EXPORT).await?;

    let pipeline = RatedLevelPipeline::new(LocalStorage::default(), config_in(&temp_dir));
    let summary = EtlEngine::new(pipeline).run().await?;

    assert_eq!(summary.rows_considered, 4);
    assert_eq!(summary.rows_matched, 2);
    assert_eq!(summary.rows_skipped_short, 1);

    let written = tokio::fs::read_to_string(temp_dir.path().join("Extremes.txt")).await?;
    assert_eq!(written, "Bloodbath\nAcheron");
    Ok(())
}

#[tokio::test]
async fn test_rerun_is_idempotent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("rated.csv"), EXPORT).await?;
    let output = temp_dir.path().join("Extremes.txt");
    tokio::fs::write(&output, "stale content from an older export\nmore\nlines").await?;

    for _ in 0..2 {
        let pipeline = RatedLevelPipeline::new(LocalStorage::default(), config_in(&temp_dir));
        EtlEngine::new(pipeline).run().await?;
        assert_eq!(tokio::fs::read_to_string(&output).await?, "Bloodbath\nAcheron");
    }
    Ok(())
}

#[tokio::test]
async fn test_no_matches_writes_empty_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("rated.csv"), EXPORT).await?;

    let config = RunConfig {
        tag: "Auto".to_string(),
        ..config_in(&temp_dir)
    };
    let pipeline = RatedLevelPipeline::new(LocalStorage::default(), config);
    let summary = EtlEngine::new(pipeline).run().await?;

    assert_eq!(summary.rows_matched, 0);
    let written = tokio::fs::read_to_string(temp_dir.path().join("Extremes.txt")).await?;
    assert!(written.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_input_leaves_output_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = RatedLevelPipeline::new(LocalStorage::default(), config_in(&temp_dir));

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, EtlError::InputNotFound { .. }));
    assert!(!temp_dir.path().join("Extremes.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_csv_parser_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_string_lossy().replace('\\', "/");
    tokio::fs::write(
        temp_dir.path().join("rated.csv"),
        "Name,Creator,ID,Stars,Difficulty\n\
         \"Kenos, remastered\",Bianox,1,10,ExtreDemon10*\n\
         Tartarus,Riot,2,10,ExtreDemon10*\n\
         end\n",
    )
    .await?;

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[input]
path = "{base}/rated.csv"
parser = "csv"

[output]
path = "{base}/Extremes.txt"
"#
    ))?
    .into_run_config();
    assert_eq!(config.parser, ParserMode::Csv);

    let pipeline = RatedLevelPipeline::new(LocalStorage::default(), config);
    EtlEngine::new(pipeline).run().await?;

    let written = tokio::fs::read_to_string(temp_dir.path().join("Extremes.txt")).await?;
    assert_eq!(written, "Kenos, remastered\nTartarus");
    Ok(())
}

#[tokio::test]
async fn test_report_lists_counts_and_names() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("rated.csv"), EXPORT).await?;
    let report_path = temp_dir.path().join("report.json").to_string_lossy().to_string();

    let config = config_in(&temp_dir);
    let storage = LocalStorage::default();
    let pipeline = RatedLevelPipeline::new(storage.clone(), config.clone());
    let (summary, outcome) = EtlEngine::new(pipeline).run_with_outcome().await?;

    RunReport::new(&config, &summary, &outcome)
        .write(&storage, &report_path)
        .await?;

    let report: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&report_path).await?)?;
    assert_eq!(report["tag"], "ExtreDemon10*");
    assert_eq!(report["parser"], "split");
    assert_eq!(report["rows_matched"], 2);
    assert_eq!(report["names"], serde_json::json!(["Bloodbath", "Acheron"]));
    assert!(report["finished_at"].is_string());
    Ok(())
}
