use std::fs;
use std::path::Path;

use tabular_target::{
    guess_target, load_dataset, DatasetError, DatasetLoader, Overrides, PathResolver, Settings,
    Strategy, TargetSelector,
};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn legacy_dataset_selects_renamed_target() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/data/modeldata.csv",
        "id,Region,SLA_Breached,Amount\n1,north,0,10.5\n2,south,1,3.25\n3,east,0,7.0\n",
    );

    let df = load_dataset(&Overrides::default(), dir.path()).unwrap();
    let choice = TargetSelector::new()
        .select(&df, None, &Overrides::default())
        .unwrap();
    assert_eq!(choice.column, "IsInsurable");
    assert_eq!(choice.strategy, Strategy::DefaultName);
}

#[test]
fn override_path_and_target_flow_through() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/data/modeldata.csv", "x,y\n1,2\n");
    write(
        dir.path(),
        "custom/claims.csv",
        "claim_id,paid_out,Notes\n1,yes,a\n2,no,b\n3,yes,c\n",
    );

    let overrides = Overrides::default()
        .with_csv_path(dir.path().join("custom/claims.csv"))
        .with_target("Claim ID");
    let df = load_dataset(&overrides, dir.path()).unwrap();
    assert_eq!(guess_target(&df, None, &overrides).unwrap(), "claim_id");
}

#[test]
fn binary_heuristic_on_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/data/datasets/tabular/modeldata_demo.csv",
        "id,Amount,Flag,Notes\n1,1.5,yes,a\n2,2.5,,b\n3,3.5,no,c\n",
    );

    let df = load_dataset(&Overrides::default(), dir.path()).unwrap();
    assert_eq!(guess_target(&df, None, &Overrides::default()).unwrap(), "Flag");
}

#[test]
fn settings_drive_loader_and_selector() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "warehouse/churn.csv", "customer,Churned,Notes\n1,2,a\n2,3,b\n3,4,c\n");

    let settings = Settings {
        candidates: vec!["warehouse/churn.csv".into()],
        default_target: "Churned".to_string(),
        ..Settings::default()
    }
    .with_repo_root(dir.path());

    let df = DatasetLoader::from_settings(&settings)
        .load(&Overrides::default())
        .unwrap();
    let choice = TargetSelector::from_settings(&settings)
        .select(&df, None, &Overrides::default())
        .unwrap();
    assert_eq!(choice.column, "Churned");
}

#[test]
fn missing_dataset_reports_override_variable() {
    let dir = tempfile::tempdir().unwrap();
    let overrides = Overrides::default().with_csv_path(dir.path().join("gone.csv"));
    let err = PathResolver::new(dir.path()).resolve(&overrides).unwrap_err();
    assert!(matches!(err, DatasetError::NotFound { .. }));
    assert!(err.to_string().contains("CSV_PATH"));
}

#[test]
fn na_markers_do_not_hide_binary_columns() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/data/modeldata.csv",
        "id,Flag,Notes\n1,yes,a\n2,NA,b\n3,no,c\n4,yes,d\n",
    );
    let df = load_dataset(&Overrides::default(), dir.path()).unwrap();
    assert_eq!(guess_target(&df, None, &Overrides::default()).unwrap(), "Flag");

    write(
        dir.path(),
        "src/data/modeldata.csv",
        "id,Label,Notes\n1,1,a\n2,NaN,b\n3,0,c\n4,1,d\n",
    );
    let df = load_dataset(&Overrides::default(), dir.path()).unwrap();
    assert_eq!(guess_target(&df, None, &Overrides::default()).unwrap(), "Label");
}
