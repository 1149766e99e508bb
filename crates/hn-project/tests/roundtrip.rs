use hn_graph::{CheckOptions, ComponentAlgorithm};
use hn_project::schema::*;
use hn_project::{load, load_json, load_yaml, save, save_json, save_yaml, validate_network_file};

fn sample_network() -> NetworkFile {
    let mut file = NetworkFile::new("Sample loop");
    file.elements = vec![
        ElementDef {
            id: 1,
            name: Some("Pump".to_string()),
            kind: ElementKind::Pump,
            inlet: 10,
            outlet: 20,
        },
        ElementDef {
            id: 2,
            name: None,
            kind: ElementKind::Pipe,
            inlet: 20,
            outlet: 10,
        },
    ];
    file
}

#[test]
fn roundtrip_yaml_empty_network() {
    let file = NetworkFile::new("Empty Network");
    validate_network_file(&file).unwrap();

    let path = std::env::temp_dir().join("hn_project_roundtrip_empty.yaml");
    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_yaml_sample() {
    let file = sample_network();
    let path = std::env::temp_dir().join("hn_project_roundtrip_sample.yaml");
    save(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
    assert_eq!(loaded.network(), file.network());
}

#[test]
fn roundtrip_json_with_check_options() {
    let mut file = sample_network();
    file.check = CheckOptions {
        algorithm: ComponentAlgorithm::TransitiveClosure,
    };

    let path = std::env::temp_dir().join("hn_project_roundtrip_options.json");
    save_json(&path, &file).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn save_rejects_invalid_file() {
    let mut file = sample_network();
    file.elements[1].id = 1;

    let path = std::env::temp_dir().join("hn_project_roundtrip_invalid.yaml");
    let err = save_yaml(&path, &file).unwrap_err();
    assert!(matches!(err, hn_project::ProjectError::Validation(_)));
}
