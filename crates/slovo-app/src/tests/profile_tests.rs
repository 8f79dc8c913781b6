use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::profile::{
    Profile, add_profile_from_default, bootstrap, init_user_config, load_user_profile,
    resolve_store_path,
};

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn write_main(root: &Path, select_min_len: usize) {
    let mut config = slovo_config::Config::default();
    config.ocr.select_min_len = select_min_len;
    let profile = Profile {
        name: "main".to_string(),
        value: config,
    };
    std::fs::write(
        root.join("profiles").join("main.json"),
        serde_json::to_string(&profile).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_init_creates_main_profile() {
    let dir = tempfile::tempdir().unwrap();

    init_user_config(dir.path()).unwrap();

    let main = dir.path().join("profiles").join("main.json");
    let raw = std::fs::read_to_string(main).unwrap();
    let profile: Profile = serde_json::from_str(&raw).unwrap();
    assert_eq!(profile.name, "main");
}

#[test]
fn test_missing_profile_falls_back_to_main() {
    let dir = tempfile::tempdir().unwrap();
    init_user_config(dir.path()).unwrap();
    write_main(dir.path(), 5);

    let config = load_user_profile(dir.path(), "work").unwrap();
    assert_eq!(config.ocr.select_min_len, 5);
}

#[test]
fn test_new_profile_clones_main() {
    let dir = tempfile::tempdir().unwrap();
    init_user_config(dir.path()).unwrap();
    write_main(dir.path(), 4);

    let path = add_profile_from_default(dir.path(), "travel").unwrap();
    assert!(path.ends_with("travel.json"));

    let config = load_user_profile(dir.path(), "travel").unwrap();
    assert_eq!(config.ocr.select_min_len, 4);
}

#[test]
fn test_store_path_resolution() {
    let mut config = slovo_config::Config::default();
    config.store.path = "words.json".to_string();
    assert_eq!(
        resolve_store_path(Path::new("/home/me/.slovo"), &config),
        Path::new("/home/me/.slovo/words.json")
    );

    config.store.path = "/tmp/elsewhere.json".to_string();
    assert_eq!(
        resolve_store_path(Path::new("/home/me/.slovo"), &config),
        Path::new("/tmp/elsewhere.json")
    );
}

#[test]
fn test_bootstrap_logs_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    bootstrap(dir.path(), "main", subscriber).unwrap();

    assert!(dir.path().join("profiles").join("main.json").exists());
    assert!(captured.text().contains("Created main profile"));
}
