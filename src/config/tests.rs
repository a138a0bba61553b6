use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_dankira_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("DANKIRA_CONFIG_PATH", "/tmp/dankira-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/dankira-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("dankira")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("dankira")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_classic_player() {
    let s = Settings::default();
    assert_eq!(s.library.dir, PathBuf::from("music"));
    assert_eq!(s.playback.initial_volume, 50);
    assert_eq!(s.playback.speed, None);
    assert_eq!(s.playback.end_of_track, EndOfTrack::Continue);
    assert_eq!(s.ui.progress_poll_ms, 1000);
    assert!(!s.ui.show_tracks);
    assert!(!s.ui.show_favorites);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
dir = "/srv/tunes"
extensions = ["mp3"]
include_hidden = false
follow_links = false
display_fields = ["artist", "stem"]
display_separator = "::"

[playback]
initial_volume = 80
speed = 150
end_of_track = "stall"

[ui]
header_text = "hello"
progress_poll_ms = 250
show_tracks = true

[controls]
volume_step = 10

[log]
file = "/tmp/dankira-test.log"
filter = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DANKIRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("DANKIRA__PLAYBACK__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.dir, PathBuf::from("/srv/tunes"));
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert!(matches!(s.library.display_fields[0], TrackDisplayField::Artist));
    assert!(matches!(s.library.display_fields[1], TrackDisplayField::Stem));
    assert_eq!(s.library.display_separator, "::");
    assert_eq!(s.playback.initial_volume, 80);
    assert_eq!(s.playback.speed, Some(150));
    assert_eq!(s.playback.end_of_track, EndOfTrack::AdvanceOnly);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.progress_poll_ms, 250);
    assert!(s.ui.show_tracks);
    assert!(!s.ui.show_favorites);
    assert_eq!(s.controls.volume_step, 10);
    assert_eq!(s.log.file, Some(PathBuf::from("/tmp/dankira-test.log")));
    assert_eq!(s.log.filter, "debug");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
initial_volume = 20
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DANKIRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("DANKIRA__PLAYBACK__INITIAL_VOLUME", "90");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.initial_volume, 90);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.playback.initial_volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.speed = Some(110);
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.speed = Some(175);
    assert!(s.validate().is_ok());

    let mut s = Settings::default();
    s.ui.progress_poll_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.volume_step = 0;
    assert!(s.validate().is_err());
}
