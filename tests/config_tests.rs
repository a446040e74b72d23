use lifepulse::config::Config;
use std::path::Path;

#[test]
fn token_file_sits_beside_the_config_file() {
    assert_eq!(
        Config::token_file_beside(Path::new("/etc/lifepulse/custom.yaml")),
        Path::new("/etc/lifepulse/tokens.json")
    );
}

#[test]
fn bare_config_name_keeps_tokens_in_the_working_dir() {
    assert_eq!(
        Config::token_file_beside(Path::new("lifepulse.yaml")),
        Path::new("tokens.json")
    );
}
