// Installing a loaded record at process start.
//
// Kept in its own test binary: the record is process-wide and can only be
// set once.

use caffee_env::{EnvironmentConfig, EnvironmentError, environment, install};

#[test]
fn test_install_once_then_read_only() {
    let mut config = EnvironmentConfig::production();
    config.api_server_url = "https://api.caffee.example".into();

    let installed = install(config.clone()).unwrap();
    assert_eq!(installed, &config);
    assert!(std::ptr::eq(installed, environment()));

    let err = install(EnvironmentConfig::default()).unwrap_err();
    assert!(matches!(err, EnvironmentError::AlreadyInstalled));
    assert_eq!(
        environment().api_url("/drinks").unwrap().as_str(),
        "https://api.caffee.example/drinks"
    );
}
