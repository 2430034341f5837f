use std::net::SocketAddr;

use taskdeck::{cli::home_url, github::profile::*, types::GithubUser};

#[test]
fn test_profile_rows_with_full_profile() {
    let user: GithubUser = serde_json::from_str(
        r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "bio": "Mascot",
            "public_repos": 8,
            "followers": 9000,
            "html_url": "https://github.com/octocat"
        }"#,
    )
    .unwrap();

    let rows = profile_rows(&user);
    let values: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.field.as_str(), r.value.as_str()))
        .collect();

    assert_eq!(
        values,
        vec![
            ("Login", "octocat"),
            ("Name", "The Octocat"),
            ("Bio", "Mascot"),
            ("Public repos", "8"),
            ("Followers", "9000"),
            ("Profile", "https://github.com/octocat"),
        ]
    );
}

#[test]
fn test_profile_rows_with_missing_values() {
    // GitHub sends null for unset name and bio
    let user: GithubUser =
        serde_json::from_str(r#"{"login": "ghost", "name": null, "bio": ""}"#).unwrap();

    let rows = profile_rows(&user);

    assert_eq!(rows[0].value, "ghost");
    assert!(rows[1..].iter().all(|r| r.value == "-"));
}

#[test]
fn test_user_agent_names_the_crate() {
    let agent = user_agent();

    assert!(agent.starts_with("taskdeck/"));
    assert!(agent.ends_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_home_url() {
    let wildcard: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    assert_eq!(home_url(wildcard), "http://localhost:8080/");

    let loopback: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(home_url(loopback), "http://127.0.0.1:3000/");
}
