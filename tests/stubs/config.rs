pub const FULL_CONFIG: &str = r#"
[broker]
host = "broker.example.com"
port = 8883

[api]
base_url = "https://api.waqi.info"
token_file = "/etc/aqp/token.txt"
timeout_secs = 10

[producer]
cities = ["zurich", "geneva"]
topic_root = "aq"
refresh_interval_secs = 60
"#;

pub const BROKER_ONLY_CONFIG: &str = r#"
[broker]
host = "broker.example.com"
"#;

pub const BAD_CONFIG: &str = r#"
[producer]
refresh_interval_secs = "not-a-number"
"#;
