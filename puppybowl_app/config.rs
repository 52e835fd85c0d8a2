use dotenvy::dotenv;
use std::env;

pub const DEFAULT_API_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2302-acc-pt-web-pt-b";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub cohort: String,
    pub port: u16,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = match env::var("PUPPYBOWL_API_URL") {
            Ok(val) => val,
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        let cohort = match env::var("PUPPYBOWL_COHORT") {
            Ok(val) => val,
            Err(_) => DEFAULT_COHORT.to_string(),
        };

        let port = match env::var("PUPPYBOWL_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let log_dir = match env::var("PUPPYBOWL_LOG_DIR") {
            Ok(val) => val,
            Err(_) => "logs".to_string(),
        };

        Self {
            api_url,
            cohort,
            port,
            log_dir,
        }
    }

    /// Base path every roster request is scoped to.
    pub fn cohort_url(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.cohort)
    }
}
