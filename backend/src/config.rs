use std::env;
use dotenv::dotenv;
use serde::Deserialize;
use log::{info, warn};

const DEFAULT_BACKEND_URL: &str = "http://0.0.0.0:5000";
const DEFAULT_PORT: u16 = 5000;
const DEV_JWT_SECRET: &str = "dev-only-secret-change-me";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" | "plain" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Used when `RUST_LOG` is not set
    pub default_filter: String,
}

fn required_var(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("{} must be set in production", name).into())
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    fn parse_backend_url(url: &str) -> (String, u16) {
        // BACKEND_URL like "http://localhost:5000"
        if let Ok(parsed_url) = url::Url::parse(url) {
            let host = parsed_url.host_str().unwrap_or("127.0.0.1").to_string();
            let port = parsed_url.port().unwrap_or(DEFAULT_PORT);
            (host, port)
        } else {
            ("127.0.0.1".to_string(), DEFAULT_PORT)
        }
    }

    fn environment_from_env() -> Environment {
        env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development)
    }

    fn load_env_files() {
        // ENV_FILE_PATH replaces the .env lookup entirely
        if let Ok(env_file_path) = env::var("ENV_FILE_PATH") {
            if !env_file_path.is_empty() {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
                return;
            }
        }

        dotenv().ok();
        let env_file = format!(".env.{:?}", Self::environment_from_env()).to_lowercase();
        if env_file != ".env.development" {
            let _ = dotenv::from_filename(&env_file);
        }
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_env_files();

        let environment = Self::environment_from_env();

        let config = Config {
            environment: environment.clone(),
            server: Self::load_server_config(&environment),
            database: Self::load_database_config(&environment)?,
            auth: Self::load_auth_config(&environment)?,
            cors: Self::load_cors_config(&environment),
            logging: Self::load_logging_config(&environment),
        };

        config.validate()?;
        Ok(config)
    }

    fn load_server_config(env: &Environment) -> ServerConfig {
        let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let (host, port) = Self::parse_backend_url(&backend_url);
        let default_workers = match env {
            Environment::Production => 8,
            Environment::Development | Environment::Test => 1,
        };

        ServerConfig {
            // SERVER_HOST takes precedence over the BACKEND_URL host
            host: env::var("SERVER_HOST").unwrap_or(host),
            port: parsed_var("PORT", parsed_var("SERVER_PORT", port)),
            workers: parsed_var("BACKEND_WORKERS", default_workers),
        }
    }

    fn load_database_config(env: &Environment) -> Result<DatabaseConfig, Box<dyn std::error::Error>> {
        let config = match env {
            Environment::Development => {
                let arango_url = env::var("ARANGO_URL");
                match &arango_url {
                    Ok(url) => info!("Found ARANGO_URL in environment: {}", url),
                    Err(_) => warn!("ARANGO_URL not found in environment, using default"),
                }

                DatabaseConfig {
                    url: arango_url.unwrap_or_else(|_| "http://localhost:8529".to_string()),
                    name: env::var("ARANGO_DB").unwrap_or_else(|_| "spirit_esports_dev".to_string()),
                    username: env::var("ARANGO_USERNAME").unwrap_or_else(|_| "root".to_string()),
                    password: env::var("ARANGO_PASSWORD").unwrap_or_else(|_| "test".to_string()),
                }
            }
            Environment::Production => DatabaseConfig {
                url: required_var("ARANGO_URL")?,
                name: required_var("ARANGO_DB")?,
                username: required_var("ARANGO_USERNAME")?,
                password: required_var("ARANGO_PASSWORD")?,
            },
            Environment::Test => DatabaseConfig {
                url: env::var("ARANGO_URL").unwrap_or_else(|_| "http://test-arangodb:8529".to_string()),
                name: env::var("ARANGO_DB").unwrap_or_else(|_| "spirit_esports_test".to_string()),
                username: env::var("ARANGO_USERNAME").unwrap_or_else(|_| "root".to_string()),
                password: env::var("ARANGO_PASSWORD").unwrap_or_else(|_| "test".to_string()),
            },
        };
        Ok(config)
    }

    fn load_auth_config(env: &Environment) -> Result<AuthConfig, Box<dyn std::error::Error>> {
        let jwt_secret = match env {
            Environment::Production => required_var("JWT_SECRET")?,
            Environment::Development | Environment::Test => {
                env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string())
            }
        };

        Ok(AuthConfig {
            jwt_secret,
            token_ttl_hours: parsed_var("JWT_TTL_HOURS", 24),
        })
    }

    fn load_cors_config(env: &Environment) -> CorsConfig {
        let defaults = match env {
            Environment::Production => "https://spiritesports.netlify.app",
            Environment::Development | Environment::Test => "http://localhost:3000,http://127.0.0.1:3000",
        };
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        CorsConfig { allowed_origins }
    }

    fn load_logging_config(env: &Environment) -> LoggingConfig {
        let default_format = match env {
            Environment::Production => LogFormat::Json,
            Environment::Development | Environment::Test => LogFormat::Pretty,
        };

        LoggingConfig {
            format: parsed_var("LOG_FORMAT", default_format),
            default_filter: "info,actix_web=info".to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.environment == Environment::Production {
            if self.database.password == "test" {
                return Err("Production database password cannot be 'test'".into());
            }
            if self.auth.jwt_secret == DEV_JWT_SECRET || self.auth.jwt_secret.len() < 32 {
                return Err("Production JWT_SECRET must be at least 32 characters".into());
            }
        }

        if self.server.port == 0 {
            return Err("Server port cannot be 0".into());
        }
        if self.server.workers == 0 {
            return Err("Worker count cannot be 0".into());
        }
        if self.auth.token_ttl_hours <= 0 {
            return Err("JWT_TTL_HOURS must be positive".into());
        }
        if self.cors.allowed_origins.is_empty() {
            return Err("At least one CORS origin must be allowed".into());
        }

        Ok(())
    }

    /// Called once logging is up, so the summary is not lost
    pub fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("Database: {} at {}", self.database.name, self.database.url);
        info!("Token lifetime: {}h (secret redacted)", self.auth.token_ttl_hours);
        info!("CORS origins: {}", self.cors.allowed_origins.join(", "));

        if self.environment == Environment::Development {
            warn!("Running in development mode - some security features are disabled");
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
