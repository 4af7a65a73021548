use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub files: FilesConfig,
    pub log: LogConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Upload limits for the files feature
#[derive(Debug, Clone, Copy)]
pub struct FilesConfig {
    /// Largest accepted file content, in bytes
    pub max_file_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Fallback filter directive when RUST_LOG is not set
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        let app = AppConfig::from_env()?;
        let swagger = SwaggerConfig::from_env(&app);

        Ok(Config {
            database: DatabaseConfig::from_env()?,
            files: FilesConfig::from_env()?,
            log: LogConfig::from_env()?,
            app,
            swagger,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let name = env::var("APP_NAME").unwrap_or_else(|_| "filestore".to_string());
        let version =
            env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8004".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            name,
            version,
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl FilesConfig {
    pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let raw = env::var("MAX_FILE_SIZE").ok();
        Self::parse(raw.as_deref())
    }

    fn parse(raw: Option<&str>) -> Result<Self, String> {
        let max_file_size = match raw {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| "MAX_FILE_SIZE must be a valid number".to_string())?,
            None => Self::DEFAULT_MAX_FILE_SIZE,
        };

        if max_file_size == 0 {
            return Err("MAX_FILE_SIZE must be greater than zero".to_string());
        }

        Ok(Self { max_file_size })
    }

    /// Limit in whole megabytes, as quoted in "file too large" messages
    pub fn max_file_size_mb(&self) -> usize {
        self.max_file_size / (1024 * 1024)
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, String> {
        let level = env::var("LOG_LEVEL")
            .map(|s| s.to_lowercase())
            .unwrap_or_else(|_| "info".to_string());
        let format = env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

        Ok(Self {
            level,
            format: LogFormat::parse(&format)?,
        })
    }
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(format!("LOG_FORMAT must be 'json' or 'text', got '{}'", other)),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env(app: &AppConfig) -> Self {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| format!("{} API", app.name));
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| app.version.clone());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Binary file storage with metadata".to_string());

        Self {
            title,
            version,
            description,
        }
    }
}
