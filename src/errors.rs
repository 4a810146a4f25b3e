use std::fmt;

#[derive(Debug, Clone)]
pub enum MinilinkError {
    InvalidInput(String),
    DuplicateCode(String),
    DuplicateUrl(String),
    CollisionExhausted(String),
    DigestCapacityExceeded(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Serialization(String),
    FileOperation(String),
}

impl MinilinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            MinilinkError::InvalidInput(_) => "E001",
            MinilinkError::DuplicateCode(_) => "E002",
            MinilinkError::DuplicateUrl(_) => "E003",
            MinilinkError::CollisionExhausted(_) => "E004",
            MinilinkError::DigestCapacityExceeded(_) => "E005",
            MinilinkError::DatabaseConfig(_) => "E006",
            MinilinkError::DatabaseConnection(_) => "E007",
            MinilinkError::DatabaseOperation(_) => "E008",
            MinilinkError::Serialization(_) => "E009",
            MinilinkError::FileOperation(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            MinilinkError::InvalidInput(_) => "Invalid Input",
            MinilinkError::DuplicateCode(_) => "Duplicate Short Code",
            MinilinkError::DuplicateUrl(_) => "Duplicate Original URL",
            MinilinkError::CollisionExhausted(_) => "Collision Resolution Exhausted",
            MinilinkError::DigestCapacityExceeded(_) => "Digest Capacity Exceeded",
            MinilinkError::DatabaseConfig(_) => "Database Configuration Error",
            MinilinkError::DatabaseConnection(_) => "Database Connection Error",
            MinilinkError::DatabaseOperation(_) => "Database Operation Error",
            MinilinkError::Serialization(_) => "Serialization Error",
            MinilinkError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            MinilinkError::InvalidInput(msg)
            | MinilinkError::DuplicateCode(msg)
            | MinilinkError::DuplicateUrl(msg)
            | MinilinkError::CollisionExhausted(msg)
            | MinilinkError::DigestCapacityExceeded(msg)
            | MinilinkError::DatabaseConfig(msg)
            | MinilinkError::DatabaseConnection(msg)
            | MinilinkError::DatabaseOperation(msg)
            | MinilinkError::Serialization(msg)
            | MinilinkError::FileOperation(msg) => msg,
        }
    }

    /// 存储层竞争导致的错误，由 ResolutionService 内部恢复
    pub fn is_store_race(&self) -> bool {
        matches!(
            self,
            MinilinkError::DuplicateCode(_) | MinilinkError::DuplicateUrl(_)
        )
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MinilinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MinilinkError {}

// 便捷的构造函数
impl MinilinkError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        MinilinkError::InvalidInput(msg.into())
    }

    pub fn duplicate_code<T: Into<String>>(msg: T) -> Self {
        MinilinkError::DuplicateCode(msg.into())
    }

    pub fn duplicate_url<T: Into<String>>(msg: T) -> Self {
        MinilinkError::DuplicateUrl(msg.into())
    }

    pub fn collision_exhausted<T: Into<String>>(msg: T) -> Self {
        MinilinkError::CollisionExhausted(msg.into())
    }

    pub fn digest_capacity_exceeded<T: Into<String>>(msg: T) -> Self {
        MinilinkError::DigestCapacityExceeded(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        MinilinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        MinilinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        MinilinkError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        MinilinkError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        MinilinkError::FileOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for MinilinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        MinilinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for MinilinkError {
    fn from(err: std::io::Error) -> Self {
        MinilinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MinilinkError {
    fn from(err: serde_json::Error) -> Self {
        MinilinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MinilinkError>;
