use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n- {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}
impl From<toml::ser::Error> for IoError {
    fn from(error: toml::ser::Error) -> Self {
        IoError{file: None, cause: IoErrorType::TomlSer(error)}
    }
}
impl From<serde_json::Error> for IoError {
    fn from(error: serde_json::Error) -> Self {
        IoError{file: None, cause: IoErrorType::SerdeJson(error)}
    }
}
impl From<serde_yaml::Error> for IoError {
    fn from(error: serde_yaml::Error) -> Self {
        IoError{file: None, cause: IoErrorType::SerdeYaml(error)}
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.rsplit('.').next() {
            Some("json") => Some(Format::Json),
            Some("toml") => Some(Format::Toml),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes())
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Serialize a config struct into the given format.
pub fn to_cfg_string<T>(cfg: &T, format: Format) -> IoResult<String>
where T: serde::Serialize
{
    Ok(match format {
        Format::Yaml => serde_yaml::to_string(cfg)?,
        Format::Json => serde_json::to_string_pretty(cfg)?,
        Format::Toml => toml::to_string_pretty(cfg)?,
    })
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    info!(path, "Loading config file");
    let with_file = |cause| IoError{file: Some(path.to_string()), cause};
    match Format::from_path(path) {
        Some(Format::Json) => {
            serde_json::from_reader(open(path)?).map_err(|error| with_file(IoErrorType::SerdeJson(error)))
        },
        Some(Format::Toml) => {
            toml::from_str(&read_to_string(path)?).map_err(|error| with_file(IoErrorType::TomlDe(error)))
        },
        Some(Format::Yaml) => {
            serde_yaml::from_reader(open(path)?).map_err(|error| with_file(IoErrorType::SerdeYaml(error)))
        },
        None => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(with_file(IoErrorType::StringOnly(error_string)))
        },
    }
}
