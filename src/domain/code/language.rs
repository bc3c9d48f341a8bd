use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Programming language declared for a code submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProgrammingLanguage {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    CSharp,
}

impl ProgrammingLanguage {
    pub const ALL: [ProgrammingLanguage; 6] = [
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Java,
        Self::Cpp,
        Self::CSharp,
    ];

    /// Display name, also used when interpolating into prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
        }
    }

    /// Source file extension accepted for uploads of this language
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::CSharp => "cs",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.file_extension() == extension)
    }
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgrammingLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "java" => Ok(Self::Java),
            "c++" | "cpp" | "cplusplus" => Ok(Self::Cpp),
            "c#" | "cs" | "csharp" => Ok(Self::CSharp),
            other => Err(DomainError::validation(format!(
                "Unsupported programming language: {}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ProgrammingLanguage {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProgrammingLanguage> for String {
    fn from(value: ProgrammingLanguage) -> Self {
        value.as_str().to_string()
    }
}
