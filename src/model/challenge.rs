use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Challenge category. Closed set; anything else is a validation error at
/// the command boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Misc,
    Web,
    Crypto,
    Reverse,
    Blockchain,
    Dfir,
    Osint,
    Pwn,
    Android,
    Ppc,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Misc,
        Category::Web,
        Category::Crypto,
        Category::Reverse,
        Category::Blockchain,
        Category::Dfir,
        Category::Osint,
        Category::Pwn,
        Category::Android,
        Category::Ppc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Misc => "misc",
            Category::Web => "web",
            Category::Crypto => "crypto",
            Category::Reverse => "reverse",
            Category::Blockchain => "blockchain",
            Category::Dfir => "dfir",
            Category::Osint => "osint",
            Category::Pwn => "pwn",
            Category::Android => "android",
            Category::Ppc => "ppc",
        }
    }

    /// Capitalized form for embeds and role names.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Misc => "Misc",
            Category::Web => "Web",
            Category::Crypto => "Crypto",
            Category::Reverse => "Reverse",
            Category::Blockchain => "Blockchain",
            Category::Dfir => "Dfir",
            Category::Osint => "Osint",
            Category::Pwn => "Pwn",
            Category::Android => "Android",
            Category::Ppc => "Ppc",
        }
    }

    fn allowed_list() -> String {
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid category: `{}`. Allowed categories: {}",
                    s,
                    Category::allowed_list()
                ))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Challenge difficulty, the sole input to the scoring table besides the
/// first-blood flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(AppError::Validation(format!(
                "Invalid difficulty: `{}`. Allowed difficulties: easy, medium, hard",
                s
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("Crypto".parse::<Category>().unwrap(), Category::Crypto);
        assert_eq!("PWN".parse::<Category>().unwrap(), Category::Pwn);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "stego".parse::<Category>().unwrap_err();
        assert!(err.user_message().unwrap().contains("Invalid category"));
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let err = "insane".parse::<Difficulty>().unwrap_err();
        assert!(err.user_message().unwrap().contains("Invalid difficulty"));
    }
}
