use serde::{Deserialize, Serialize};

/// An entry in the "Recent Activity" feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Activity {
    pub id: u32,
    pub actor: String,
    pub action: String,
    pub subject: String,
    /// Relative time as displayed, e.g. "2 hours ago".
    pub timestamp: String,
}

impl Activity {
    /// Avatar fallback: first letter of each word in the actor's name.
    pub fn initials(&self) -> String {
        initials(&self.actor)
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_each_word() {
        assert_eq!(initials("John Smith"), "JS");
        assert_eq!(initials("sarah  johnson"), "SJ");
        assert_eq!(initials("Madonna"), "M");
        assert_eq!(initials(""), "");
    }
}
