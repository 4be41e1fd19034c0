//! Poll category records entered through the wizard

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named group of poll options, posted to one channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub channel: String,
    pub options: Vec<PollOption>,
}

/// A single selectable choice within a category
///
/// Named `PollOption` so the type does not shadow `std::option::Option`;
/// the serialized field names match the import format unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    pub name: String,
    pub emote: String,
    pub custom: bool,
}

impl Category {
    pub fn new(name: String, channel: String, options: Vec<PollOption>) -> Self {
        Self {
            name,
            channel,
            options,
        }
    }

    /// Convert to a JSON object.
    ///
    /// Keys come out alphabetically sorted at every level: serde_json's
    /// default object map is ordered by key, which the import format
    /// requires. Nested options expand recursively.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl PollOption {
    /// Build an option from the operator's answers.
    ///
    /// `custom` holds only when an emote was supplied AND the operator
    /// confirmed it; an emote-less option can never be custom.
    pub fn new(name: String, emote: String, custom_confirmed: bool) -> Self {
        let custom = !emote.is_empty() && custom_confirmed;
        Self {
            name,
            emote,
            custom,
        }
    }

    /// Convert to a JSON object with alphabetically sorted keys
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_requires_emote() {
        let opt = PollOption::new("Pizza".into(), "".into(), true);
        assert!(!opt.custom);
    }

    #[test]
    fn test_custom_requires_confirmation() {
        let opt = PollOption::new("Pizza".into(), "🍕".into(), false);
        assert!(!opt.custom);
    }

    #[test]
    fn test_custom_with_emote_and_confirmation() {
        let opt = PollOption::new("Pizza".into(), "🍕".into(), true);
        assert!(opt.custom);
        assert_eq!(opt.emote, "🍕");
        assert_eq!(opt.name, "Pizza");
    }

    #[test]
    fn test_option_keys_sorted() {
        let opt = PollOption::new("Pizza".into(), "🍕".into(), true);
        let json = opt.to_value().unwrap().to_string();
        let custom = json.find("\"custom\"").unwrap();
        let emote = json.find("\"emote\"").unwrap();
        let name = json.find("\"name\"").unwrap();
        assert!(custom < emote && emote < name);
    }

    #[test]
    fn test_category_keys_sorted() {
        let cat = Category::new("Lunch Poll".into(), "general".into(), vec![]);
        let json = cat.to_value().unwrap().to_string();
        let channel = json.find("\"channel\"").unwrap();
        let name = json.find("\"name\"").unwrap();
        let options = json.find("\"options\"").unwrap();
        assert!(channel < name && name < options);
    }

    #[test]
    fn test_options_preserve_entry_order() {
        let options = vec![
            PollOption::new("Pizza".into(), "".into(), false),
            PollOption::new("Tacos".into(), "".into(), false),
            PollOption::new("Sushi".into(), "".into(), false),
        ];
        let cat = Category::new("Lunch Poll".into(), "general".into(), options);
        let value = cat.to_value().unwrap();
        let names: Vec<&str> = value["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Pizza", "Tacos", "Sushi"]);
    }
}
