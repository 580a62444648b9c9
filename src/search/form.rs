//! Search form fields

use crate::form::ValueSource;

/// Field values of the recipe search page, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub need_to_have: String,
    pub max_time: String,
    pub can_not_have: String,
    pub intolerances: String,
    pub diet: String,
    pub cuisine: String,
    pub type_food: String,
}

impl SearchForm {
    /// Form field names in page order.
    pub const FIELDS: [&'static str; 7] = [
        "need_to_have",
        "max_time",
        "can_not_have",
        "intolerances",
        "diet",
        "cuisine",
        "type_food",
    ];

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "need_to_have" => &self.need_to_have,
            "max_time" => &self.max_time,
            "can_not_have" => &self.can_not_have,
            "intolerances" => &self.intolerances,
            "diet" => &self.diet,
            "cuisine" => &self.cuisine,
            "type_food" => &self.type_food,
            _ => return None,
        };
        Some(value)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "need_to_have" => &mut self.need_to_have,
            "max_time" => &mut self.max_time,
            "can_not_have" => &mut self.can_not_have,
            "intolerances" => &mut self.intolerances,
            "diet" => &mut self.diet,
            "cuisine" => &mut self.cuisine,
            "type_food" => &mut self.type_food,
            _ => return None,
        };
        Some(value)
    }
}

/// The form hands the validator its must-have ingredients field.
impl ValueSource for SearchForm {
    fn current_value(&self) -> String {
        self.need_to_have.clone()
    }
}
