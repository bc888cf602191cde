//! Survey answers and their mapping onto the item feature space.
//!
//! A survey is a loose bag of named answers. Only five of them feed the
//! recommendation query:
//!
//! | answer      | feature      | default |
//! |-------------|--------------|---------|
//! | `budget`    | `price`      | 100.0   |
//! | `interests` | `category`   | "Any"   |
//! | `age_group` | `target_age` | "Any"   |
//! | `style`     | `style`      | "Any"   |
//! | `occasion`  | `occasion`   | "Any"   |
//!
//! Popularity is always [`SURVEY_POPULARITY`]. Every other answer is kept on
//! the survey but does not influence the query.

use crate::features::{FeatureRecord, DEFAULT_BUDGET, DEFAULT_CATEGORY, SURVEY_POPULARITY};
use crate::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const BUDGET: &str = "budget";
pub const INTERESTS: &str = "interests";
pub const AGE_GROUP: &str = "age_group";
pub const STYLE: &str = "style";
pub const OCCASION: &str = "occasion";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Survey {
    answers: Map<String, Value>,
}

impl Survey {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<Value>) -> Self {
        self.answers.insert(question.into(), answer.into());
        self
    }

    pub fn answer(&self, question: &str) -> Option<&Value> {
        self.answers.get(question)
    }

    pub fn answers(&self) -> &Map<String, Value> {
        &self.answers
    }

    pub fn budget(&self) -> f32 {
        self.answer(BUDGET)
            .and_then(lenient::number)
            .unwrap_or(DEFAULT_BUDGET)
    }

    fn text_or_default(&self, question: &str) -> String {
        self.answer(question)
            .and_then(lenient::text)
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }

    /// Query record for this survey
    pub fn record(&self) -> FeatureRecord {
        FeatureRecord {
            price: self.budget(),
            popularity: SURVEY_POPULARITY,
            category: self.text_or_default(INTERESTS),
            target_age: self.text_or_default(AGE_GROUP),
            style: self.text_or_default(STYLE),
            occasion: self.text_or_default(OCCASION),
        }
    }
}

impl From<Map<String, Value>> for Survey {
    fn from(answers: Map<String, Value>) -> Self {
        Self { answers }
    }
}
